use crate::entities::NormalizedAddress;
use std::collections::HashMap;

const KEY_SEPARATOR: &str = "|";

/// Records that share the same deduplication key.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub key: String,
    pub members: Vec<NormalizedAddress>,
}

/// Build the key that is used to compare normalized addresses.
///
/// The key consists of the lower-cased normalized line, latitude,
/// longitude, postal code, city and state. Missing values become
/// empty strings.
pub fn deduplication_key(addr: &NormalizedAddress) -> String {
    let NormalizedAddress {
        normalized,
        latitude,
        longitude,
        postal_code,
        city,
        state,
        ..
    } = addr;
    [
        normalized.to_lowercase(),
        latitude.map(coordinate_to_string).unwrap_or_default(),
        longitude.map(coordinate_to_string).unwrap_or_default(),
        postal_code.clone().unwrap_or_default(),
        city.clone().unwrap_or_default(),
        state.clone().unwrap_or_default(),
    ]
    .join(KEY_SEPARATOR)
}

// Shortest representation that still round-trips, e.g. "34.0" or "34.0736"
fn coordinate_to_string(deg: f64) -> String {
    format!("{deg:?}")
}

/// Group records with identical deduplication keys.
///
/// Only groups with at least two members are returned.
/// Groups appear in the order in which their key was first seen
/// and keep their members in input order.
pub fn find_duplicates(results: &[NormalizedAddress]) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    for addr in results {
        let key = deduplication_key(addr);
        match index_by_key.get(&key) {
            Some(&idx) => groups[idx].members.push(addr.clone()),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(DuplicateGroup {
                    key,
                    members: vec![addr.clone()],
                });
            }
        }
    }
    groups.retain(|group| group.members.len() > 1);
    log::debug!(
        "Found {} groups of duplicates in {} addresses",
        groups.len(),
        results.len()
    );
    groups
}
