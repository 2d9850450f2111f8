use super::*;
use csv::ReaderBuilder;
use std::{io, path::Path};

/// Read one address per row from a CSV file.
///
/// Only the first column is used. Values are trimmed and
/// rows without content are skipped.
pub fn load_addresses_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let addresses = read_addresses(reader)?;
    info!(
        "Loaded {} addresses from {}",
        addresses.len(),
        path.display()
    );
    Ok(addresses)
}

fn read_addresses<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<String>> {
    let mut addresses = Vec::new();
    for record in reader.records() {
        let record = record?;
        match record.get(0).map(str::trim) {
            Some(address) if !address.is_empty() => addresses.push(address.to_string()),
            _ => debug!("Skip empty row {:?}", record.position().map(|p| p.line())),
        }
    }
    Ok(addresses)
}
