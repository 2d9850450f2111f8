use crate::{entities::NormalizedAddress, gateways::geocode::GeoCodingGateway};
use std::{thread, time::Duration};

/// Default pause between two consecutive lookups.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(100);

/// Normalize all addresses one after another.
///
/// The calling thread sleeps for `delay` between two requests
/// (not after the last one). Addresses that could not be
/// normalized are omitted, the order of the remaining
/// records matches the input order.
pub fn normalize_batch<G, A>(
    gateway: &G,
    addresses: &[A],
    delay: Duration,
) -> Vec<NormalizedAddress>
where
    G: GeoCodingGateway + ?Sized,
    A: AsRef<str>,
{
    let total = addresses.len();
    let mut results = Vec::with_capacity(total);
    for (i, address) in addresses.iter().enumerate() {
        let address = address.as_ref();
        log::info!("Processing address {}/{total}: {address}", i + 1);
        if let Some(normalized) = gateway.normalize_address(address) {
            results.push(normalized);
        }
        if i + 1 < total && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    log::debug!("Normalized {} of {total} addresses", results.len());
    results
}
