use addrnorm_entities::address::NormalizedAddress;

/// A remote service that canonicalizes free-text addresses.
///
/// Implementations absorb their own failures: an address that could
/// not be resolved for whatever reason yields `None`.
pub trait GeoCodingGateway {
    fn normalize_address(&self, address: &str) -> Option<NormalizedAddress>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn normalize_address(&self, address: &str) -> Option<NormalizedAddress> {
        (**self).normalize_address(address)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn normalize_address(&self, address: &str) -> Option<NormalizedAddress> {
        (**self).normalize_address(address)
    }
}
