pub mod prelude {
    pub(crate) use crate::{GeoCodingGateway, NormalizedAddress};
    pub use addrnorm_entities::builders::*;

    use std::collections::HashMap;

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn beverly_hills(original: &str) -> NormalizedAddress {
        NormalizedAddress::build()
            .original(original)
            .normalized("123, Main St, Beverly Hills, CA, 90210, USA")
            .confidence(0.95)
            .pos(34.0736, -118.4004)
            .country(Some("United States"))
            .state(Some("CA"))
            .city(Some("Beverly Hills"))
            .postal_code(Some("90210"))
            .finish()
    }

    /// Answers lookups from a fixed table.
    #[derive(Default)]
    pub struct MockGeoGW {
        known: HashMap<String, NormalizedAddress>,
    }

    impl MockGeoGW {
        pub fn resolve(mut self, address: &str, normalized: NormalizedAddress) -> Self {
            self.known.insert(address.into(), normalized);
            self
        }
    }

    impl GeoCodingGateway for MockGeoGW {
        fn normalize_address(&self, address: &str) -> Option<NormalizedAddress> {
            self.known.get(address).cloned()
        }
    }
}
