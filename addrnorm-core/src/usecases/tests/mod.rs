pub mod prelude {
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};
    pub use addrnorm_entities::builders::*;

    use std::{cell::RefCell, collections::HashMap};

    /// Resolves only the addresses it was told about
    /// and records every lookup.
    #[derive(Default)]
    pub struct MockGeoGW {
        known: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl MockGeoGW {
        pub fn resolve(mut self, address: &str, normalized: &str) -> Self {
            self.known.insert(address.into(), normalized.into());
            self
        }
        pub fn requested(&self) -> Vec<String> {
            self.requested.borrow().clone()
        }
    }

    impl GeoCodingGateway for MockGeoGW {
        fn normalize_address(&self, address: &str) -> Option<NormalizedAddress> {
            self.requested.borrow_mut().push(address.into());
            self.known.get(address).map(|normalized| {
                NormalizedAddress::build()
                    .original(address)
                    .normalized(normalized)
                    .finish()
            })
        }
    }
}
