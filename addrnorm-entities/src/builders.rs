pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::normalized_address_builder::*;

pub mod normalized_address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct NormalizedAddressBuild {
        addr: NormalizedAddress,
    }

    impl NormalizedAddressBuild {
        pub fn original(mut self, original: &str) -> Self {
            self.addr.original = original.into();
            self
        }
        pub fn normalized(mut self, normalized: &str) -> Self {
            self.addr.normalized = normalized.into();
            self
        }
        pub fn confidence(mut self, confidence: f64) -> Self {
            self.addr.confidence = confidence;
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.addr.latitude = Some(lat);
            self.addr.longitude = Some(lng);
            self
        }
        pub fn latitude(mut self, lat: Option<f64>) -> Self {
            self.addr.latitude = lat;
            self
        }
        pub fn country(mut self, country: Option<&str>) -> Self {
            self.addr.country = country.map(Into::into);
            self
        }
        pub fn state(mut self, state: Option<&str>) -> Self {
            self.addr.state = state.map(Into::into);
            self
        }
        pub fn city(mut self, city: Option<&str>) -> Self {
            self.addr.city = city.map(Into::into);
            self
        }
        pub fn postal_code(mut self, postal_code: Option<&str>) -> Self {
            self.addr.postal_code = postal_code.map(Into::into);
            self
        }
        pub fn finish(self) -> NormalizedAddress {
            self.addr
        }
    }

    impl Builder for NormalizedAddress {
        type Build = NormalizedAddressBuild;
        fn build() -> NormalizedAddressBuild {
            NormalizedAddressBuild {
                addr: NormalizedAddress::default(),
            }
        }
    }
}
