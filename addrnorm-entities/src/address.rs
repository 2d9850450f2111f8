use itertools::Itertools;

/// Separator between the components of a normalized address line.
pub const NORMALIZED_SEPARATOR: &str = ", ";

/// The structured components of a geocoded address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressComponents {
    pub house_number : Option<String>,
    pub street       : Option<String>,
    pub city         : Option<String>,
    pub state        : Option<String>,
    pub postal_code  : Option<String>,
    pub country_code : Option<String>,
    pub country_name : Option<String>,
}

impl AddressComponents {
    /// Joins the present components in the order
    /// house number, street, city, state, postal code, country code.
    ///
    /// Missing or empty components are skipped.
    pub fn normalized_line(&self) -> String {
        let parts = [
            &self.house_number,
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country_code,
        ];
        parts
            .into_iter()
            .filter_map(Option::as_deref)
            .filter(|part| !part.is_empty())
            .join(NORMALIZED_SEPARATOR)
    }
}

/// An address as canonicalized by a geocoding provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedAddress {
    /// The input string as supplied.
    pub original: String,
    pub normalized: String,
    pub confidence: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Name of the country, e.g. "United States".
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl NormalizedAddress {
    pub fn from_components(
        original: impl Into<String>,
        components: AddressComponents,
        confidence: Option<f64>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        let normalized = components.normalized_line();
        let AddressComponents {
            city,
            state,
            postal_code,
            country_name,
            ..
        } = components;
        Self {
            original: original.into(),
            normalized,
            confidence: confidence.unwrap_or_default(),
            latitude,
            longitude,
            country: country_name,
            state,
            city,
            postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beverly_hills() -> AddressComponents {
        AddressComponents {
            house_number: Some("123".into()),
            street: Some("Main St".into()),
            city: Some("Beverly Hills".into()),
            state: Some("California".into()),
            postal_code: Some("90210".into()),
            country_code: Some("USA".into()),
            country_name: Some("United States".into()),
        }
    }

    #[test]
    fn normalized_line_with_all_components() {
        assert_eq!(
            "123, Main St, Beverly Hills, California, 90210, USA",
            beverly_hills().normalized_line()
        );
    }

    #[test]
    fn normalized_line_skips_missing_components() {
        let mut addr = beverly_hills();
        addr.house_number = None;
        addr.state = None;
        assert_eq!("Main St, Beverly Hills, 90210, USA", addr.normalized_line());
        addr.street = Some(String::new());
        assert_eq!("Beverly Hills, 90210, USA", addr.normalized_line());
    }

    #[test]
    fn normalized_line_ignores_country_name() {
        let addr = AddressComponents {
            country_name: Some("Germany".into()),
            ..Default::default()
        };
        assert_eq!("", addr.normalized_line());
    }

    #[test]
    fn create_normalized_address_from_components() {
        let addr = NormalizedAddress::from_components(
            "123 Main Street 90210",
            beverly_hills(),
            Some(0.95),
            Some(34.0736),
            Some(-118.4004),
        );
        assert_eq!("123 Main Street 90210", addr.original);
        assert_eq!(
            "123, Main St, Beverly Hills, California, 90210, USA",
            addr.normalized
        );
        assert_eq!(0.95, addr.confidence);
        assert_eq!(Some(34.0736), addr.latitude);
        assert_eq!(Some(-118.4004), addr.longitude);
        assert_eq!(Some("United States"), addr.country.as_deref());
        assert_eq!(Some("California"), addr.state.as_deref());
        assert_eq!(Some("Beverly Hills"), addr.city.as_deref());
        assert_eq!(Some("90210"), addr.postal_code.as_deref());
    }

    #[test]
    fn missing_score_and_position() {
        let addr = NormalizedAddress::from_components("x", beverly_hills(), None, None, None);
        assert_eq!(0.0, addr.confidence);
        assert!(addr.latitude.is_none());
        assert!(addr.longitude.is_none());
    }

    #[test]
    fn keep_single_coordinate() {
        let addr = NormalizedAddress::from_components("x", beverly_hills(), None, Some(1.5), None);
        assert_eq!(Some(1.5), addr.latitude);
        assert!(addr.longitude.is_none());
    }
}
