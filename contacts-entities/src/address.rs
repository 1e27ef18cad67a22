use itertools::Itertools as _;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street      : Option<String>,
    pub city        : Option<String>,
    pub province    : Option<String>,
    pub postal_code : Option<String>,
    pub country     : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.parts().next().is_none()
    }

    /// The non-empty parts in postal order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [
            &self.street,
            &self.city,
            &self.province,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
    }

    /// All parts on a single line, separated by single spaces.
    pub fn to_single_line(&self) -> String {
        self.parts().flat_map(str::split_whitespace).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        let addr = Address {
            city: Some("  ".into()),
            ..Default::default()
        };
        assert!(addr.is_empty());
        assert_eq!("", addr.to_single_line());
    }

    #[test]
    fn single_line_in_postal_order() {
        let addr = Address {
            street: Some("12  Rue   Sherbrooke".into()),
            city: Some("Montréal".into()),
            province: Some("QC".into()),
            postal_code: Some(" H2X 1X8 ".into()),
            country: Some("CAN".into()),
        };
        assert!(!addr.is_empty());
        assert_eq!(
            "12 Rue Sherbrooke Montréal QC H2X 1X8 CAN",
            addr.to_single_line()
        );
    }

    #[test]
    fn single_line_skips_missing_parts() {
        let addr = Address {
            city: Some("Berlin".into()),
            country: Some("DEU".into()),
            ..Default::default()
        };
        assert_eq!("Berlin DEU", addr.to_single_line());
    }
}
