use contacts_entities::{
    address::Address,
    geo::{is_valid_lat_deg, is_valid_lng_deg, Coordinates},
};
use thiserror::Error;

pub const MAX_ADDRESS_PART_LEN: usize = 255;
pub const MAX_COUNTRY_CODE_LEN: usize = 3;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_valid_len(s: &Option<String>, max_len: usize) -> bool {
    s.as_ref().map_or(true, |s| s.chars().count() <= max_len)
}

#[derive(Debug, Error)]
pub enum AddressInvalidation {
    #[error("Invalid street")]
    Street,
    #[error("Invalid city")]
    City,
    #[error("Invalid province")]
    Province,
    #[error("Invalid postal code")]
    PostalCode,
    #[error("Invalid country code")]
    Country,
}

impl Validate for Address {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let Address {
            street,
            city,
            province,
            postal_code,
            country,
        } = self;
        if !is_valid_len(street, MAX_ADDRESS_PART_LEN) {
            return Err(Self::Error::Street);
        }
        if !is_valid_len(city, MAX_ADDRESS_PART_LEN) {
            return Err(Self::Error::City);
        }
        if !is_valid_len(province, MAX_ADDRESS_PART_LEN) {
            return Err(Self::Error::Province);
        }
        if !is_valid_len(postal_code, MAX_ADDRESS_PART_LEN) {
            return Err(Self::Error::PostalCode);
        }
        if !is_valid_len(country, MAX_COUNTRY_CODE_LEN) {
            return Err(Self::Error::Country);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum CoordinatesInvalidation {
    #[error("Invalid latitude")]
    Latitude,
    #[error("Invalid longitude")]
    Longitude,
}

impl Validate for Coordinates {
    type Error = CoordinatesInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.latitude.map_or(true, is_valid_lat_deg) {
            return Err(Self::Error::Latitude);
        }
        if !self.longitude.map_or(true, is_valid_lng_deg) {
            return Err(Self::Error::Longitude);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_with_at_most_3_chars() {
        let mut addr = Address {
            country: Some("CAN".into()),
            ..Default::default()
        };
        assert!(addr.validate().is_ok());
        addr.country = Some("CANA".into());
        assert!(matches!(addr.validate(), Err(AddressInvalidation::Country)));
    }

    #[test]
    fn length_is_counted_in_chars() {
        let addr = Address {
            street: Some("ü".repeat(MAX_ADDRESS_PART_LEN)),
            country: Some("ÖÄÜ".into()),
            ..Default::default()
        };
        assert!(addr.validate().is_ok());
    }

    #[test]
    fn too_long_parts() {
        let too_long = Some("x".repeat(MAX_ADDRESS_PART_LEN + 1));
        let addr = Address {
            city: too_long.clone(),
            ..Default::default()
        };
        assert!(matches!(addr.validate(), Err(AddressInvalidation::City)));
        let addr = Address {
            postal_code: too_long,
            ..Default::default()
        };
        assert!(matches!(addr.validate(), Err(AddressInvalidation::PostalCode)));
    }

    #[test]
    fn coordinates_out_of_range() {
        let c = Coordinates {
            latitude: Some(-90.5),
            longitude: None,
        };
        assert!(matches!(c.validate(), Err(CoordinatesInvalidation::Latitude)));
        let c = Coordinates {
            latitude: None,
            longitude: Some(f64::NAN),
        };
        assert!(matches!(c.validate(), Err(CoordinatesInvalidation::Longitude)));
        assert!(Coordinates::new(45.5, -73.6).validate().is_ok());
    }

    #[test]
    fn partial_coordinates_are_valid() {
        let c = Coordinates {
            latitude: Some(45.5),
            longitude: None,
        };
        assert!(c.validate().is_ok());
        assert!(Coordinates::default().validate().is_ok());
        assert!(matches!(
            Coordinates::new(100.0, 0.0).validate(),
            Err(CoordinatesInvalidation::Latitude)
        ));
    }
}
