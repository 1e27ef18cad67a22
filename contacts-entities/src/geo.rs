const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

pub fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

pub fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

/// Optional geographic coordinates in degrees.
///
/// Both components are independent of each other, i.e. a latitude
/// may be present without a longitude and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_degrees() {
        assert!(is_valid_lat_deg(90.0));
        assert!(is_valid_lat_deg(-90.0));
        assert!(!is_valid_lat_deg(90.1));
        assert!(!is_valid_lat_deg(f64::NAN));
        assert!(is_valid_lng_deg(-180.0));
        assert!(!is_valid_lng_deg(180.5));
        assert!(!is_valid_lng_deg(f64::INFINITY));
    }

    #[test]
    fn partial_coordinates() {
        let c = Coordinates {
            latitude: Some(45.5),
            longitude: None,
        };
        assert!(!c.is_empty());
        assert!(Coordinates::default().is_empty());
    }
}
