use super::prelude::*;
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub account_id  : AccountId,
    pub street      : Option<String>,
    pub city        : Option<String>,
    pub province    : Option<String>,
    pub postal_code : Option<String>,
    pub country     : Option<String>,
    pub latitude    : Option<f64>,
    pub longitude   : Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Storable(Place);

// Blank values are stored as NULL
fn null_or_value(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

pub fn prepare_new_place<R: AccountRepo>(repo: &R, new_place: NewPlace) -> Result<Storable> {
    let NewPlace {
        account_id,
        street,
        city,
        province,
        postal_code,
        country,
        latitude,
        longitude,
    } = new_place;
    let address = Address {
        street: null_or_value(street),
        city: null_or_value(city),
        province: null_or_value(province),
        postal_code: null_or_value(postal_code),
        country: null_or_value(country),
    };
    address.validate()?;
    let coordinates = Coordinates {
        latitude,
        longitude,
    };
    coordinates.validate()?;
    if !account_id.is_valid() || !repo.account_exists(&account_id)? {
        return Err(Error::UnknownAccount);
    }
    let now = Timestamp::now();
    let place = Place {
        id: PlaceId::new(),
        account_id,
        address,
        coordinates,
        created_at: now,
        updated_at: now,
    };
    Ok(Storable(place))
}

pub fn store_new_place<R: PlaceRepo>(repo: &R, s: Storable) -> Result<Place> {
    let Storable(place) = s;
    log::debug!("Storing new place: {:?}", place);
    repo.create_place(&place)?;
    Ok(place)
}
