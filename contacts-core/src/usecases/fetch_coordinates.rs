use super::prelude::*;
use crate::{gateways::geocode::GeoCodingGateway, util::validate::Validate};

/// Load a place that must be owned by the given account.
pub fn load_place_of_account<R>(
    repo: &R,
    account_id: &AccountId,
    place_id: &PlaceId,
) -> Result<Place>
where
    R: AccountRepo + PlaceRepo,
{
    repo.get_account(account_id)?;
    Ok(repo.get_place_of_account(account_id, place_id)?)
}

/// Ask the geocoding gateway for the coordinates of the
/// place's address.
///
/// Without a gateway, i.e. if geolocation has been disabled or
/// is not configured, nothing is resolved. Failures of the
/// gateway are not propagated.
pub fn resolve_coordinates(
    geocoding: Option<&dyn GeoCodingGateway>,
    place: &Place,
) -> Option<Coordinates> {
    let Some(gw) = geocoding else {
        log::debug!(
            "Geolocation is disabled: skip resolving the coordinates of place {}",
            place.id
        );
        return None;
    };
    if place.address.is_empty() {
        log::debug!("Place {} has no address to resolve", place.id);
        return None;
    }
    let (lat, lng) = gw.resolve_address_lat_lng(&place.address)?;
    let coordinates = Coordinates::new(lat, lng);
    if let Err(err) = coordinates.validate() {
        log::warn!(
            "Discarding resolved coordinates ({lat}, {lng}) of place {}: {err}",
            place.id
        );
        return None;
    }
    Some(coordinates)
}

pub fn store_place_coordinates<R: PlaceRepo>(
    repo: &R,
    mut place: Place,
    coordinates: Coordinates,
) -> Result<Place> {
    place.coordinates = coordinates;
    place.updated_at = Timestamp::now();
    log::debug!(
        "Storing coordinates of place {}: {:?}",
        place.id,
        place.coordinates
    );
    repo.update_place(&place)?;
    Ok(place)
}

/// Resolve and store the coordinates of a place (best effort).
///
/// Returns `Ok(None)` if the coordinates could not be resolved.
/// The place then remains unchanged.
pub fn fetch_coordinates<R>(
    repo: &R,
    geocoding: Option<&dyn GeoCodingGateway>,
    account_id: &AccountId,
    place_id: &PlaceId,
) -> Result<Option<Place>>
where
    R: AccountRepo + PlaceRepo,
{
    let place = load_place_of_account(repo, account_id, place_id)?;
    let Some(coordinates) = resolve_coordinates(geocoding, &place) else {
        return Ok(None);
    };
    store_place_coordinates(repo, place, coordinates).map(Some)
}
