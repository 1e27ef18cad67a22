use super::*;

use contacts_core::gateways::geocode::GeoCodingGateway;

/// Resolve and store the coordinates of a place (best effort).
///
/// The geocoding request is sent without holding the
/// exclusive database connection.
pub fn fetch_coordinates(
    connections: &sqlite::Connections,
    geocoding: Option<&dyn GeoCodingGateway>,
    account_id: &AccountId,
    place_id: &PlaceId,
) -> Result<Option<Place>> {
    let place = {
        let db = connections.shared()?;
        usecases::load_place_of_account(&db, account_id, place_id)?
    };
    let Some(coordinates) = usecases::resolve_coordinates(geocoding, &place) else {
        debug!("Coordinates of place {} remain unchanged", place.id);
        return Ok(None);
    };
    let place = connections.exclusive()?.transaction(|conn| {
        // The place might have been modified in the meantime
        let place = usecases::load_place_of_account(conn, account_id, place_id)?;
        usecases::store_place_coordinates(conn, place, coordinates)
    })?;
    info!(
        "Updated coordinates of place {}: {:?}",
        place.id, place.coordinates
    );
    Ok(Some(place))
}
