use super::*;

pub fn get_place(
    connections: &sqlite::Connections,
    account_id: &AccountId,
    place_id: &PlaceId,
) -> Result<Place> {
    let db = connections.shared()?;
    Ok(usecases::get_place(&db, account_id, place_id)?)
}

pub fn places_of_account(
    connections: &sqlite::Connections,
    account_id: &AccountId,
) -> Result<Vec<Place>> {
    let db = connections.shared()?;
    Ok(usecases::places_of_account(&db, account_id)?)
}
