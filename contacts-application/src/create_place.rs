use super::*;

pub fn create_place(
    connections: &sqlite::Connections,
    new_place: usecases::NewPlace,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        let storable = usecases::prepare_new_place(conn, new_place)?;
        usecases::store_new_place(conn, storable).map_err(|err| {
            warn!("Failed to store newly created place: {}", err);
            err
        })
    })?;
    info!(
        "Created place {} of account {}",
        place.id, place.account_id
    );
    Ok(place)
}
