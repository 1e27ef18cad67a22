use super::prelude::*;

pub fn get_place<R>(repo: &R, account_id: &AccountId, place_id: &PlaceId) -> Result<Place>
where
    R: PlaceRepo,
{
    Ok(repo.get_place_of_account(account_id, place_id)?)
}

pub fn places_of_account<R>(repo: &R, account_id: &AccountId) -> Result<Vec<Place>>
where
    R: AccountRepo + PlaceRepo,
{
    // Fails for unknown accounts instead of returning an empty list
    repo.get_account(account_id)?;
    let mut places = repo.places_of_account(account_id)?;
    places.sort_by_key(|p| p.created_at);
    Ok(places)
}
