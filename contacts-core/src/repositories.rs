// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AccountRepo {
    fn create_account(&self, account: &Account) -> Result<()>;
    fn get_account(&self, id: &AccountId) -> Result<Account>;

    fn account_exists(&self, id: &AccountId) -> Result<bool> {
        match self.get_account(id) {
            Ok(_) => Ok(true),
            Err(Error::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

pub trait PlaceRepo {
    fn create_place(&self, place: &Place) -> Result<()>;

    /// Overwrites all mutable fields of an existing place.
    fn update_place(&self, place: &Place) -> Result<()>;

    // Only places owned by the given account
    fn get_place_of_account(&self, account_id: &AccountId, place_id: &PlaceId) -> Result<Place>;
    fn places_of_account(&self, account_id: &AccountId) -> Result<Vec<Place>>;

    fn count_places(&self) -> Result<usize>;
}
