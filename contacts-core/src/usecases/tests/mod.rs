use super::prelude::*;
use crate::{gateways::geocode::GeoCodingGateway, repositories::Error as RepoError};
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub accounts: RefCell<Vec<Account>>,
    pub places: RefCell<Vec<Place>>,
}

impl MockDb {
    pub fn add_account(&self) -> Account {
        let account = Account {
            id: AccountId::new(),
            created_at: Timestamp::now(),
        };
        self.accounts.borrow_mut().push(account.clone());
        account
    }
}

impl AccountRepo for MockDb {
    fn create_account(&self, account: &Account) -> RepoResult<()> {
        if self.accounts.borrow().iter().any(|a| a.id == account.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.accounts.borrow_mut().push(account.clone());
        Ok(())
    }

    fn get_account(&self, id: &AccountId) -> RepoResult<Account> {
        self.accounts
            .borrow()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: &Place) -> RepoResult<()> {
        if self.places.borrow().iter().any(|p| p.id == place.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.places.borrow_mut().push(place.clone());
        Ok(())
    }

    fn update_place(&self, place: &Place) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        let existing = places
            .iter_mut()
            .find(|p| p.id == place.id)
            .ok_or(RepoError::NotFound)?;
        *existing = place.clone();
        Ok(())
    }

    fn get_place_of_account(
        &self,
        account_id: &AccountId,
        place_id: &PlaceId,
    ) -> RepoResult<Place> {
        self.places
            .borrow()
            .iter()
            .find(|p| &p.id == place_id && &p.account_id == account_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn places_of_account(&self, account_id: &AccountId) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| &p.account_id == account_id)
            .cloned()
            .collect())
    }

    fn count_places(&self) -> RepoResult<usize> {
        Ok(self.places.borrow().len())
    }
}

/// Resolves every address to the same result and counts the requests.
pub struct FixedGeoCodingGW {
    lat_lng: Option<(f64, f64)>,
    pub calls: Cell<usize>,
}

impl FixedGeoCodingGW {
    pub fn new(lat_lng: Option<(f64, f64)>) -> Self {
        Self {
            lat_lng,
            calls: Cell::new(0),
        }
    }
}

impl GeoCodingGateway for FixedGeoCodingGW {
    fn resolve_address_lat_lng(&self, _: &Address) -> Option<(f64, f64)> {
        self.calls.set(self.calls.get() + 1);
        self.lat_lng
    }
}
