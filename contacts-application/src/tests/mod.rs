
pub mod prelude {
    use std::cell::Cell;

    pub use contacts_core::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::prelude as flows;

    /// Always resolves to the configured coordinates.
    pub struct DummyGeoCodingGW {
        lat_lng: Option<(f64, f64)>,
        pub requests: Cell<usize>,
    }

    impl DummyGeoCodingGW {
        pub fn new(lat_lng: Option<(f64, f64)>) -> Self {
            Self {
                lat_lng,
                requests: Cell::new(0),
            }
        }
    }

    impl GeoCodingGateway for DummyGeoCodingGW {
        fn resolve_address_lat_lng(&self, _: &Address) -> Option<(f64, f64)> {
            self.requests.set(self.requests.get() + 1);
            self.lat_lng
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            contacts_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_account(&self) -> AccountId {
            flows::create_account(&self.db_connections).unwrap().id
        }

        pub fn create_place(&self, new_place: usecases::NewPlace) -> Place {
            flows::create_place(&self.db_connections, new_place).unwrap()
        }

        pub fn try_get_place(&self, account_id: &AccountId, place_id: &PlaceId) -> Option<Place> {
            match self
                .db_connections
                .shared()
                .unwrap()
                .get_place_of_account(account_id, place_id)
            {
                Ok(place) => Some(place),
                Err(RepoError::NotFound) => None,
                x => x.map(Some).unwrap(),
            }
        }

        pub fn place_exists(&self, account_id: &AccountId, place_id: &PlaceId) -> bool {
            self.try_get_place(account_id, place_id).is_some()
        }

        pub fn count_places(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_places()
                .unwrap()
        }
    }

    pub fn new_place_in_montreal(account_id: &AccountId) -> usecases::NewPlace {
        usecases::NewPlace {
            account_id: account_id.clone(),
            street: Some("12 Rue Sherbrooke".into()),
            city: Some("Montréal".into()),
            province: Some("QC".into()),
            postal_code: Some("H2X 1X8".into()),
            country: Some("CAN".into()),
            latitude: None,
            longitude: None,
        }
    }
}
