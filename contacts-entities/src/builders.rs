pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, place_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn account_id(mut self, id: &str) -> Self {
            self.place.account_id = id.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.place.address = address;
            self
        }
        pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
            self.place.coordinates = Coordinates::new(latitude, longitude);
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            let now = Timestamp::now();
            PlaceBuild {
                place: Place {
                    id: PlaceId::new(),
                    account_id: AccountId::new(),
                    address: Address::default(),
                    coordinates: Coordinates::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn province(mut self, x: &str) -> Self {
            self.addr.province = Some(x.into());
            self
        }
        pub fn postal_code(mut self, x: &str) -> Self {
            self.addr.postal_code = Some(x.into());
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.addr.country = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> AddressBuild {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }
}
