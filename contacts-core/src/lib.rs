pub mod entities {
    pub use contacts_entities::{
        account::*, address::*, geo::*, id::*, place::*, time::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
