#[macro_use]
extern crate log;

mod create_account;
mod create_place;
mod fetch_coordinates;
mod load_places;

pub mod prelude {
    pub use super::{create_account::*, create_place::*, fetch_coordinates::*, load_places::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use contacts_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use contacts_db_sqlite::Connections;
}
