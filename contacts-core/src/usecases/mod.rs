mod create_account;
mod create_place;
mod error;
mod fetch_coordinates;
mod load_places;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_account::*, create_place::*, error::Error, fetch_coordinates::*, load_places::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
