use crate::{
    repositories,
    util::validate::{AddressInvalidation, CoordinatesInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The account does not exist")]
    UnknownAccount,
    #[error("Invalid street")]
    Street,
    #[error("Invalid city")]
    City,
    #[error("Invalid province")]
    Province,
    #[error("Invalid postal code")]
    PostalCode,
    #[error("Invalid country code")]
    Country,
    #[error("Invalid latitude")]
    Latitude,
    #[error("Invalid longitude")]
    Longitude,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Errors caused by invalid input parameters.
    pub fn is_validation_error(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}

impl From<AddressInvalidation> for Error {
    fn from(err: AddressInvalidation) -> Self {
        match err {
            AddressInvalidation::Street => Self::Street,
            AddressInvalidation::City => Self::City,
            AddressInvalidation::Province => Self::Province,
            AddressInvalidation::PostalCode => Self::PostalCode,
            AddressInvalidation::Country => Self::Country,
        }
    }
}

impl From<CoordinatesInvalidation> for Error {
    fn from(err: CoordinatesInvalidation) -> Self {
        match err {
            CoordinatesInvalidation::Latitude => Self::Latitude,
            CoordinatesInvalidation::Longitude => Self::Longitude,
        }
    }
}
