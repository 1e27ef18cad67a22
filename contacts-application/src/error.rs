use contacts_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use contacts_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        match err {
            ParameterError::Repo(err) => err.into(),
            err => AppError::Business(BError::Parameter(err)),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Business(BError::Repo(RepoError::NotFound)))
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Business(BError::Parameter(_)))
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
