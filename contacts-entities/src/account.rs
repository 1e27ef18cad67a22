use crate::{id::AccountId, time::Timestamp};

/// The owner of places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub created_at: Timestamp,
}
