use crate::{address::*, geo::*, id::*, time::*};

/// A postal address that belongs to an account and is
/// optionally enriched with geographic coordinates.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id          : PlaceId,
    pub account_id  : AccountId,
    pub address     : Address,
    pub coordinates : Coordinates,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}
