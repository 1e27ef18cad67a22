#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # contacts-entities
//!
//! Reusable, agnostic domain entities for the contacts backend.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod account;
pub mod address;
pub mod geo;
pub mod id;
pub mod place;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
