#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # addrnorm-entities
//!
//! Reusable domain entities for address normalization.
//!
//! The entities only contain generic functionality that does not reveal
//! any provider-specific details.

pub mod address;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
