//! Shared code for parser and checker

pub mod typed_ids;
pub mod error;
