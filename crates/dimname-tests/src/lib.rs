//! Integration test support for the DIM name generator.
//!
//! - [`fixtures`] builds synthetic character sheets, so no binary assets
//!   need to live in the repository.
//! - [`harness`] sets up a temporary assets/output layout and drives the
//!   CLI library against it.

pub mod fixtures;
pub mod harness;
