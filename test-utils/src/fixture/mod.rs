//! Test fixtures providing in-memory data without database insertion.
//!
//! Use these for unit tests of domain conversions and pure pricing logic, and as defaults for
//! factories.

pub mod address;
pub mod product;
pub mod user;
