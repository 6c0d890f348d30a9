//! Clients for outbound services.
//!
//! Each integration sits behind a trait stored as an `Arc<dyn _>` in `AppState`, so services can
//! run against fakes in tests.

pub mod llm;
pub mod mail;
pub mod payment;
