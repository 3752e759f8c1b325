//! Shared types, models and scoring for the Irrigation Decision Engine
//!
//! This crate contains the domain logic shared between the backend and the
//! WASM client. It performs no I/O.

pub mod models;
pub mod stress;
pub mod types;
pub mod validation;

pub use models::*;
pub use stress::*;
pub use types::*;
pub use validation::*;
