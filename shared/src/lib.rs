//! Shared types and models for the retail back-office suite
//!
//! This crate contains the raw record types exchanged with the rest of
//! the application (inventory catalog, purchase and sales invoices) and
//! the derived batch types produced by the expiry engine.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
