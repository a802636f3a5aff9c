//! CRM Backend API
//!
//! Accounts, customers, products and contracts behind a JSON envelope API,
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
