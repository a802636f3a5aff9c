//! HTTP Handlers
//!
//! One module per resource, each exposing its router.

pub mod contracts;
pub mod customers;
pub mod files;
pub mod mail_configs;
pub mod notices;
pub mod products;
pub mod subscriptions;
pub mod users;
