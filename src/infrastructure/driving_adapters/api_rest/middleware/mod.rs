//! API Middleware
//!
//! Authentication, request ids and validating extractors for the REST API.

pub mod auth;
pub mod request_id;
pub mod validation;

pub use auth::{require_auth, Uid, UID_HEADER};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use validation::{ValidatedJson, ValidatedQuery};
