//! Authentication module
//!
//! Mock client-side sessions backed by the local key-value store, plus the
//! form validation rules applied before any auth call.

pub mod service;
pub mod validation;

pub use service::MockAuthService;
