//! # admin-promoter-api
//!
//! Wire types exchanged with the remote service by `admin-promoter`.
//! The crate carries no HTTP dependency: it only describes JSON bodies.
//!
//! ## Features
//!
//! - Request DTOs (LoginRequest)
//! - Response DTOs (LoginResponse, UserSummary, AdminResponse)
//! - Fallback accessors for optional response fields
//!
//! ## Example
//!
//! ```rust
//! use admin_promoter_api::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest {
//!     email: "user@example.com".to_string(),
//!     password: "password123".to_string(),
//! };
//!
//! let response: LoginResponse =
//!     serde_json::from_str(r#"{"success": false}"#).unwrap();
//! assert_eq!(response.error_message(), "Unknown error");
//! ```

pub mod requests;
pub mod responses;

// Re-exports for convenient access
pub use requests::*;
pub use responses::*;
