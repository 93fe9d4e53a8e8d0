use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------

/// Body of `POST /api/auth/login`.
///
/// `make-me-admin` has no request body: the bearer token travels in the
/// `Authorization` header only.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String, // Plain text
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
