use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback text when the server omits `error`.
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// Fallback display name when the server omits `user.username`.
pub const DEFAULT_USERNAME: &str = "User";
/// Fallback text when the server omits `message` on a successful promotion.
pub const DEFAULT_ADMIN_MESSAGE: &str = "Success!";

/// The user object returned next to a login token.
///
/// Only `username` is read; everything else the server sends is kept in
/// `extra` untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a 2xx reply to `POST /api/auth/login`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    /// Nom affiché dans le message de bienvenue
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or(DEFAULT_USERNAME)
    }

    /// Message d'erreur du serveur, ou le fallback générique
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR)
    }

    /// Token non vide, seulement si `success` est vrai
    pub fn bearer_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body of a 2xx reply to `POST /api/admin/make-me-admin`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdminResponse {
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_ADMIN_MESSAGE)
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}
