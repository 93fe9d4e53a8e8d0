// src/config.rs

use admin_promoter_api::LoginRequest;

/// URL de base du service distant
pub const BASE_URL: &str = "https://web-production-5dffa.up.railway.app";
pub const EMAIL: &str = "omarAbdelghany56@gmail.com";
pub const PASSWORD: &str = "omarAbdelghany56@gmail.com";

const LOGIN_PATH: &str = "/api/auth/login";
const MAKE_ADMIN_PATH: &str = "/api/admin/make-me-admin";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    email: String,
    password: String,
}

impl Default for Config {
    /// Configuration figée du script
    fn default() -> Self {
        Self::new(BASE_URL, EMAIL, PASSWORD)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("email", &Self::mask_email(&self.email))
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Construit une configuration explicite (utilisé par les tests avec un serveur mock)
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Corps de la requête de login
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, LOGIN_PATH)
    }

    pub fn make_admin_url(&self) -> String {
        format!("{}{}", self.base_url, MAKE_ADMIN_PATH)
    }

    /// Page de login de l'application web (instructions finales)
    pub fn login_page_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}/dashboard", self.base_url)
    }

    /// Masque la partie locale de l'email dans les logs
    pub fn mask_email(email: &str) -> String {
        if let Some((local, domain)) = email.split_once('@')
            && let Some(first) = local.chars().next()
        {
            return format!("{first}***@{domain}");
        }
        "***".to_string()
    }
}
