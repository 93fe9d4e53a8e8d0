// src/client.rs

use admin_promoter_api::{AdminResponse, LoginRequest, LoginResponse};
use reqwest::{Client, header};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::PromoteError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client HTTP vers le service distant.
///
/// Les statuts hors 2xx sont convertis en `PromoteError::Transport` via
/// `error_for_status`; le corps n'est lu que pour les réponses 2xx.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client reqwest par défaut (timeouts de reqwest, aucun retry)
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// POST /api/auth/login
    #[instrument(skip_all, fields(email = %Config::mask_email(&request.email)))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, PromoteError> {
        let url = self.config.login_url();
        debug!(%url, "Sending login request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(PromoteError::Transport)?
            .error_for_status()
            .map_err(PromoteError::Transport)?;

        let body: LoginResponse = response.json().await.map_err(PromoteError::Decode)?;
        debug!(success = body.success, "Login response received");

        Ok(body)
    }

    /// POST /api/admin/make-me-admin
    /// Pas de corps : seul le header `Authorization: Bearer <token>` authentifie l'appel
    #[instrument(skip_all)]
    pub async fn make_me_admin(&self, token: &str) -> Result<AdminResponse, PromoteError> {
        let url = self.config.make_admin_url();
        debug!(%url, "Sending make-me-admin request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(PromoteError::Transport)?
            .error_for_status()
            .map_err(PromoteError::Transport)?;

        let body: AdminResponse = response.json().await.map_err(PromoteError::Decode)?;
        debug!(success = body.success, "Make-me-admin response received");

        Ok(body)
    }
}
