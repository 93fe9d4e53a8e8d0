// src/promoter.rs

use std::io::Write;

use admin_promoter_api::LoginResponse;

use crate::client::ApiClient;
use crate::console::Console;
use crate::error::PromoteError;

const TITLE: &str = "WhatsApp Analytics - Make User Admin";

/// Résultat final d'une exécution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Promoted,
    LoginFailed,
    PromotionFailed,
}

/// Connexion puis promotion admin du compte configuré.
///
/// Chaque échec est converti en message console plus une valeur sentinelle;
/// aucune erreur ne remonte au-delà de cette struct.
pub struct AdminPromoter<W: Write> {
    client: ApiClient,
    console: Console<W>,
}

impl<W: Write> AdminPromoter<W> {
    pub fn new(client: ApiClient, console: Console<W>) -> Self {
        Self { client, console }
    }

    #[cfg(test)]
    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    /// Étape 1 : login, renvoie le bearer token s'il y en a un
    pub async fn login(&mut self) -> Option<String> {
        self.console.line("🔐 Logging in...");

        match self.authenticate().await {
            Ok(response) => {
                self.console.line(format_args!(
                    "✅ Login successful! Welcome {}",
                    response.display_name()
                ));
                let token = response.bearer_token().map(ToString::to_string);
                if token.is_none() {
                    tracing::warn!("Login succeeded but the response carried no token");
                }
                token
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, status = ?e.status(), "Login request failed");
                self.console.line(format_args!("❌ Login request failed: {e}"));
                None
            }
            Err(e) => {
                tracing::warn!(reason = %e, "Login rejected by server");
                self.console.line(format_args!("❌ Login failed: {e}"));
                None
            }
        }
    }

    /// Réponse de login acceptée, ou l'erreur de l'appel
    async fn authenticate(&self) -> Result<LoginResponse, PromoteError> {
        let request = self.client.config().login_request();
        let response = self.client.login(&request).await?;

        if !response.success {
            return Err(PromoteError::rejected(response.error_message()));
        }

        Ok(response)
    }

    /// Étape 2 : promotion admin avec le token obtenu
    pub async fn make_admin(&mut self, token: &str) -> bool {
        self.console.blank();
        self.console.line("🛡️  Making user admin...");

        match self.promote(token).await {
            Ok(message) => {
                self.console.line(format_args!("✅ {message}"));
                self.print_next_steps();
                true
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, status = ?e.status(), "Make admin request failed");
                self.console
                    .line(format_args!("❌ Make admin request failed: {e}"));
                false
            }
            Err(e) => {
                tracing::warn!(reason = %e, "Promotion rejected by server");
                self.console.line(format_args!("❌ Failed to make admin: {e}"));
                false
            }
        }
    }

    async fn promote(&self, token: &str) -> Result<String, PromoteError> {
        let response = self.client.make_me_admin(token).await?;

        if !response.success {
            return Err(PromoteError::rejected(response.error_message()));
        }

        Ok(response.message_or_default().to_string())
    }

    fn print_next_steps(&mut self) {
        let login_page = self.client.config().login_page_url();
        let dashboard = self.client.config().dashboard_url();

        self.console.blank();
        self.console.line("📝 Next steps:");
        self.console.line("1. Logout from the web app");
        self.console
            .line(format_args!("2. Login again at: {login_page}"));
        self.console
            .line(format_args!("3. Access dashboard at: {dashboard}"));
    }

    /// Séquence complète : bannière, login, promotion, bannière finale
    pub async fn run(&mut self) -> Outcome {
        self.console.rule();
        self.console.line(TITLE);
        self.console.rule();

        let Some(token) = self.login().await else {
            self.console.blank();
            self.console.line("❌ Failed to login. Exiting.");
            return Outcome::LoginFailed;
        };

        if self.make_admin(&token).await {
            self.console.blank();
            self.console.rule();
            self.console.line("🎉 All done! You are now an admin.");
            self.console.rule();
            Outcome::Promoted
        } else {
            self.console.blank();
            self.console.line("❌ Failed to complete the process.");
            Outcome::PromotionFailed
        }
    }
}
