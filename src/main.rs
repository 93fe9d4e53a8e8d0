mod client;
mod config;
mod console;
mod error;
mod promoter;
#[cfg(test)]
mod test_support;

use client::ApiClient;
use config::Config;
use console::Console;
use promoter::{AdminPromoter, Outcome};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new("warn,admin_promoter=info")
    });

    // stderr : stdout reste réservé aux messages console
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ----------------- Main -----------------

/// Construit le client puis lance la séquence; `None` si le client HTTP n'a pas pu être créé
async fn execute<W: Write>(config: Config, mut console: Console<W>) -> Option<Outcome> {
    match ApiClient::new(config) {
        Ok(client) => Some(AdminPromoter::new(client, console).run().await),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            console.line(format_args!("❌ Failed to build HTTP client: {e}"));
            None
        }
    }
}

#[tokio::main]
async fn main() {
    setup_logging();

    let config = Config::default();
    tracing::info!(
        base_url = config.base_url(),
        email = %Config::mask_email(config.email()),
        "Starting admin-promoter..."
    );

    // Le processus termine normalement quel que soit le résultat
    let outcome = execute(config, Console::stdout()).await;
    tracing::info!(?outcome, "admin-promoter finished");
}
