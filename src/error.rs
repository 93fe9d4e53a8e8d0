// src/error.rs

/// Échecs possibles d'un appel au service distant.
///
/// Aucune de ces erreurs ne sort d'`AdminPromoter` : chacune devient un
/// message console et une valeur sentinelle (pas de token / `false`).
#[derive(Debug, thiserror::Error)]
pub enum PromoteError {
    // === Erreurs de transport ===
    /// Connexion refusée, timeout, ou statut HTTP hors 2xx
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    /// Réponse 2xx dont le corps n'est pas le JSON attendu
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    // === Erreurs applicatives ===
    /// Réponse bien formée avec `success: false`
    #[error("{0}")]
    Rejected(String),
}

impl PromoteError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        PromoteError::Rejected(msg.into())
    }

    /// Vrai pour les erreurs survenues avant d'obtenir une réponse applicative
    pub fn is_transport(&self) -> bool {
        matches!(self, PromoteError::Transport(_) | PromoteError::Decode(_))
    }

    /// Statut HTTP, si le serveur a répondu
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            PromoteError::Transport(e) | PromoteError::Decode(e) => e.status(),
            PromoteError::Rejected(_) => None,
        }
    }
}
