// src/console.rs

use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Sortie console lisible (stdout en production, un buffer en test)
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Écrit une ligne; une erreur d'écriture est seulement journalisée
    pub fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "Failed to write console output");
        }
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    pub fn rule(&mut self) {
        self.line("=".repeat(RULE_WIDTH));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
impl Console<Vec<u8>> {
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Texte écrit jusqu'ici
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}
