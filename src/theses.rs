//! Debate prompts.
//!
//! The pool is read-only once built. A custom pool can be loaded from a text
//! file with one thesis per line; blank lines and lines starting with `#` are
//! skipped.

use crate::error::ThesisPoolError;
use crate::rng::GameRng;
use std::path::Path;

const BUILTIN_THESES: &[&str] = &[
    "La pizza con l'ananas dovrebbe essere legale in tutta Italia.",
    "I gatti sono animali domestici migliori dei cani.",
    "Il lavoro da remoto dovrebbe essere un diritto per tutti.",
    "Le vacanze al mare sono meglio di quelle in montagna.",
    "I social network hanno fatto più male che bene.",
    "Il caffè dovrebbe essere gratuito in ogni ufficio.",
    "È meglio essere temuti che amati.",
    "I compiti a casa andrebbero aboliti.",
    "La colazione è il pasto più importante della giornata.",
    "Leggere un libro è sempre meglio che guardarne il film.",
    "Le città dovrebbero essere completamente chiuse alle auto.",
    "Il Natale inizia troppo presto ogni anno.",
    "Gli influencer sono i nuovi artisti.",
    "Sarebbe meglio vivere senza smartphone.",
    "La settimana lavorativa dovrebbe essere di quattro giorni.",
    "I videogiochi sono una forma d'arte.",
    "Il calcio è sopravvalutato.",
    "È giusto mettere il parmigiano sulla pasta con il pesce.",
    "Viaggiare da soli è meglio che viaggiare in gruppo.",
    "L'intelligenza artificiale renderà il mondo un posto migliore.",
    "Gli esami orali sono più giusti degli scritti.",
    "Andare a letto presto è sopravvalutato.",
    "Le serie TV sono meglio dei film.",
    "Il voto dovrebbe essere obbligatorio.",
    "I supereroi sono solo per bambini.",
];

#[derive(Debug, Clone)]
pub struct ThesisPool {
    theses: Vec<String>,
}

impl ThesisPool {
    /// The prompts shipped with the game
    pub fn builtin() -> Self {
        Self {
            theses: BUILTIN_THESES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Build a pool from newline-separated text
    pub fn from_lines(text: &str) -> Result<Self, ThesisPoolError> {
        let theses: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        if theses.is_empty() {
            return Err(ThesisPoolError::Empty);
        }
        Ok(Self { theses })
    }

    pub fn load(path: &Path) -> Result<Self, ThesisPoolError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_lines(&text)
    }

    /// Pick a thesis uniformly at random. Pools are never empty.
    pub fn pick(&self, rng: &mut GameRng) -> &str {
        rng.choose(&self.theses)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.theses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theses.is_empty()
    }

    pub fn contains(&self, thesis: &str) -> bool {
        self.theses.iter().any(|t| t == thesis)
    }
}

impl Default for ThesisPool {
    fn default() -> Self {
        Self::builtin()
    }
}
