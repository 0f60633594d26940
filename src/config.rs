use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Decimal places used in the terminal report unless WEAT_PRECISION is set.
pub const DEFAULT_PRECISION: usize = 4;

/// Configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags take
/// precedence over everything here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON embeddings file (WEAT_EMBEDDINGS). Falls back to the built-in
    /// reference vocabulary when unset.
    pub embeddings_path: Option<PathBuf>,
    /// JSON word sets file (WEAT_SETS). Falls back to the reference test.
    pub sets_path: Option<PathBuf>,
    /// Decimal places in the terminal report (WEAT_PRECISION)
    pub precision: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            embeddings_path: non_empty_var("WEAT_EMBEDDINGS").map(PathBuf::from),
            sets_path: non_empty_var("WEAT_SETS").map(PathBuf::from),
            precision: parse_precision(non_empty_var("WEAT_PRECISION").as_deref())?,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse WEAT_PRECISION, defaulting when unset. Capped at 12 places, past
/// which the printed digits are rounding noise.
pub fn parse_precision(value: Option<&str>) -> Result<usize> {
    match value {
        None => Ok(DEFAULT_PRECISION),
        Some(raw) => {
            let places: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("WEAT_PRECISION must be a whole number, got {raw:?}"))?;
            Ok(places.min(12))
        }
    }
}
