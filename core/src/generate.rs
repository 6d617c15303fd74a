//! The full run: read a tokens directory, write one stylesheet.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::collector::{collect, CollectedTokens};
use crate::error::{Result, TokenError};
use crate::source::load_tokens_dir;

pub const DEFAULT_TOKENS_DIR: &str = "tokens";
pub const DEFAULT_OUTPUT: &str = "output/variables.css";
pub const DEFAULT_PREFIX: &str = "sia";

/// Where to read tokens from, where to write the stylesheet, and the name
/// prefix for every generated property.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub tokens_dir: PathBuf,
    pub output: PathBuf,
    pub prefix: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            tokens_dir: PathBuf::from(DEFAULT_TOKENS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// The stylesheet was written.
    Written {
        path: PathBuf,
        source_files: usize,
        tokens: CollectedTokens,
    },
    /// The tokens directory had no token files; nothing was written.
    NoSources,
}

/// Generates the stylesheet with the current time in its header.
pub fn generate(config: &GenerateConfig) -> Result<GenerateOutcome> {
    generate_at(config, Utc::now())
}

/// Same as [`generate`] with a caller-chosen timestamp.
pub fn generate_at(config: &GenerateConfig, generated_at: DateTime<Utc>) -> Result<GenerateOutcome> {
    ensure_parent_dir(&config.output)?;

    let sources = load_tokens_dir(&config.tokens_dir)?;
    if sources.files.is_empty() {
        warn!(dir = %config.tokens_dir.display(), "no JSON files found in tokens directory");
        return Ok(GenerateOutcome::NoSources);
    }

    let tokens = collect(&config.prefix, &sources.documents);
    fs::write(&config.output, tokens.to_css(generated_at))
        .map_err(|e| TokenError::io(&config.output, "Failed to write stylesheet", e))?;

    info!(path = %config.output.display(), "CSS variables generated");
    info!(
        variables = tokens.variables.len(),
        source_files = sources.files.len(),
        "generation summary"
    );

    Ok(GenerateOutcome::Written {
        path: config.output.clone(),
        source_files: sources.files.len(),
        tokens,
    })
}

fn ensure_parent_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => fs::create_dir_all(dir)
            .map_err(|e| TokenError::io(dir, "Failed to create output directory", e)),
        _ => Ok(()),
    }
}
