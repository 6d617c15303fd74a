//! `generate` command: tokens directory in, stylesheet out.

use std::path::PathBuf;

use clap::Args;
use token_css_core::{generate, GenerateConfig, Result};
use tracing::error;

/// Generate the variables stylesheet from a tokens directory
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Directory holding the token JSON files [default: tokens]
    #[arg(long, short)]
    pub tokens: Option<PathBuf>,

    /// Stylesheet to write [default: output/variables.css]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Name prefix for every generated property [default: sia]
    #[arg(long, short)]
    pub prefix: Option<String>,
}

impl GenerateArgs {
    pub fn into_config(self) -> GenerateConfig {
        let defaults = GenerateConfig::default();
        GenerateConfig {
            tokens_dir: self.tokens.unwrap_or(defaults.tokens_dir),
            output: self.output.unwrap_or(defaults.output),
            prefix: self.prefix.unwrap_or(defaults.prefix),
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = args.into_config();
    match generate(&config) {
        Ok(_) => Ok(()),
        Err(err) => {
            error!("failed to generate CSS variables: {err}");
            Err(err)
        }
    }
}
