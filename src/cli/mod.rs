pub mod generate;
pub mod gradient;

use clap::{Parser, Subcommand};

/// token-css - design tokens to CSS custom properties
#[derive(Parser, Debug)]
#[command(name = "token-css")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Runs `generate` with defaults when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the variables stylesheet from a tokens directory
    Generate(generate::GenerateArgs),

    /// Parse a linear-gradient string and print it as JSON
    Gradient(gradient::GradientArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(generate::GenerateArgs::default())
    }
}
