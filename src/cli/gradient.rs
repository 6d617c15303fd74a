//! `gradient` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use token_css_core::parse_gradient;

const SAMPLE: &str =
    "linear-gradient(256deg, #00FFA3 -17.71%, #3F3FFF 68.62%, #0100F2 151.69%)";

/// Parse a linear-gradient string and print it as JSON
#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Gradient description, e.g. "linear-gradient(90deg, #000000 0%, #FFFFFF 100%)"
    #[arg(default_value = SAMPLE)]
    pub text: String,
}

pub fn run(args: GradientArgs) -> Result<()> {
    let gradient = parse_gradient(&args.text);
    println!("{}", serde_json::to_string_pretty(&gradient).into_diagnostic()?);
    Ok(())
}
