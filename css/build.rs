use std::{env, fs, path::Path};

use chrono::{DateTime, Utc};
use token_css_core::{collect, load_tokens_dir, DEFAULT_PREFIX};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tokens_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../tokens");
    let sources = load_tokens_dir(&tokens_dir)?;
    let tokens = collect(DEFAULT_PREFIX, &sources.documents);

    // honor reproducible-build timestamps when the environment provides one
    let generated_at = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?;
    let dest_path = Path::new(&out_dir).join("variables.css");
    fs::write(&dest_path, tokens.to_css(generated_at))?;

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", tokens_dir.display());
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    Ok(())
}
