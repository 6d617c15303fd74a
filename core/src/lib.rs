//! Design tokens to CSS custom properties.
//!
//! Token documents group variables into collections and categories; every
//! variable becomes one `--<prefix>-<collection>-<category>-<name>`
//! declaration in a single `:root` block. A separate [`gradient`] module
//! turns `linear-gradient(...)` strings into normalized stop data.

pub mod collector;
pub mod error;
pub mod format;
pub mod generate;
pub mod gradient;
pub mod naming;
pub mod source;
mod stylesheet;

pub use collector::{collect, CollectedTokens, TokenCollector};
pub use error::{Result, TokenError};
pub use format::{format_value, TokenType, LENGTH_UNIT};
pub use generate::{
    generate, generate_at, GenerateConfig, GenerateOutcome, DEFAULT_OUTPUT, DEFAULT_PREFIX,
    DEFAULT_TOKENS_DIR,
};
pub use gradient::{parse_gradient, Gradient, Point};
pub use naming::{kebab_case, variable_name};
pub use source::{load_tokens_dir, LoadedSources, TokenDocument};
