//! The repository's `tokens/` directory, compiled into a stylesheet at
//! build time.

/// Generated stylesheet text.
pub const STYLESHEET: &str = include_str!(concat!(env!("OUT_DIR"), "/variables.css"));

#[test]
fn embeds_repository_tokens() {
    assert!(STYLESHEET.starts_with("/* Auto-generated CSS variables"));
    assert!(STYLESHEET.contains("  --sia-core-spacing-base-unit: 8px;\n"));
    assert!(STYLESHEET.contains("  --sia-theme-brand-colors-primary: #3F3FFF;\n"));
    assert!(STYLESHEET.contains("  --sia-theme-typography-font-weight-bold: 700;\n"));
    assert!(STYLESHEET.contains(" * light: 8 variables\n"));
}
