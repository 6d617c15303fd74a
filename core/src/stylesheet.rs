//! Serializes collected tokens into stylesheet text.

use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;

use crate::collector::CollectedTokens;

const HEADER: &str = "Auto-generated CSS variables - from design tokens";
const GENERATED_AT: &str = "Generated at";
const MODE_USAGE: &str = "Mode usage";
const COUNT_LABEL: &str = "variables";

impl CollectedTokens {
    /// Renders the `:root` block followed by the mode statistics comment.
    pub fn to_css(&self, generated_at: DateTime<Utc>) -> String {
        let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let declarations = self
            .variables
            .iter()
            .map(|(name, value)| format!("  {name}: {value};\n"))
            .join("");
        let modes = self
            .mode_counts
            .iter()
            .map(|(mode, count)| format!(" * {mode}: {count} {COUNT_LABEL}\n"))
            .join("");

        format!(
            "/* {HEADER} */\n/* {GENERATED_AT}: {timestamp} */\n\n:root {{\n{declarations}}}\n\n/* {MODE_USAGE}:\n{modes} */\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn renders_full_grammar() {
        let mut tokens = CollectedTokens::default();
        tokens
            .variables
            .insert("--sia-core-spacing-base-unit".into(), "8px".into());
        tokens
            .variables
            .insert("--sia-theme-surface-bg".into(), "#FFFFFF".into());
        tokens.mode_counts.insert("light".into(), 2);
        tokens.mode_counts.insert("dark".into(), 1);

        let expected = "\
/* Auto-generated CSS variables - from design tokens */
/* Generated at: 2024-03-01T09:30:00.000Z */

:root {
  --sia-core-spacing-base-unit: 8px;
  --sia-theme-surface-bg: #FFFFFF;
}

/* Mode usage:
 * light: 2 variables
 * dark: 1 variables
 */
";
        assert_eq!(tokens.to_css(fixed_time()), expected);
    }

    #[test]
    fn renders_empty_blocks() {
        let expected = "\
/* Auto-generated CSS variables - from design tokens */
/* Generated at: 2024-03-01T09:30:00.000Z */

:root {
}

/* Mode usage:
 */
";
        assert_eq!(CollectedTokens::default().to_css(fixed_time()), expected);
    }
}
