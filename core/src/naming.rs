//! Name construction for generated custom properties.
//!
//! The case rule is deliberately narrow: a hyphen goes between an ASCII
//! lowercase letter and a directly following ASCII uppercase letter, each
//! run of whitespace collapses into one hyphen, and the result is
//! lowercased. Consecutive capitals, digits and existing punctuation are
//! left alone, so `"HTTPServer"` becomes `"httpserver"`.

/// Kebab-cases a single name segment.
pub fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            prev = Some(c);
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

/// Builds `--<prefix>-<collection>-<category>-<name>`, kebab-casing the
/// last three segments. The prefix is used verbatim.
pub fn variable_name(prefix: &str, collection: &str, category: &str, name: &str) -> String {
    format!(
        "--{prefix}-{}-{}-{}",
        kebab_case(collection),
        kebab_case(category),
        kebab_case(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn camel_case_boundaries() {
        assert_eq!(kebab_case("colorBase"), "color-base");
        assert_eq!(kebab_case("baseUnit"), "base-unit");
        assert_eq!(kebab_case("aBcD"), "a-bc-d");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(kebab_case("Color Base"), "color-base");
        assert_eq!(kebab_case("Color \t  Base"), "color-base");
        assert_eq!(kebab_case(" padded "), "-padded-");
    }

    #[test]
    fn only_lower_to_upper_boundaries_split() {
        assert_eq!(kebab_case("HTTPServer"), "httpserver");
        assert_eq!(kebab_case("size2Xl"), "size2xl");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn builds_qualified_name() {
        assert_eq!(
            variable_name("sia", "Core", "Spacing", "baseUnit"),
            "--sia-core-spacing-base-unit"
        );
        assert_eq!(
            variable_name("Brand", "Brand Colors", "textPrimary", "on Dark"),
            "--Brand-brand-colors-text-primary-on-dark"
        );
    }
}
