//! Rendering of the generated `env.js` script artifact.

use crate::env::EnvSet;
use anyhow::{Context, Result};

/// Global identifier the artifact assigns the serialized set to.
pub const GLOBAL_NAME: &str = "window.env";

/// Render the full artifact text. Output is the complete file content; the
/// writer overwrites, never merges.
pub fn render(env: &EnvSet) -> Result<String> {
    let literal = serde_json::to_string_pretty(env).context("serialize environment set")?;
    Ok(format!("{GLOBAL_NAME} = {literal};"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_indented_object_literal() {
        let env: EnvSet = [("A".to_string(), "1".to_string())].into_iter().collect();

        let script = render(&env).expect("render should succeed");
        assert_eq!(script, "window.env = {\n  \"A\": \"1\"\n};");
    }

    #[test]
    fn renders_empty_set_as_empty_object() {
        let script = render(&EnvSet::new()).expect("render should succeed");
        assert_eq!(script, "window.env = {};");
    }

    #[test]
    fn keys_are_sorted_for_deterministic_output() {
        let env: EnvSet = [
            ("ZETA".to_string(), "z".to_string()),
            ("ALPHA".to_string(), "a".to_string()),
        ]
        .into_iter()
        .collect();

        let script = render(&env).expect("render should succeed");
        assert_eq!(
            script,
            "window.env = {\n  \"ALPHA\": \"a\",\n  \"ZETA\": \"z\"\n};"
        );
    }
}
