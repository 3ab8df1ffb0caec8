//! The app's `package.json`, read once per run for the injection config.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The slice of `package.json` this tool consults. Everything else in the
/// manifest is ignored by serde.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Base-path fallback when no override variable is set.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Namespaced injection config table.
    #[serde(default, rename = "react-dotenv")]
    pub config: Option<InjectConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InjectConfig {
    /// Variable names allowed through to the client-visible artifact.
    #[serde(default)]
    pub whitelist: Vec<String>,
}

impl Manifest {
    /// Whitelist of variable names; empty when the config table is absent.
    pub fn whitelist(&self) -> &[String] {
        self.config
            .as_ref()
            .map(|config| config.whitelist.as_slice())
            .unwrap_or(&[])
    }
}

/// Load and parse the manifest. A missing or malformed manifest is fatal;
/// no default manifest is synthesized.
pub fn load(path: &Path) -> Result<Manifest> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let manifest =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(manifest)
}
