//! Ambient environment capture, override-file merge, and whitelist filtering.
//!
//! The process environment is snapshotted into a plain map and the `.env`
//! override file is merged into that map, never into the real environment.
//! Downstream steps only ever see the merged map.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Name-to-value mapping of environment variables. Ordered so the rendered
/// artifact is deterministic across runs.
pub type EnvSet = BTreeMap<String, String>;

/// Snapshot the hosting process's environment.
pub fn ambient() -> EnvSet {
    std::env::vars().collect()
}

/// Merge a dotenv-style override file into `ambient`.
///
/// First definition wins: a file entry never replaces a variable already
/// defined by the hosting process. A missing file is not an error.
pub fn merge_override_file(path: &Path, ambient: &mut EnvSet) -> Result<()> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    for entry in entries {
        let (key, value) = entry.with_context(|| format!("parse {}", path.display()))?;
        ambient.entry(key).or_insert(value);
    }
    Ok(())
}

/// Restrict `ambient` to the whitelisted names.
///
/// An empty whitelist passes the whole set through. A whitelisted name with
/// no ambient value is dropped without error or placeholder.
pub fn filter(ambient: EnvSet, whitelist: &[String]) -> EnvSet {
    if whitelist.is_empty() {
        return ambient;
    }
    let mut effective = EnvSet::new();
    for name in whitelist {
        if let Some(value) = ambient.get(name) {
            effective.insert(name.clone(), value.clone());
        }
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> EnvSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_whitelist_passes_everything_through() {
        let ambient = set(&[("A", "1"), ("B", "2")]);

        let effective = filter(ambient.clone(), &[]);
        assert_eq!(effective, ambient);
    }

    #[test]
    fn whitelist_restricts_to_named_variables() {
        let ambient = set(&[("A", "1"), ("B", "2"), ("C", "3")]);

        let effective = filter(ambient, &names(&["A", "C"]));
        assert_eq!(effective, set(&[("A", "1"), ("C", "3")]));
    }

    #[test]
    fn absent_whitelisted_name_is_silently_omitted() {
        let ambient = set(&[("A", "1")]);

        let effective = filter(ambient, &names(&["A", "MISSING"]));
        assert_eq!(effective, set(&[("A", "1")]));
    }

    #[test]
    fn override_file_never_replaces_ambient_values() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join(".env");
        std::fs::write(&path, "A=from_file\nB=only_in_file\n").expect("write fixture");

        let mut ambient = set(&[("A", "from_process")]);
        merge_override_file(&path, &mut ambient).expect("merge should succeed");

        assert_eq!(
            ambient,
            set(&[("A", "from_process"), ("B", "only_in_file")])
        );
    }

    #[test]
    fn missing_override_file_is_skipped() {
        let dir = tempfile::tempdir().expect("create tempdir");

        let mut ambient = set(&[("A", "1")]);
        merge_override_file(&dir.path().join(".env"), &mut ambient)
            .expect("missing file is not an error");

        assert_eq!(ambient, set(&[("A", "1")]));
    }
}
