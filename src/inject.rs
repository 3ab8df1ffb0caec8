//! The injection run: one linear pass from config to patched outputs.
//!
//! Required targets fail the run; optional build-tree targets are probed
//! first and skipped silently when absent. A failure mid-run leaves earlier
//! outputs in place, by design.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::paths::ProjectPaths;
use crate::{artifact, basepath, env, manifest, patch, util};

/// Run the whole injection pipeline against one app root.
pub fn run(paths: &ProjectPaths) -> Result<()> {
    let manifest = manifest::load(&paths.manifest_path())?;

    let mut ambient = env::ambient();
    env::merge_override_file(&paths.override_file_path(), &mut ambient)?;
    let effective = env::filter(ambient, manifest.whitelist());

    let base_path = basepath::resolve(&effective, manifest.homepage.as_deref());
    let script = artifact::render(&effective)?;

    let public_artifact = paths.public_artifact_path();
    fs::write(&public_artifact, &script)
        .with_context(|| format!("write {}", public_artifact.display()))?;
    tracing::info!(
        path = %public_artifact.display(),
        vars = effective.len(),
        "wrote env script"
    );

    let build_dir = paths.build_dir();
    if util::is_writable(&build_dir) {
        let build_artifact = paths.build_artifact_path();
        fs::write(&build_artifact, &script)
            .with_context(|| format!("write {}", build_artifact.display()))?;
        tracing::info!(path = %build_artifact.display(), "wrote env script");
    } else {
        tracing::debug!(path = %build_dir.display(), "build dir not writable, skipping env script");
    }

    patch_file(&paths.public_html_path(), &base_path)?;

    let build_html = paths.build_html_path();
    if util::is_writable(&build_html) {
        patch_file(&build_html, &base_path)?;
    } else {
        tracing::debug!(path = %build_html.display(), "build index not writable, skipping patch");
    }

    Ok(())
}

fn patch_file(path: &Path, base_path: &str) -> Result<()> {
    let source = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let patched = patch::patch_document(&source, base_path)
        .with_context(|| format!("patch {}", path.display()))?;
    fs::write(path, patched).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), base_path, "patched index");
    Ok(())
}
