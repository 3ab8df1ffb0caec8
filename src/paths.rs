//! Filesystem layout of the app being injected.
//!
//! All inputs and outputs hang off a single anchor directory (the app root),
//! so path policy lives in one place instead of being scattered over the run.

use std::path::{Path, PathBuf};

/// File name of the generated script artifact, in both output locations.
pub const ARTIFACT_FILE_NAME: &str = "env.js";

/// File name of the HTML documents patched to load the artifact.
pub const HTML_FILE_NAME: &str = "index.html";

/// Path anchor for one app root.
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    pub fn override_file_path(&self) -> PathBuf {
        self.root.join(".env")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn public_artifact_path(&self) -> PathBuf {
        self.public_dir().join(ARTIFACT_FILE_NAME)
    }

    pub fn build_artifact_path(&self) -> PathBuf {
        self.build_dir().join(ARTIFACT_FILE_NAME)
    }

    pub fn public_html_path(&self) -> PathBuf {
        self.public_dir().join(HTML_FILE_NAME)
    }

    pub fn build_html_path(&self) -> PathBuf {
        self.build_dir().join(HTML_FILE_NAME)
    }
}
