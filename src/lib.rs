//! Deploy-time environment injection for static single-page apps.
//!
//! A built SPA bakes its configuration in at compile time; this crate defers
//! that to deploy time by writing the effective environment as a `window.env`
//! script and patching the app's `index.html` to load it.

pub mod artifact;
pub mod basepath;
pub mod env;
pub mod inject;
pub mod manifest;
pub mod patch;
pub mod paths;
pub mod util;
