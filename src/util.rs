//! Advisory filesystem probes for the optional build-tree outputs.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Advisory `access(2)` write probe for optional build outputs.
///
/// Inherently racy between the probe and the write; the tool assumes no
/// concurrent writers to the build tree. A nonexistent path probes false.
pub fn is_writable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writable_directory_probes_true() {
        let dir = tempfile::tempdir().expect("create tempdir");
        assert!(is_writable(dir.path()));
    }

    #[test]
    fn missing_path_probes_false() {
        let dir = tempfile::tempdir().expect("create tempdir");
        assert!(!is_writable(&dir.path().join("nope")));
    }
}
