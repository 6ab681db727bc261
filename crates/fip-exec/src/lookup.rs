//! Executable lookup against the host search path.
//!
//! Resolution happens fresh on every call, so a presence check performed
//! after a package install observes binaries that did not exist when the
//! process started.

use std::path::PathBuf;

/// Resolve a binary against the current `PATH`, if present.
pub fn binary_on_path(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Check whether a binary resolves on the current `PATH`.
pub fn is_on_path(name: &str) -> bool {
    binary_on_path(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::{binary_on_path, is_on_path};

    #[test]
    fn resolves_a_ubiquitous_binary() {
        // sh is present on every supported host
        assert!(is_on_path("sh"));
        assert!(binary_on_path("sh").unwrap().is_absolute());
    }

    #[test]
    fn misses_a_nonexistent_binary() {
        assert!(!is_on_path("fip-no-such-binary-2f8a"));
        assert!(binary_on_path("fip-no-such-binary-2f8a").is_none());
    }
}
