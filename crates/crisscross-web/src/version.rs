//! Version string logged when the page or the renderer starts.
//!
//! The git SHA is embedded by `build.rs`; builds outside a git checkout
//! report it as `unknown`.

/// Returns the startup version string, `pkg_version (git_sha)`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_package_version() {
        let version = build_version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.ends_with(')'));
    }

    #[test]
    fn test_reports_hash_in_parentheses() {
        let version = build_version();
        let (_, hash) = version.split_once(" (").unwrap();
        let hash = hash.strip_suffix(')').unwrap();
        assert!(!hash.is_empty());
    }
}
