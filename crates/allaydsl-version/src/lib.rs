//! allaydsl-version - Allay API version checking
//!
//! Three pieces compose the version-check feature:
//!
//! - [`compare`]: pure parsing and comparison of dot/dash-delimited
//!   version strings.
//! - [`registry`]: a blocking Maven Central client fetching the latest
//!   published `org.allaymc.allay:api` version.
//! - [`check`]: the synchronous task an embedding application runs once
//!   per project open: extract the declared version from the build script,
//!   fetch the latest, compare, and hand back a ready-made single-edit
//!   update.
//!
//! Failure philosophy: nothing here is fatal. A malformed version string
//! degrades to fewer numeric parts, a registry failure collapses to "no
//! latest version available" and the whole check is skipped silently.
//!
//! # Example
//!
//! ```
//! use allaydsl_version::{compare_versions, VersionComparison};
//!
//! assert_eq!(compare_versions("0.14.0", "0.15.0"), VersionComparison::Outdated);
//! assert_eq!(compare_versions("1.2", "1.2.0"), VersionComparison::Same);
//! ```

pub mod check;
pub mod compare;
pub mod registry;

// Re-export main types and functions
pub use check::{
    check_file, declared_api_version, outcome_for, update_edit, TextEdit, VersionCheckOutcome,
};
pub use compare::{compare_versions, parse_version, VersionComparison};
pub use registry::{RegistryClient, RegistryError, DEFAULT_SEARCH_URL};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
