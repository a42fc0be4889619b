//! Version string parsing and comparison
//!
//! Versions are treated as sequences of non-negative integers split on `.`
//! and `-`. This is deliberately not SemVer: there are no pre-release
//! precedence rules beyond stripping a trailing `-SNAPSHOT`, and no
//! build-metadata handling. Non-numeric segments are discarded, not
//! rejected, so malformed input degrades to "equal to zero" instead of
//! signaling failure.
//!
//! Both functions are pure and reentrant; they hold no state and are safe
//! to call concurrently.

/// How a current version relates to the latest one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionComparison {
    /// The current version is older than the latest
    Outdated,
    /// The versions are numerically identical
    Same,
    /// The current version is ahead of the latest
    Newer,
}

/// Parse a version string into its numeric parts
///
/// Strips one trailing `-SNAPSHOT` marker (case-sensitive), splits on `.`
/// and `-`, and keeps the segments that parse as integers, in order.
/// Never fails; a fully non-numeric string yields an empty vec, which
/// compares as all-zero.
///
/// # Example
///
/// ```
/// use allaydsl_version::parse_version;
///
/// assert_eq!(parse_version("0.15.0"), vec![0, 15, 0]);
/// assert_eq!(parse_version("1.a.2"), vec![1, 2]);
/// assert_eq!(parse_version("1.0.0-SNAPSHOT"), vec![1, 0, 0]);
/// ```
pub fn parse_version(version: &str) -> Vec<u32> {
    version
        .strip_suffix("-SNAPSHOT")
        .unwrap_or(version)
        .split(['.', '-'])
        .filter_map(|part| part.parse().ok())
        .collect()
}

/// Compare two version strings position by position
///
/// Missing trailing segments compare as 0, so `"1.2"` equals `"1.2.0"`.
/// The first position that differs decides the outcome.
pub fn compare_versions(current: &str, latest: &str) -> VersionComparison {
    let current_parts = parse_version(current);
    let latest_parts = parse_version(latest);

    for i in 0..current_parts.len().max(latest_parts.len()) {
        let current_part = current_parts.get(i).copied().unwrap_or(0);
        let latest_part = latest_parts.get(i).copied().unwrap_or(0);

        if current_part < latest_part {
            return VersionComparison::Outdated;
        }
        if current_part > latest_part {
            return VersionComparison::Newer;
        }
    }

    VersionComparison::Same
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_version("0.15.0"), vec![0, 15, 0]);
        assert_eq!(parse_version("1.2.3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_strips_snapshot() {
        assert_eq!(parse_version("1.0.0-SNAPSHOT"), vec![1, 0, 0]);
        // Case-sensitive: a lowercase suffix is just a non-numeric segment
        assert_eq!(parse_version("1.0.0-snapshot"), vec![1, 0, 0]);
    }

    #[test]
    fn test_parse_discards_non_numeric_segments() {
        assert_eq!(parse_version("1.a.2"), vec![1, 2]);
        assert_eq!(parse_version("1.2.3-rc1"), vec![1, 2, 3]);
        assert_eq!(parse_version("1.2.3-4"), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_garbage_yields_empty() {
        assert_eq!(parse_version("not a version"), Vec::<u32>::new());
        assert_eq!(parse_version(""), Vec::<u32>::new());
    }

    #[test]
    fn test_compare_equal() {
        for v in ["0.15.0", "1.0.0", "1.2.3-SNAPSHOT", "", "weird"] {
            assert_eq!(compare_versions(v, v), VersionComparison::Same, "{v}");
        }
    }

    #[test]
    fn test_compare_outdated() {
        assert_eq!(
            compare_versions("0.14.0", "0.15.0"),
            VersionComparison::Outdated
        );
        assert_eq!(
            compare_versions("0.15.0", "0.15.1"),
            VersionComparison::Outdated
        );
        assert_eq!(compare_versions("1.9", "2"), VersionComparison::Outdated);
    }

    #[test]
    fn test_compare_newer() {
        assert_eq!(compare_versions("1.0.0", "0.9.9"), VersionComparison::Newer);
        assert_eq!(compare_versions("0.15.1", "0.15"), VersionComparison::Newer);
    }

    #[test]
    fn test_compare_zero_extension() {
        assert_eq!(compare_versions("1.2", "1.2.0"), VersionComparison::Same);
        assert_eq!(compare_versions("1.2.0.0", "1.2"), VersionComparison::Same);
    }

    #[test]
    fn test_compare_snapshot_equals_release() {
        assert_eq!(
            compare_versions("1.0.0-SNAPSHOT", "1.0.0"),
            VersionComparison::Same
        );
    }

    #[test]
    fn test_compare_antisymmetry() {
        let pairs = [
            ("0.14.0", "0.15.0"),
            ("1.0", "1.0.1"),
            ("2", "10"),
            ("0.9.9", "1.0.0"),
        ];
        for (a, b) in pairs {
            let forward = compare_versions(a, b);
            let backward = compare_versions(b, a);
            match forward {
                VersionComparison::Outdated => {
                    assert_eq!(backward, VersionComparison::Newer, "{a} vs {b}");
                }
                VersionComparison::Newer => {
                    assert_eq!(backward, VersionComparison::Outdated, "{a} vs {b}");
                }
                VersionComparison::Same => assert_eq!(backward, VersionComparison::Same),
            }
        }
    }

    #[test]
    fn test_compare_garbage_equals_zero() {
        assert_eq!(
            compare_versions("garbage", "0.0.0"),
            VersionComparison::Same
        );
        assert_eq!(
            compare_versions("garbage", "0.0.1"),
            VersionComparison::Outdated
        );
    }

    #[test]
    fn test_first_differing_position_decides() {
        // 1.0.9 vs 1.1.0: position 1 decides, position 2 is never reached
        assert_eq!(
            compare_versions("1.0.9", "1.1.0"),
            VersionComparison::Outdated
        );
    }
}
