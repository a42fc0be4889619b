//! The version-check task
//!
//! Composes the scanner, comparator and registry client into the check an
//! embedding application runs once per project open. The task itself is
//! synchronous; scheduling (background thread, startup hook) belongs to
//! the embedder.
//!
//! Applying an update is a single node replacement expressed as a
//! [`TextEdit`]: the span of the `api` string literal and its replacement
//! text. The edit either splices cleanly or, if the source has changed
//! underneath it, applies as a no-op; partial writes are not reachable.

use serde::Serialize;

use allaydsl_ast::{SourceFile, Span};
use allaydsl_core::scanner::{find_named_calls, string_property};
use allaydsl_core::schema::ANCHOR_CALL;

use crate::compare::{compare_versions, VersionComparison};
use crate::registry::RegistryClient;

/// A single-span text replacement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextEdit {
    /// The byte range to replace
    pub span: Span,
    /// The replacement text
    pub replacement: String,
}

impl TextEdit {
    /// Apply the edit to a source string
    ///
    /// All-or-nothing: if the span no longer fits the source (stale edit,
    /// concurrent change), the input is returned unchanged.
    pub fn apply(&self, source: &str) -> String {
        match self.span.slice(source) {
            Some(_) => {
                let mut updated = String::with_capacity(
                    source.len() - self.span.len() + self.replacement.len(),
                );
                updated.push_str(&source[..self.span.start]);
                updated.push_str(&self.replacement);
                updated.push_str(&source[self.span.end..]);
                updated
            }
            None => source.to_string(),
        }
    }
}

/// The declared `api = "..."` version of the first `allay` block carrying one
///
/// Returns the version string and the span of the string literal (quotes
/// included). `None` when no allay block declares a string `api` property.
pub fn declared_api_version(file: &SourceFile) -> Option<(String, Span)> {
    for allay in find_named_calls(file, ANCHOR_CALL) {
        if let Some(block) = &allay.block {
            if let Some(found) = string_property(block, "api") {
                return Some(found);
            }
        }
    }
    None
}

/// The edit replacing the declared `api` version with `new_version`
///
/// `None` when the target assignment cannot be located (it may have been
/// edited away since the check ran); the caller no-ops silently.
pub fn update_edit(file: &SourceFile, new_version: &str) -> Option<TextEdit> {
    let (_, span) = declared_api_version(file)?;
    Some(TextEdit {
        span,
        replacement: format!("\"{new_version}\""),
    })
}

/// Why a version check was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The build script declares no `api = "..."` version
    NoDeclaredVersion,
    /// The registry could not be reached or gave no usable answer
    RegistryUnavailable,
}

/// Outcome of a version check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VersionCheckOutcome {
    /// The declared version is older than the latest published one
    Outdated {
        current: String,
        latest: String,
        /// Ready-made replacement of the declared version
        edit: TextEdit,
    },
    /// The declared version matches the latest
    UpToDate { current: String },
    /// The declared version is ahead of the latest published one
    Ahead { current: String, latest: String },
    /// The check could not run; consumed as "say nothing"
    Skipped { reason: SkipReason },
}

/// Run the version check against a parsed build script
///
/// One registry attempt, no retry. Never fails: every failure mode folds
/// into [`VersionCheckOutcome::Skipped`].
pub fn check_file(file: &SourceFile, client: &RegistryClient) -> VersionCheckOutcome {
    if declared_api_version(file).is_none() {
        log::debug!("no declared allay api version; skipping check");
        return VersionCheckOutcome::Skipped {
            reason: SkipReason::NoDeclaredVersion,
        };
    }

    let Some(latest) = client.latest_version() else {
        return VersionCheckOutcome::Skipped {
            reason: SkipReason::RegistryUnavailable,
        };
    };

    outcome_for(file, &latest)
}

/// Map a fetched latest version onto the script's declared one
///
/// The post-fetch half of [`check_file`], split out so the comparison
/// branches can be driven without a registry. `Outdated` carries the
/// current and latest versions plus the ready-made [`TextEdit`].
pub fn outcome_for(file: &SourceFile, latest: &str) -> VersionCheckOutcome {
    let Some((current, span)) = declared_api_version(file) else {
        return VersionCheckOutcome::Skipped {
            reason: SkipReason::NoDeclaredVersion,
        };
    };

    match compare_versions(&current, latest) {
        VersionComparison::Outdated => VersionCheckOutcome::Outdated {
            current,
            edit: TextEdit {
                span,
                replacement: format!("\"{latest}\""),
            },
            latest: latest.to_string(),
        },
        VersionComparison::Same => VersionCheckOutcome::UpToDate { current },
        VersionComparison::Newer => VersionCheckOutcome::Ahead {
            current,
            latest: latest.to_string(),
        },
    }
}
