//! allaydsl-core - Tooling core for the `allay { ... }` Gradle DSL
//!
//! This crate provides the host-independent pieces of allay build-script
//! intelligence:
//!
//! - [`parser`]: a lenient parser turning `build.gradle.kts` text into an
//!   [`allaydsl_ast::SourceFile`]. Never fails; mid-edit sources produce
//!   partial trees.
//! - [`scanner`]: locating named call expressions and classifying the
//!   direct statements of their blocks against a set of property names.
//! - [`schema`]: the fixed property table for the `allay` and `plugin`
//!   blocks, including the completion metadata a host UI presents.
//! - [`entrance`]: extraction of the `entrance` class reference for
//!   "go to declaration" support.
//! - [`diagnostics`]: severity-tagged findings produced by validation.
//! - [`template`]: scaffold file rendering for a new plugin project.
//!
//! # Example
//!
//! ```
//! use allaydsl_core::parse;
//! use allaydsl_core::scanner::{find_named_calls, scan_block_properties};
//!
//! let file = parse(r#"
//! allay {
//!     api = "0.15.0"
//! }
//! "#);
//!
//! let allay = find_named_calls(&file, "allay").next().unwrap();
//! let block = allay.block.as_ref().unwrap();
//! let result = scan_block_properties(block, &["api"], &["plugin"]);
//! assert!(result.is_present("api"));
//! assert!(!result.is_present("plugin"));
//! ```

pub mod diagnostics;
pub mod entrance;
pub mod parser;
pub mod scanner;
pub mod schema;
pub mod template;

// Re-export main entry points
pub use entrance::{entrance_reference, EntranceRef};
pub use parser::parse;
pub use scanner::{find_named_calls, scan_block_properties, string_property, ScanResult};

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
