//! allaydsl-ast - Syntax tree definitions for the allay Gradle DSL
//!
//! This crate provides the tree types produced by the `allaydsl-core` parser
//! and consumed by the block scanner, the validators and the version checker.
//! Node kinds are a tagged enum with per-kind payload structs; callers
//! classify statements by pattern matching, never by downcasting.
//!
//! The tree is immutable once built. Trees parsed from mid-edit sources are
//! frequently incomplete; every consumer in this workspace treats a missing
//! or partial shape as "no match" rather than an error.

pub mod node;
pub mod span;

// Re-export main types
pub use node::{AssignOp, Assignment, Block, Call, Descendants, Expr, Node, Other, SourceFile};
pub use span::Span;

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
