//! allaydsl-validate - Build-script validation engine
//!
//! This crate checks a parsed build script against the fixed allay schema.
//! Individual validators implement the [`Validator`] trait; the
//! [`ValidationEngine`] runs all registered validators and collects their
//! diagnostics.
//!
//! Findings are recomputed from scratch on every run; they carry no
//! identity between runs. Absent recommended properties produce warnings,
//! absent required properties produce errors, and unknown properties are
//! never flagged.
//!
//! # Example
//!
//! ```
//! use allaydsl_core::parse;
//! use allaydsl_validate::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let file = parse("allay {\n    api = \"0.15.0\"\n    plugin {\n    }\n}\n");
//! let diagnostics = engine.validate(&file);
//! // The empty plugin block is missing its required properties
//! assert!(diagnostics.iter().any(|d| d.is_error()));
//! ```

pub mod blocks;

use allaydsl_ast::SourceFile;
use allaydsl_core::diagnostics::Diagnostic;

// Re-export validators
pub use blocks::{AllayBlockValidator, PluginBlockValidator};

/// Trait for build-script validators
///
/// Validators inspect a parsed source file and return diagnostics for any
/// issues found. Each validator has a unique code prefix for its
/// diagnostics.
pub trait Validator: Send + Sync {
    /// Get the validator's unique code prefix (e.g. "ALY1")
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the file and return any diagnostics
    fn validate(&self, file: &SourceFile) -> Vec<Diagnostic>;
}

/// Validation engine that orchestrates multiple validators
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with the default allay validators
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(AllayBlockValidator));
        engine.add_validator(Box::new(PluginBlockValidator));
        engine
    }

    /// Add a validator to the engine
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Validate a file using all registered validators
    pub fn validate(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for validator in &self.validators {
            diagnostics.extend(validator.validate(file));
        }

        diagnostics
    }

    /// Check if a file has any errors
    pub fn has_errors(&self, file: &SourceFile) -> bool {
        self.validate(file).iter().any(|d| d.is_error())
    }

    /// Check if a file has any warnings or errors
    pub fn has_issues(&self, file: &SourceFile) -> bool {
        !self.validate(file).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
