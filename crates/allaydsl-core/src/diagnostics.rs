//! Validation diagnostics
//!
//! Findings produced by scanning a build script: a severity, a message and
//! the span of the call the finding is anchored at. Diagnostics have no
//! identity across runs; every scan recomputes them from scratch.

use serde::{Deserialize, Serialize};

use allaydsl_ast::Span;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,

    /// A recommended property is missing
    Warning,

    /// A required property is missing
    Error,
}

/// A single validation finding
///
/// # Example
///
/// ```
/// use allaydsl_core::diagnostics::{Diagnostic, Severity};
/// use allaydsl_ast::Span;
///
/// let diag = Diagnostic::error("Required property 'entrance' is not specified")
///     .with_code("ALY201")
///     .with_span(Span::new(10, 16));
/// assert!(diag.is_error());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level of the diagnostic
    pub severity: Severity,

    /// The diagnostic message
    pub message: String,

    /// Optional diagnostic code (e.g. "ALY101")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Source span the finding is anchored at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,

    /// Optional file path where the issue occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Additional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            span: None,
            file: None,
            help: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Check if this is an error-level diagnostic
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level diagnostic
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: severity[code]: message
        write!(f, "{}", self.severity)?;
        if let Some(ref code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        if let Some(ref file) = self.file {
            write!(f, "\n  --> {}", file)?;
            if let Some(span) = self.span {
                write!(f, ":{}..{}", span.start, span.end)?;
            }
        }

        if let Some(ref help) = self.help {
            write!(f, "\n  = help: {}", help)?;
        }

        Ok(())
    }
}

/// A collection of diagnostics from one scan pass
///
/// Serializes as a bare array, so JSON consumers see the same shape as a
/// plain diagnostic list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add every diagnostic from an iterator
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    /// Get all diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the count
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Severity::Error, "Test error");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test error");
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::warning("Property 'api' should be specified")
            .with_code("ALY101")
            .with_span(Span::new(1, 6))
            .with_file("build.gradle.kts")
            .with_help("Add api = \"<version>\" to the allay block");

        assert!(diag.is_warning());
        assert!(!diag.is_error());
        assert_eq!(diag.code, Some("ALY101".to_string()));
        assert_eq!(diag.file, Some("build.gradle.kts".to_string()));
        assert!(diag.span.is_some());
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_diagnostics_collection() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::error("Error 1"));
        diags.push(Diagnostic::warning("Warning 1"));
        diags.push(Diagnostic::error("Error 2"));

        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 2);
        assert_eq!(diags.warning_count(), 1);
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("Required property 'entrance' is not specified")
            .with_code("ALY201")
            .with_file("build.gradle.kts")
            .with_span(Span::new(42, 48));

        let display = format!("{}", diag);
        assert!(display.contains("error[ALY201]"));
        assert!(display.contains("entrance"));
        assert!(display.contains("build.gradle.kts:42..48"));
    }

    #[test]
    fn test_diagnostics_serialize_as_array() {
        let diags: Diagnostics = [
            Diagnostic::warning("Plugin descriptor block 'plugin { }' is recommended")
                .with_code("ALY102"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&diags).unwrap();
        assert!(json.starts_with('['), "not an array: {json}");

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_diagnostic_serialize() {
        let diag = Diagnostic::warning("Plugin descriptor block 'plugin { }' is recommended")
            .with_code("ALY102");

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"code\":\"ALY102\""));

        let restored: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.severity, Severity::Warning);
    }
}
