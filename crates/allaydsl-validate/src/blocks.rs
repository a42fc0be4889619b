//! allay and plugin block validators
//!
//! Two validators over the fixed schema:
//!
//! - [`AllayBlockValidator`] warns when a top-level `allay` block is missing
//!   the recommended `api` property or the `plugin { ... }` descriptor.
//! - [`PluginBlockValidator`] errors when a `plugin` block nested in an
//!   `allay` block is missing one of its required properties.
//!
//! Both anchor their findings at the callee identifier of the enclosing
//! call. An `allay` call without a trailing block (mid-edit source) is
//! skipped entirely rather than flagged.
//!
//! # Diagnostic Codes
//!
//! - `ALY101`: `api` missing from the allay block (warning)
//! - `ALY102`: `plugin { }` descriptor missing (warning)
//! - `ALY201`: required `entrance` missing (error)
//! - `ALY202`: required `name` missing (error)
//! - `ALY203`: required `version` missing (error)

use allaydsl_ast::{Call, SourceFile};
use allaydsl_core::diagnostics::Diagnostic;
use allaydsl_core::scanner::{find_named_calls, scan_block_properties, ScanResult};
use allaydsl_core::schema::{ANCHOR_CALL, PLUGIN_CALL};

use crate::Validator;

/// Validates the top-level `allay { ... }` block
///
/// Both checks stay warnings even though the project scaffold always emits
/// the properties: they are recommended, not mandatory.
pub struct AllayBlockValidator;

impl Validator for AllayBlockValidator {
    fn code(&self) -> &'static str {
        "ALY1"
    }

    fn name(&self) -> &'static str {
        "allay-block"
    }

    fn validate(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for call in find_named_calls(file, ANCHOR_CALL) {
            let Some(block) = &call.block else { continue };
            let result = scan_block_properties(block, &["api"], &[PLUGIN_CALL]);

            if !result.is_present("api") {
                diagnostics.push(
                    Diagnostic::warning("Property 'api' should be specified when apiOnly = true")
                        .with_code("ALY101")
                        .with_span(call.callee_span),
                );
            }

            if !result.is_present(PLUGIN_CALL) {
                diagnostics.push(
                    Diagnostic::warning("Plugin descriptor block 'plugin { }' is recommended")
                        .with_code("ALY102")
                        .with_span(call.callee_span),
                );
            }
        }

        diagnostics
    }
}

/// Validates `plugin { ... }` blocks nested in `allay` blocks
pub struct PluginBlockValidator;

impl PluginBlockValidator {
    fn check_plugin(plugin: &Call, diagnostics: &mut Vec<Diagnostic>) {
        let Some(block) = &plugin.block else { return };
        let result: ScanResult<'_> =
            scan_block_properties(block, &["entrance", "name", "version"], &[]);

        let checks = [
            ("entrance", "ALY201"),
            ("name", "ALY202"),
            ("version", "ALY203"),
        ];
        for (property, code) in checks {
            if !result.is_present(property) {
                diagnostics.push(
                    Diagnostic::error(format!(
                        "Required property '{property}' is not specified"
                    ))
                    .with_code(code)
                    .with_span(plugin.callee_span),
                );
            }
        }
    }
}

impl Validator for PluginBlockValidator {
    fn code(&self) -> &'static str {
        "ALY2"
    }

    fn name(&self) -> &'static str {
        "plugin-block"
    }

    fn validate(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for allay in find_named_calls(file, ANCHOR_CALL) {
            let Some(block) = &allay.block else { continue };
            let result = scan_block_properties(block, &[], &[PLUGIN_CALL]);
            for plugin in result.nested_calls() {
                Self::check_plugin(plugin, &mut diagnostics);
            }
        }

        diagnostics
    }
}
