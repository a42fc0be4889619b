//! Entrance class reference extraction
//!
//! The `entrance` property inside `allay { plugin { ... } }` names the
//! plugin's main class. A host editor turns this into a "go to declaration"
//! reference; this module supplies the source datum: the class name text
//! and the span of the text between the quotes. Resolving the name to an
//! actual class is host policy, as is joining the leading-dot relative form
//! (`".MyPlugin"`) with the project's group id.

use serde::Serialize;

use allaydsl_ast::{SourceFile, Span};

use crate::scanner::{find_named_calls, scan_block_properties, string_property};
use crate::schema::{ANCHOR_CALL, PLUGIN_CALL};

/// A reference from the `entrance` string to a class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntranceRef {
    /// The class name exactly as written (may be `.`-relative)
    pub class_name: String,
    /// Span of the name text, excluding the quotes
    pub span: Span,
}

/// Extract the entrance class reference from a parsed build script
///
/// Returns the first `allay` block's plugin entrance. Empty strings yield
/// `None`, as does any missing piece of the expected shape (no `allay`
/// call, no `plugin` block, no `entrance` string); mid-edit sources are
/// routinely incomplete.
pub fn entrance_reference(file: &SourceFile) -> Option<EntranceRef> {
    for allay in find_named_calls(file, ANCHOR_CALL) {
        let Some(block) = &allay.block else { continue };
        let result = scan_block_properties(block, &[], &[PLUGIN_CALL]);
        let Some(plugin) = result.nested_call(PLUGIN_CALL) else {
            continue;
        };
        let Some(plugin_block) = &plugin.block else {
            continue;
        };
        if let Some((class_name, literal_span)) = string_property(plugin_block, "entrance") {
            if class_name.is_empty() {
                continue;
            }
            // Step inside the quotes; an unterminated literal has no
            // closing quote to step back over
            let end = if literal_span.len() == class_name.len() + 1 {
                literal_span.end
            } else {
                literal_span.end - 1
            };
            let span = Span::new(literal_span.start + 1, end);
            return Some(EntranceRef { class_name, span });
        }
    }
    None
}
