//! DSL block scanning
//!
//! Pure queries over a parsed tree: locating anchor calls by name and
//! classifying the direct statements of a block against a set of property
//! and call names. Scanning never fails; a malformed or partial tree simply
//! produces empty/absent results.
//!
//! The scanner does not recurse across block levels on its own. Each level
//! has its own name set, so callers re-scan the nested calls a
//! [`ScanResult`] hands back with that block's schema.

use std::collections::BTreeSet;

use serde::Serialize;

use allaydsl_ast::{Block, Call, Node, SourceFile, Span};

/// Find every call expression named `name`, at any nesting depth
///
/// The returned iterator is lazy and walks the tree once; call again to
/// re-scan. An empty or malformed tree yields an empty iterator.
///
/// # Example
///
/// ```
/// use allaydsl_core::{parse, find_named_calls};
///
/// let file = parse("allay {\n    plugin {\n    }\n}\nallay {\n}\n");
/// assert_eq!(find_named_calls(&file, "allay").count(), 2);
/// assert_eq!(find_named_calls(&file, "plugin").count(), 1);
/// assert_eq!(find_named_calls(&file, "missing").count(), 0);
/// ```
pub fn find_named_calls<'t>(
    file: &'t SourceFile,
    name: &'t str,
) -> impl Iterator<Item = &'t Call> + 't {
    file.descendants()
        .filter_map(Node::as_call)
        .filter(move |call| call.callee == name)
}

/// The result of scanning one block's direct statements
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult<'t> {
    /// Names recorded as present (matched assignments and calls)
    present: BTreeSet<String>,
    /// Matched nested calls, for caller-driven recursion
    #[serde(skip)]
    nested: Vec<&'t Call>,
}

impl<'t> ScanResult<'t> {
    /// Whether a property or call of interest was seen
    pub fn is_present(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    /// The subset of `names` that was not seen, in the given order
    pub fn missing(&self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .filter(|name| !self.is_present(name))
            .map(|name| (*name).to_string())
            .collect()
    }

    /// All matched nested calls, in source order
    pub fn nested_calls(&self) -> &[&'t Call] {
        &self.nested
    }

    /// The first matched nested call with the given callee
    pub fn nested_call(&self, name: &str) -> Option<&'t Call> {
        self.nested.iter().copied().find(|call| call.callee == name)
    }
}

/// Classify the direct statement children of a block
///
/// Each statement is classified as:
/// - a property assignment, if it is an assignment whose left side is a
///   bare identifier in `property_names`: recorded present;
/// - a nested call, if it is a call whose callee is in `call_names`:
///   recorded present, and its node returned for the caller to re-scan
///   with that block's own schema.
///
/// Any other statement shape is ignored: unrecognized statements are not
/// evidence of anything. Scanning an unmodified tree twice yields
/// identical results.
pub fn scan_block_properties<'t>(
    block: &'t Block,
    property_names: &[&str],
    call_names: &[&str],
) -> ScanResult<'t> {
    let mut present = BTreeSet::new();
    let mut nested = Vec::new();

    for statement in &block.statements {
        match statement {
            Node::Assignment(assignment) => {
                if property_names.contains(&assignment.name.as_str()) {
                    present.insert(assignment.name.clone());
                }
            }
            Node::Call(call) => {
                if call_names.contains(&call.callee.as_str()) {
                    present.insert(call.callee.clone());
                    nested.push(call);
                }
            }
            Node::Other(_) => {}
        }
    }

    ScanResult { present, nested }
}

/// The string value and literal span of a direct `name = "..."` assignment
///
/// Returns the last matching assignment in the block, mirroring a script
/// where later assignments win. `None` when the property is absent or its
/// value is not a string literal.
pub fn string_property(block: &Block, name: &str) -> Option<(String, Span)> {
    let mut found = None;
    for statement in &block.statements {
        if let Node::Assignment(assignment) = statement {
            if assignment.name == name {
                if let Some(value) = assignment.value.as_str() {
                    found = Some((value.to_string(), assignment.value.span()));
                }
            }
        }
    }
    found
}
