//! The allay DSL property schema
//!
//! A fixed table describing the properties recognized inside the `allay`
//! and `plugin` blocks: how each one is written, whether it is required,
//! and the presentation data a completion UI needs (type label, tail text,
//! insert text and caret placement). Validation and completion layers both
//! read this table; unknown properties are never flagged.

use serde::Serialize;

/// The callee name of the configuration anchor call
pub const ANCHOR_CALL: &str = "allay";

/// The callee name of the nested plugin descriptor call
pub const PLUGIN_CALL: &str = "plugin";

/// How strongly a property is expected in its block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Absence is an error
    Required,
    /// Absence is a warning
    Recommended,
    /// Recognized for completion only
    Optional,
}

/// How a property is written in the script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// `name = value`
    Assignment,
    /// `name += value` (list-valued)
    AppendAssignment,
    /// `name { ... }`
    BlockCall,
    /// `name(args)`
    FunctionCall,
}

/// One row of the schema table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PropertySpec {
    /// The property or call name
    pub name: &'static str,
    /// How the property is written
    pub kind: PropertyKind,
    /// Whether it is required, recommended or merely recognized
    pub requirement: Requirement,
    /// Type label shown next to the completion item
    pub value_type: &'static str,
    /// Tail text shown after the completion item (preview only)
    pub tail_text: &'static str,
    /// Text inserted after the name when the completion is applied
    pub insert_text: &'static str,
    /// Caret offset from the end of the inserted text (0 = at the end)
    pub caret_back: usize,
}

/// Properties recognized inside the top-level `allay { ... }` block
///
/// `api` and `plugin` are recommended, never required: the scaffold always
/// emits both, but a script without them is merely warned about.
pub const ALLAY_BLOCK: &[PropertySpec] = &[
    PropertySpec {
        name: "api",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Recommended,
        value_type: "String?",
        tail_text: " = \"version\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "server",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "String",
        tail_text: " = \"+\"",
        insert_text: " = \"+\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "apiOnly",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "Boolean",
        tail_text: " = true",
        insert_text: " = true",
        caret_back: 0,
    },
    PropertySpec {
        name: "descriptorInjection",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "Boolean",
        tail_text: " = true",
        insert_text: " = true",
        caret_back: 0,
    },
    PropertySpec {
        name: "entrance",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "plugin",
        kind: PropertyKind::BlockCall,
        requirement: Requirement::Recommended,
        value_type: "Plugin",
        tail_text: " { ... }",
        insert_text: " {\n    \n}",
        caret_back: 2,
    },
];

/// Properties recognized inside the nested `plugin { ... }` block
pub const PLUGIN_BLOCK: &[PropertySpec] = &[
    PropertySpec {
        name: "name",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Required,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "entrance",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Required,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "version",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Required,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "description",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "website",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "api",
        kind: PropertyKind::Assignment,
        requirement: Requirement::Optional,
        value_type: "String",
        tail_text: " = \"...\"",
        insert_text: " = \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "authors",
        kind: PropertyKind::AppendAssignment,
        requirement: Requirement::Optional,
        value_type: "ListProperty<String>",
        tail_text: " += \"author\"",
        insert_text: " += \"\"",
        caret_back: 1,
    },
    PropertySpec {
        name: "dependencies",
        kind: PropertyKind::AppendAssignment,
        requirement: Requirement::Optional,
        value_type: "ListProperty<Dependency>",
        tail_text: " += dependency(...)",
        insert_text: " += dependency(\"\")",
        caret_back: 2,
    },
    PropertySpec {
        name: "dependency",
        kind: PropertyKind::FunctionCall,
        requirement: Requirement::Optional,
        value_type: "(String, String?, Boolean) -> Dependency",
        tail_text: "(name, version, optional)",
        insert_text: "(\"\")",
        caret_back: 2,
    },
];

/// Names with the given requirement level, in table order
pub fn names_with(specs: &[PropertySpec], requirement: Requirement) -> Vec<&'static str> {
    specs
        .iter()
        .filter(|spec| spec.requirement == requirement)
        .map(|spec| spec.name)
        .collect()
}

/// Every assignment-shaped name in a table (for scanning)
pub fn assignment_names(specs: &[PropertySpec]) -> Vec<&'static str> {
    specs
        .iter()
        .filter(|spec| {
            matches!(
                spec.kind,
                PropertyKind::Assignment | PropertyKind::AppendAssignment
            )
        })
        .map(|spec| spec.name)
        .collect()
}

/// Look up a property by name in a table
pub fn lookup(specs: &[PropertySpec], name: &str) -> Option<PropertySpec> {
    specs.iter().copied().find(|spec| spec.name == name)
}
