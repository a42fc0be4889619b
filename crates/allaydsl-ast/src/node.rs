//! Statement nodes for the allay Gradle DSL
//!
//! The tree distinguishes exactly the statement shapes the schema cares
//! about: call expressions with an optional trailing block, `name = value`
//! style assignments, and everything else as an opaque `Other` statement.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A statement inside a source file or block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A call expression, e.g. `allay { ... }` or `dependency("x")`
    Call(Call),
    /// An assignment, e.g. `api = "0.15.0"` or `authors += "me"`
    Assignment(Assignment),
    /// Any statement shape the grammar does not model
    Other(Other),
}

/// A call expression with an optional trailing block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// The callee identifier, e.g. `allay`
    pub callee: String,
    /// Span of the callee identifier
    pub callee_span: Span,
    /// Parenthesized arguments, if any
    pub args: Vec<Expr>,
    /// Trailing `{ ... }` body, if any
    pub block: Option<Block>,
    /// Span of the whole call
    pub span: Span,
}

/// Assignment operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    /// `=`
    Set,
    /// `+=`
    Append,
}

/// An assignment statement with a bare identifier on the left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// The property name on the left-hand side
    pub name: String,
    /// Span of the left-hand identifier
    pub name_span: Span,
    /// The assignment operator
    pub op: AssignOp,
    /// The right-hand side expression
    pub value: Expr,
    /// Span of the whole statement
    pub span: Span,
}

/// A statement the grammar does not model
///
/// Carried so callers can see the full statement list; scanning ignores
/// these without flagging them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Other {
    /// Raw statement text
    pub text: String,
    /// Span of the statement
    pub span: Span,
}

/// A `{ ... }` block of statements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    /// Direct statement children, in source order
    pub statements: Vec<Node>,
    /// Span from the opening brace to the closing brace (or EOF)
    pub span: Span,
}

/// A right-hand side or argument expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A string literal; `value` excludes the quotes, `span` includes them
    Str { value: String, span: Span },
    /// A boolean literal
    Bool { value: bool, span: Span },
    /// Any other expression, kept as raw text
    Raw { text: String, span: Span },
}

/// The root of a parsed source file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceFile {
    /// Top-level statements, in source order
    pub statements: Vec<Node>,
    /// Span of the whole file
    pub span: Span,
}

impl Node {
    /// The span of this statement
    pub fn span(&self) -> Span {
        match self {
            Node::Call(call) => call.span,
            Node::Assignment(assignment) => assignment.span,
            Node::Other(other) => other.span,
        }
    }

    /// This node as a call, if it is one
    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Node::Call(call) => Some(call),
            _ => None,
        }
    }

    /// This node as an assignment, if it is one
    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            Node::Assignment(assignment) => Some(assignment),
            _ => None,
        }
    }

    /// Lazy depth-first iterator over this node and all its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self],
        }
    }
}

impl Expr {
    /// The span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expr::Str { span, .. } | Expr::Bool { span, .. } | Expr::Raw { span, .. } => *span,
        }
    }

    /// The string value, if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::Str { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl SourceFile {
    /// Create an empty source file
    pub fn new() -> Self {
        Self::default()
    }

    /// Lazy depth-first iterator over every node in the file
    ///
    /// The tree is walked once per invocation; call again to re-scan.
    /// An empty file yields an empty iterator.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.statements.iter().rev().collect(),
        }
    }
}

/// Depth-first traversal over nodes, yielding parents before children
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        if let Node::Call(call) = node {
            if let Some(block) = &call.block {
                self.stack.extend(block.statements.iter().rev());
            }
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(callee: &str, block: Option<Block>) -> Node {
        Node::Call(Call {
            callee: callee.to_string(),
            callee_span: Span::default(),
            args: Vec::new(),
            block,
            span: Span::default(),
        })
    }

    fn assignment(name: &str, value: &str) -> Node {
        Node::Assignment(Assignment {
            name: name.to_string(),
            name_span: Span::default(),
            op: AssignOp::Set,
            value: Expr::Str {
                value: value.to_string(),
                span: Span::default(),
            },
            span: Span::default(),
        })
    }

    #[test]
    fn test_empty_file_has_no_descendants() {
        let file = SourceFile::new();
        assert_eq!(file.descendants().count(), 0);
    }

    #[test]
    fn test_descendants_depth_first_order() {
        let inner = Block {
            statements: vec![assignment("name", "MyPlugin")],
            span: Span::default(),
        };
        let outer = Block {
            statements: vec![assignment("api", "0.15.0"), call("plugin", Some(inner))],
            span: Span::default(),
        };
        let file = SourceFile {
            statements: vec![call("allay", Some(outer))],
            span: Span::default(),
        };

        let names: Vec<String> = file
            .descendants()
            .map(|node| match node {
                Node::Call(c) => c.callee.clone(),
                Node::Assignment(a) => a.name.clone(),
                Node::Other(o) => o.text.clone(),
            })
            .collect();

        assert_eq!(names, vec!["allay", "api", "plugin", "name"]);
    }

    #[test]
    fn test_descendants_walks_nested_calls() {
        let inner = Block {
            statements: vec![call("plugin", None)],
            span: Span::default(),
        };
        let file = SourceFile {
            statements: vec![call("allay", Some(inner))],
            span: Span::default(),
        };

        let calls: Vec<&str> = file
            .descendants()
            .filter_map(Node::as_call)
            .map(|c| c.callee.as_str())
            .collect();
        assert_eq!(calls, vec!["allay", "plugin"]);
    }

    #[test]
    fn test_as_call_and_as_assignment() {
        let node = assignment("api", "0.15.0");
        assert!(node.as_call().is_none());
        assert_eq!(node.as_assignment().unwrap().name, "api");
    }

    #[test]
    fn test_expr_as_str() {
        let expr = Expr::Bool {
            value: true,
            span: Span::default(),
        };
        assert!(expr.as_str().is_none());

        let expr = Expr::Str {
            value: "0.15.0".to_string(),
            span: Span::default(),
        };
        assert_eq!(expr.as_str(), Some("0.15.0"));
    }

    #[test]
    fn test_node_serialize_round_trip() {
        let node = assignment("api", "0.15.0");
        let json = serde_json::to_string(&node).unwrap();
        let restored: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, restored);
    }
}
