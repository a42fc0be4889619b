//! Gradle Kotlin-DSL subset parser
//!
//! This module parses `build.gradle.kts` text into an
//! [`allaydsl_ast::SourceFile`]. It models exactly the statement shapes the
//! allay schema cares about:
//!
//! - Call expressions: `allay { ... }`, `plugin { ... }`, `dependency("x")`
//! - Assignments: `api = "0.15.0"`, `authors += "me"`
//! - String and boolean literals; any other right-hand side is kept as raw
//!   text
//!
//! Every other statement becomes an [`Other`] node that scanning ignores.
//!
//! Build scripts are routinely parsed mid-edit, so the parser never fails:
//! unterminated strings end at the line break, unclosed blocks end at EOF,
//! stray tokens are swept into `Other` statements, and an empty input yields
//! an empty tree.
//!
//! # Example
//!
//! ```
//! use allaydsl_core::parse;
//! use allaydsl_ast::Node;
//!
//! let file = parse("allay {\n    api = \"0.15.0\"\n}\n");
//! assert_eq!(file.statements.len(), 1);
//! assert!(matches!(file.statements[0], Node::Call(_)));
//! ```

use allaydsl_ast::{AssignOp, Assignment, Block, Call, Expr, Node, Other, SourceFile, Span};

/// Parse source text into a tree
///
/// Never fails; malformed or partial input produces a partial tree.
pub fn parse(source: &str) -> SourceFile {
    let tokens = lex(source);
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
    };
    let statements = parser.parse_statements(false);
    SourceFile {
        statements,
        span: Span::new(0, source.len()),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    /// Identifier, e.g. `allay`, `api`, `true`
    Ident(String),
    /// String literal; value excludes the quotes
    Str(String),
    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    /// Statement terminator: `\n` or `;`
    Newline,
    /// Any character the grammar does not model
    Junk,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    span: Span,
}

/// Tokenize the source. Comments and horizontal whitespace are dropped;
/// everything else becomes a token, unknown characters included.
fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            ' ' | '\t' | '\r' => {}
            '\n' | ';' => tokens.push(Token {
                kind: TokenKind::Newline,
                span: Span::new(start, start + ch.len_utf8()),
            }),
            '/' => match chars.peek() {
                Some((_, '/')) => {
                    // Line comment: skip to the end of the line
                    while let Some((_, c)) = chars.peek() {
                        if *c == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some((_, '*')) => {
                    // Block comment: skip to `*/`, or EOF if unterminated
                    chars.next();
                    let mut prev = '\0';
                    for (_, c) in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                }
                _ => tokens.push(Token {
                    kind: TokenKind::Junk,
                    span: Span::new(start, start + 1),
                }),
            },
            '"' => {
                let mut value = String::new();
                let mut end = start + 1;
                loop {
                    match chars.peek().copied() {
                        // Unterminated string ends at the line break
                        None | Some((_, '\n')) => break,
                        Some((i, '"')) => {
                            chars.next();
                            end = i + 1;
                            break;
                        }
                        Some((i, '\\')) => {
                            chars.next();
                            match chars.peek().copied() {
                                Some((j, esc)) => {
                                    chars.next();
                                    value.push(match esc {
                                        'n' => '\n',
                                        't' => '\t',
                                        other => other,
                                    });
                                    end = j + esc.len_utf8();
                                }
                                None => {
                                    end = i + 1;
                                    break;
                                }
                            }
                        }
                        Some((i, c)) => {
                            chars.next();
                            value.push(c);
                            end = i + c.len_utf8();
                        }
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Str(value),
                    span: Span::new(start, end),
                });
            }
            '=' => tokens.push(Token {
                kind: TokenKind::Assign,
                span: Span::new(start, start + 1),
            }),
            '+' => {
                if matches!(chars.peek(), Some((_, '='))) {
                    let (i, _) = chars.next().expect("peeked");
                    tokens.push(Token {
                        kind: TokenKind::PlusAssign,
                        span: Span::new(start, i + 1),
                    });
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Junk,
                        span: Span::new(start, start + 1),
                    });
                }
            }
            '{' => tokens.push(Token {
                kind: TokenKind::LBrace,
                span: Span::new(start, start + 1),
            }),
            '}' => tokens.push(Token {
                kind: TokenKind::RBrace,
                span: Span::new(start, start + 1),
            }),
            '(' => tokens.push(Token {
                kind: TokenKind::LParen,
                span: Span::new(start, start + 1),
            }),
            ')' => tokens.push(Token {
                kind: TokenKind::RParen,
                span: Span::new(start, start + 1),
            }),
            ',' => tokens.push(Token {
                kind: TokenKind::Comma,
                span: Span::new(start, start + 1),
            }),
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start + c.len_utf8();
                let mut ident = String::new();
                ident.push(c);
                while let Some((i, nc)) = chars.peek().copied() {
                    if nc.is_alphanumeric() || nc == '_' {
                        chars.next();
                        ident.push(nc);
                        end = i + nc.len_utf8();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(ident),
                    span: Span::new(start, end),
                });
            }
            c => tokens.push(Token {
                kind: TokenKind::Junk,
                span: Span::new(start, start + c.len_utf8()),
            }),
        }
    }

    tokens
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek_kind(), Some(TokenKind::Newline)) {
            self.pos += 1;
        }
    }

    fn slice(&self, span: Span) -> String {
        span.slice(self.source).unwrap_or("").trim().to_string()
    }

    /// Parse statements until EOF, or a closing brace when inside a block
    fn parse_statements(&mut self, inside_block: bool) -> Vec<Node> {
        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek_kind() {
                None => break,
                Some(TokenKind::RBrace) => {
                    if inside_block {
                        break;
                    }
                    // Stray brace at the top level
                    self.advance();
                }
                Some(TokenKind::Ident(_)) => {
                    if let Some(node) = self.parse_ident_statement() {
                        statements.push(node);
                    }
                }
                Some(_) => {
                    if let Some(node) = self.parse_other_statement() {
                        statements.push(node);
                    }
                }
            }
        }
        statements
    }

    /// Parse a statement beginning with an identifier: an assignment, a
    /// call, or an unmodeled statement
    fn parse_ident_statement(&mut self) -> Option<Node> {
        let token = self.advance()?;
        let name = match token.kind {
            TokenKind::Ident(name) => name,
            _ => return None,
        };
        let name_span = token.span;

        match self.peek_kind() {
            Some(TokenKind::Assign) | Some(TokenKind::PlusAssign) => {
                let op_token = self.advance().expect("peeked");
                let op = match op_token.kind {
                    TokenKind::PlusAssign => AssignOp::Append,
                    _ => AssignOp::Set,
                };
                let value = self.parse_value(op_token.span.end);
                let span = name_span.merge(&value.span());
                Some(Node::Assignment(Assignment {
                    name,
                    name_span,
                    op,
                    value,
                    span,
                }))
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let (args, args_end) = self.parse_args();
                let (block, end) = match self.peek_kind() {
                    Some(TokenKind::LBrace) => {
                        let block = self.parse_block();
                        let end = block.span.end;
                        (Some(block), end)
                    }
                    _ => (None, args_end),
                };
                Some(Node::Call(Call {
                    callee: name,
                    callee_span: name_span,
                    args,
                    block,
                    span: Span::new(name_span.start, end),
                }))
            }
            Some(TokenKind::LBrace) => {
                let block = self.parse_block();
                let end = block.span.end;
                Some(Node::Call(Call {
                    callee: name,
                    callee_span: name_span,
                    args: Vec::new(),
                    block: Some(block),
                    span: Span::new(name_span.start, end),
                }))
            }
            _ => {
                // Not a shape we model; sweep the rest of the line
                let span = match self.raw_run(false) {
                    Some(rest) => name_span.merge(&rest),
                    None => name_span,
                };
                Some(Node::Other(Other {
                    text: self.slice(span),
                    span,
                }))
            }
        }
    }

    /// Sweep an unmodeled statement into an `Other` node
    fn parse_other_statement(&mut self) -> Option<Node> {
        let span = match self.raw_run(false) {
            Some(span) => span,
            None => {
                // A stray delimiter raw_run refuses to consume
                self.advance();
                return None;
            }
        };
        let text = self.slice(span);
        if text.is_empty() {
            return None;
        }
        Some(Node::Other(Other { text, span }))
    }

    /// Parse a right-hand side expression after `=` or `+=`
    fn parse_value(&mut self, after: usize) -> Expr {
        if let Some(TokenKind::Str(_)) = self.peek_kind() {
            let token = self.advance().expect("peeked");
            if let TokenKind::Str(value) = token.kind {
                return Expr::Str {
                    value,
                    span: token.span,
                };
            }
        }

        match self.raw_run(false) {
            Some(span) => {
                let text = self.slice(span);
                match text.as_str() {
                    "true" => Expr::Bool { value: true, span },
                    "false" => Expr::Bool { value: false, span },
                    _ => Expr::Raw { text, span },
                }
            }
            // Nothing after the operator (mid-edit source)
            None => Expr::Raw {
                text: String::new(),
                span: Span::point(after),
            },
        }
    }

    /// Parse call arguments; the opening paren is already consumed.
    /// Returns the arguments and the end offset of the argument list.
    fn parse_args(&mut self) -> (Vec<Expr>, usize) {
        let mut args = Vec::new();
        let mut end = self
            .tokens
            .get(self.pos.saturating_sub(1))
            .map(|t| t.span.end)
            .unwrap_or(0);

        loop {
            self.skip_newlines();
            match self.peek_kind() {
                None | Some(TokenKind::RBrace) => break,
                Some(TokenKind::RParen) => {
                    let token = self.advance().expect("peeked");
                    end = token.span.end;
                    break;
                }
                Some(TokenKind::Comma) => {
                    self.advance();
                }
                Some(TokenKind::Str(_)) => {
                    let token = self.advance().expect("peeked");
                    end = token.span.end;
                    if let TokenKind::Str(value) = token.kind {
                        args.push(Expr::Str {
                            value,
                            span: token.span,
                        });
                    }
                }
                Some(_) => match self.raw_run(true) {
                    Some(span) => {
                        end = span.end;
                        let text = self.slice(span);
                        args.push(match text.as_str() {
                            "true" => Expr::Bool { value: true, span },
                            "false" => Expr::Bool { value: false, span },
                            _ => Expr::Raw { text, span },
                        });
                    }
                    None => break,
                },
            }
        }

        (args, end)
    }

    /// Parse a `{ ... }` block; the opening brace is at the current position
    fn parse_block(&mut self) -> Block {
        let open = self.advance().expect("caller checked for LBrace");
        let statements = self.parse_statements(true);
        let end = match self.peek_kind() {
            Some(TokenKind::RBrace) => self.advance().expect("peeked").span.end,
            // Unclosed block ends at EOF
            _ => self
                .tokens
                .last()
                .map(|t| t.span.end)
                .unwrap_or(self.source.len()),
        };
        Block {
            statements,
            span: Span::new(open.span.start, end),
        }
    }

    /// Consume a run of raw tokens up to a statement boundary: a newline,
    /// comma (when requested), or a closing brace/paren belonging to the
    /// enclosing scope. Nested parens and braces are consumed whole.
    fn raw_run(&mut self, stop_at_comma: bool) -> Option<Span> {
        let mut span: Option<Span> = None;
        let mut parens = 0usize;
        let mut braces = 0usize;

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Newline if parens == 0 && braces == 0 => break,
                TokenKind::Comma if stop_at_comma && parens == 0 && braces == 0 => break,
                TokenKind::RParen if parens == 0 => break,
                TokenKind::RBrace if braces == 0 => break,
                TokenKind::LParen => parens += 1,
                TokenKind::RParen => parens -= 1,
                TokenKind::LBrace => braces += 1,
                TokenKind::RBrace => braces -= 1,
                _ => {}
            }
            let token = self.advance().expect("peeked");
            span = Some(match span {
                None => token.span,
                Some(s) => s.merge(&token.span),
            });
        }

        span
    }
}
