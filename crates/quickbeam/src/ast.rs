//! Serializable AST dumps
//!
//! This module flattens a parsed `syn` syntax tree into [`AstNode`], a small
//! serializable tree of kind names, source positions, and short code
//! snippets. The dump is intentionally lossy: it names what each node is and
//! where it sits, without reproducing the full grammar.

use std::path::Path;

use proc_macro2::Span;
use serde::Serialize;
use syn::spanned::Spanned;

use crate::error::Result;
use crate::source::SourceCache;

/// Longest snippet carried by a node before truncation.
const MAX_SNIPPET_LEN: usize = 32;

/// One node of a dumped syntax tree.
#[derive(Debug, Clone, Serialize)]
pub struct AstNode {
    /// Human-readable node kind
    pub kind: &'static str,
    /// Starting line (1-indexed)
    pub line: usize,
    /// Starting column (1-indexed)
    pub column: usize,
    /// Flattened source snippet, truncated to 32 characters
    pub code: String,
    /// Child nodes, omitted from JSON when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstNode>,
}

impl AstNode {
    fn new(kind: &'static str, span: Span, code: &str, children: Vec<AstNode>) -> Self {
        let start = span.start();
        Self {
            kind,
            line: start.line,
            column: start.column + 1,
            code: short_snippet(code, span),
            children,
        }
    }

    fn leaf(kind: &'static str, span: Span, code: &str) -> Self {
        Self::new(kind, span, code, Vec::new())
    }

    /// Total number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstNode::node_count).sum::<usize>()
    }
}

/// Parse a source file and dump its syntax tree.
pub fn dump_ast(path: &Path, cache: &SourceCache) -> Result<AstNode> {
    let code = cache.code_of_file(path)?;
    let file = cache.parse_source(path)?;
    Ok(dump_file(&file, &code))
}

/// Dump an already-parsed file against its source text.
pub fn dump_file(file: &syn::File, code: &str) -> AstNode {
    AstNode {
        kind: "file",
        line: 1,
        column: 1,
        code: flatten(code),
        children: file.items.iter().map(|item| item_node(item, code)).collect(),
    }
}

/// Extract the snippet a span covers, flattened and truncated.
pub fn short_snippet(code: &str, span: Span) -> String {
    let raw = code.get(span.byte_range()).unwrap_or("");
    flatten(raw)
}

/// Replace line breaks and tabs with spaces and truncate to snippet length.
fn flatten(raw: &str) -> String {
    let flat: String = raw
        .chars()
        .map(|c| if matches!(c, '\n' | '\t' | '\r') { ' ' } else { c })
        .collect();
    if flat.chars().count() > MAX_SNIPPET_LEN {
        let mut cut: String = flat.chars().take(MAX_SNIPPET_LEN).collect();
        cut.push_str("...");
        cut
    } else {
        flat
    }
}

fn item_node(item: &syn::Item, code: &str) -> AstNode {
    let span = item.span();
    let children = match item {
        syn::Item::Fn(f) => f.block.stmts.iter().map(|s| stmt_node(s, code)).collect(),
        syn::Item::Impl(i) => i.items.iter().map(|m| impl_item_node(m, code)).collect(),
        syn::Item::Const(c) => vec![expr_node(&c.expr, code)],
        syn::Item::Static(s) => vec![expr_node(&s.expr, code)],
        syn::Item::Mod(m) => match &m.content {
            Some((_, items)) => items.iter().map(|i| item_node(i, code)).collect(),
            None => Vec::new(),
        },
        _ => Vec::new(),
    };
    AstNode::new(item_kind_name(item), span, code, children)
}

fn impl_item_node(item: &syn::ImplItem, code: &str) -> AstNode {
    let span = item.span();
    match item {
        syn::ImplItem::Fn(f) => {
            let children = f.block.stmts.iter().map(|s| stmt_node(s, code)).collect();
            AstNode::new("method", span, code, children)
        }
        syn::ImplItem::Const(c) => {
            AstNode::new("associated constant", span, code, vec![expr_node(&c.expr, code)])
        }
        syn::ImplItem::Type(_) => AstNode::leaf("associated type", span, code),
        syn::ImplItem::Macro(_) => AstNode::leaf("macro invocation", span, code),
        _ => AstNode::leaf("impl item", span, code),
    }
}

fn stmt_node(stmt: &syn::Stmt, code: &str) -> AstNode {
    let span = stmt.span();
    match stmt {
        syn::Stmt::Local(local) => {
            let children = match &local.init {
                Some(init) => vec![expr_node(&init.expr, code)],
                None => Vec::new(),
            };
            AstNode::new("let binding", span, code, children)
        }
        syn::Stmt::Item(item) => item_node(item, code),
        syn::Stmt::Expr(expr, _) => expr_node(expr, code),
        syn::Stmt::Macro(_) => AstNode::leaf("macro invocation", span, code),
    }
}

fn expr_node(expr: &syn::Expr, code: &str) -> AstNode {
    let span = expr.span();
    let kind = expr_kind_name(expr);
    let children = match expr {
        syn::Expr::Array(e) => e.elems.iter().map(|e| expr_node(e, code)).collect(),
        syn::Expr::Assign(e) => vec![expr_node(&e.left, code), expr_node(&e.right, code)],
        syn::Expr::Binary(e) => vec![expr_node(&e.left, code), expr_node(&e.right, code)],
        syn::Expr::Block(e) => e.block.stmts.iter().map(|s| stmt_node(s, code)).collect(),
        syn::Expr::Call(e) => {
            let mut nodes = vec![expr_node(&e.func, code)];
            nodes.extend(e.args.iter().map(|a| expr_node(a, code)));
            nodes
        }
        syn::Expr::Cast(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::Field(e) => vec![expr_node(&e.base, code)],
        syn::Expr::ForLoop(e) => {
            let mut nodes = vec![expr_node(&e.expr, code)];
            nodes.extend(e.body.stmts.iter().map(|s| stmt_node(s, code)));
            nodes
        }
        syn::Expr::Group(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::If(e) => {
            let mut nodes = vec![expr_node(&e.cond, code)];
            nodes.extend(e.then_branch.stmts.iter().map(|s| stmt_node(s, code)));
            if let Some((_, else_branch)) = &e.else_branch {
                nodes.push(expr_node(else_branch, code));
            }
            nodes
        }
        syn::Expr::Index(e) => vec![expr_node(&e.expr, code), expr_node(&e.index, code)],
        syn::Expr::Let(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::Loop(e) => e.body.stmts.iter().map(|s| stmt_node(s, code)).collect(),
        syn::Expr::Match(e) => {
            let mut nodes = vec![expr_node(&e.expr, code)];
            nodes.extend(e.arms.iter().map(|arm| expr_node(&arm.body, code)));
            nodes
        }
        syn::Expr::MethodCall(e) => {
            let mut nodes = vec![expr_node(&e.receiver, code)];
            nodes.extend(e.args.iter().map(|a| expr_node(a, code)));
            nodes
        }
        syn::Expr::Paren(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::Range(e) => {
            let mut nodes = Vec::new();
            if let Some(start) = &e.start {
                nodes.push(expr_node(start, code));
            }
            if let Some(end) = &e.end {
                nodes.push(expr_node(end, code));
            }
            nodes
        }
        syn::Expr::Reference(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::Repeat(e) => vec![expr_node(&e.expr, code), expr_node(&e.len, code)],
        syn::Expr::Return(e) => match &e.expr {
            Some(inner) => vec![expr_node(inner, code)],
            None => Vec::new(),
        },
        syn::Expr::Struct(e) => e
            .fields
            .iter()
            .map(|field| expr_node(&field.expr, code))
            .collect(),
        syn::Expr::Try(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::Tuple(e) => e.elems.iter().map(|e| expr_node(e, code)).collect(),
        syn::Expr::Unary(e) => vec![expr_node(&e.expr, code)],
        syn::Expr::Unsafe(e) => e.block.stmts.iter().map(|s| stmt_node(s, code)).collect(),
        syn::Expr::While(e) => {
            let mut nodes = vec![expr_node(&e.cond, code)];
            nodes.extend(e.body.stmts.iter().map(|s| stmt_node(s, code)));
            nodes
        }
        _ => Vec::new(),
    };
    AstNode::new(kind, span, code, children)
}

/// Get a human-readable name for an item kind.
fn item_kind_name(item: &syn::Item) -> &'static str {
    match item {
        syn::Item::Const(_) => "constant",
        syn::Item::Enum(_) => "enum",
        syn::Item::ExternCrate(_) => "extern crate",
        syn::Item::Fn(_) => "function",
        syn::Item::ForeignMod(_) => "foreign module",
        syn::Item::Impl(_) => "impl block",
        syn::Item::Macro(_) => "macro invocation",
        syn::Item::Mod(_) => "module",
        syn::Item::Static(_) => "static",
        syn::Item::Struct(_) => "struct",
        syn::Item::Trait(_) => "trait",
        syn::Item::TraitAlias(_) => "trait alias",
        syn::Item::Type(_) => "type alias",
        syn::Item::Union(_) => "union",
        syn::Item::Use(_) => "use declaration",
        _ => "item",
    }
}

/// Get a human-readable name for an expression kind.
pub(crate) fn expr_kind_name(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Array(_) => "array",
        syn::Expr::Assign(_) => "assignment",
        syn::Expr::Async(_) => "async block",
        syn::Expr::Await(_) => "await",
        syn::Expr::Binary(_) => "binary operation",
        syn::Expr::Block(_) => "block",
        syn::Expr::Break(_) => "break",
        syn::Expr::Call(_) => "function call",
        syn::Expr::Cast(_) => "cast",
        syn::Expr::Closure(_) => "closure",
        syn::Expr::Const(_) => "const block",
        syn::Expr::Continue(_) => "continue",
        syn::Expr::Field(_) => "field access",
        syn::Expr::ForLoop(_) => "for loop",
        syn::Expr::Group(_) => "group",
        syn::Expr::If(_) => "if",
        syn::Expr::Index(_) => "index",
        syn::Expr::Let(_) => "let guard",
        syn::Expr::Lit(_) => "literal",
        syn::Expr::Loop(_) => "loop",
        syn::Expr::Macro(_) => "macro invocation",
        syn::Expr::Match(_) => "match",
        syn::Expr::MethodCall(_) => "method call",
        syn::Expr::Paren(_) => "parenthesized",
        syn::Expr::Path(_) => "path",
        syn::Expr::Range(_) => "range",
        syn::Expr::Reference(_) => "reference",
        syn::Expr::Repeat(_) => "repeat",
        syn::Expr::Return(_) => "return",
        syn::Expr::Struct(_) => "struct literal",
        syn::Expr::Try(_) => "try",
        syn::Expr::Tuple(_) => "tuple",
        syn::Expr::Unary(_) => "unary operation",
        syn::Expr::Unsafe(_) => "unsafe block",
        syn::Expr::While(_) => "while",
        syn::Expr::Yield(_) => "yield",
        _ => "expression",
    }
}
