//! AST-walking lint engine
//!
//! The engine performs a single traversal of each file's syntax tree with a
//! set of [`Lint`] rules attached. Rules do not walk the tree themselves;
//! the [`Walker`] visits every node, extracts the places rules care about
//! (function definitions, literals) and hands them to each rule in turn.
//! Rules record violations through the [`LintContext`].

pub mod fn_body;
pub mod fn_params;
pub mod magic;

pub use fn_body::FnBodyLength;
pub use fn_params::FnParamCount;
pub use magic::MagicNumber;

use std::path::Path;
use std::time::Instant;

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::visit::Visit;

use crate::ast::short_snippet;
use crate::error::Result;
use crate::report::{Diagnostic, Report};
use crate::source::SourceCache;

/// Kind of the node a literal sits directly under.
///
/// Rules use this to skip literals in initializer position, where a value
/// is being given a name and is therefore not "magic".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    /// Direct initializer of a `let` binding
    LetBinding,
    /// Direct initializer of a `const` item
    ConstItem,
    /// Direct initializer of a `static` item
    StaticItem,
    /// Anything else
    Other,
}

impl ParentKind {
    /// Whether the literal is the direct initializer of a named value.
    pub fn is_initializer(self) -> bool {
        self != ParentKind::Other
    }
}

/// Details of one function definition, free function or method.
#[derive(Debug)]
pub struct FnDetails<'ast> {
    /// Function name
    pub name: String,
    /// Number of parameters, `self` receivers excluded
    pub param_count: usize,
    /// Function body
    pub body: &'ast syn::Block,
    /// Span of the function signature
    pub span: Span,
    /// Whether this is a method inside an `impl` block
    pub is_method: bool,
}

/// A single lint rule.
///
/// Rules implement the hooks for the node shapes they care about and leave
/// the rest defaulted to no-ops.
pub trait Lint {
    /// Stable rule identifier, e.g. `RS-000002`.
    fn rule_id(&self) -> &'static str;

    /// Short rule name used in rendered reports.
    fn rule_name(&self) -> &'static str;

    /// Inspect a function definition.
    fn check_fn(&self, _details: &FnDetails<'_>, _ctx: &mut LintContext<'_>) {}

    /// Inspect a literal together with the kind of its direct parent.
    fn check_lit(&self, _lit: &syn::Lit, _parent: ParentKind, _ctx: &mut LintContext<'_>) {}
}

/// Per-file state shared with rules during a walk.
#[derive(Debug)]
pub struct LintContext<'a> {
    file: &'a Path,
    code: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    fn new(file: &'a Path, code: &'a str) -> Self {
        Self {
            file,
            code,
            diagnostics: Vec::new(),
        }
    }

    /// Record a violation of `rule` at `span`.
    pub fn report(&mut self, rule: &dyn Lint, kind: &str, span: Span, message: String) {
        let start = span.start();
        self.diagnostics.push(Diagnostic {
            rule_id: rule.rule_id().to_string(),
            rule_name: rule.rule_name().to_string(),
            message,
            kind: kind.to_string(),
            file: self.file.display().to_string(),
            line: start.line,
            column: start.column + 1,
            snippet: short_snippet(self.code, span),
        });
    }
}

/// Tree walker that drives a set of rules over one file.
pub struct Walker<'a> {
    rules: &'a [Box<dyn Lint>],
    ctx: LintContext<'a>,
    parents: Vec<ParentKind>,
}

impl<'a> Walker<'a> {
    /// Create a walker for one file's source text.
    pub fn new(file: &'a Path, code: &'a str, rules: &'a [Box<dyn Lint>]) -> Self {
        Self {
            rules,
            ctx: LintContext::new(file, code),
            parents: Vec::new(),
        }
    }

    /// Consume the walker and return the diagnostics it collected.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.ctx.diagnostics
    }

    fn check_fn_details(&mut self, details: FnDetails<'_>) {
        let rules = self.rules;
        for rule in rules {
            rule.check_fn(&details, &mut self.ctx);
        }
    }

    fn with_parent<F>(&mut self, parent: Option<ParentKind>, walk: F)
    where
        F: FnOnce(&mut Self),
    {
        if let Some(kind) = parent {
            self.parents.push(kind);
        }
        walk(self);
        if parent.is_some() {
            self.parents.pop();
        }
    }
}

/// A parent kind is only recorded when the initializer IS the literal, so
/// that `let x = 1024;` is skipped while `let x = f(1024);` is not.
fn direct_literal(expr: &syn::Expr) -> bool {
    matches!(expr, syn::Expr::Lit(_))
}

impl<'a, 'ast> Visit<'ast> for Walker<'a> {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.check_fn_details(FnDetails {
            name: node.sig.ident.to_string(),
            param_count: count_params(&node.sig),
            body: &node.block,
            span: node.sig.span(),
            is_method: false,
        });
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.check_fn_details(FnDetails {
            name: node.sig.ident.to_string(),
            param_count: count_params(&node.sig),
            body: &node.block,
            span: node.sig.span(),
            is_method: true,
        });
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_local(&mut self, node: &'ast syn::Local) {
        let parent = node
            .init
            .as_ref()
            .filter(|init| direct_literal(&init.expr))
            .map(|_| ParentKind::LetBinding);
        self.with_parent(parent, |walker| syn::visit::visit_local(walker, node));
    }

    fn visit_item_const(&mut self, node: &'ast syn::ItemConst) {
        let parent = direct_literal(&node.expr).then_some(ParentKind::ConstItem);
        self.with_parent(parent, |walker| syn::visit::visit_item_const(walker, node));
    }

    fn visit_impl_item_const(&mut self, node: &'ast syn::ImplItemConst) {
        let parent = direct_literal(&node.expr).then_some(ParentKind::ConstItem);
        self.with_parent(parent, |walker| {
            syn::visit::visit_impl_item_const(walker, node)
        });
    }

    fn visit_item_static(&mut self, node: &'ast syn::ItemStatic) {
        let parent = direct_literal(&node.expr).then_some(ParentKind::StaticItem);
        self.with_parent(parent, |walker| {
            syn::visit::visit_item_static(walker, node)
        });
    }

    fn visit_lit(&mut self, node: &'ast syn::Lit) {
        let parent = self.parents.last().copied().unwrap_or(ParentKind::Other);
        let rules = self.rules;
        for rule in rules {
            rule.check_lit(node, parent, &mut self.ctx);
        }
        syn::visit::visit_lit(self, node);
    }
}

/// Number of parameters in a signature, `self` receivers excluded.
fn count_params(sig: &syn::Signature) -> usize {
    sig.inputs
        .iter()
        .filter(|arg| matches!(arg, syn::FnArg::Typed(_)))
        .count()
}

/// The rule set with default thresholds.
pub fn default_rules() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(FnBodyLength::default()),
        Box::new(FnParamCount::default()),
        Box::new(MagicNumber::default()),
    ]
}

/// Run the rules over a single source file.
pub fn check_file(
    path: &Path,
    cache: &SourceCache,
    rules: &[Box<dyn Lint>],
) -> Result<Vec<Diagnostic>> {
    let code = cache.code_of_file(path)?;
    let file = cache.parse_source(path)?;
    let mut walker = Walker::new(path, &code, rules);
    walker.visit_file(&file);
    Ok(walker.into_diagnostics())
}

/// Run the rules over every source file under `root`.
///
/// Files that fail to read or parse are counted in the summary and logged,
/// without aborting the run.
pub fn check_all(root: &Path, cache: &SourceCache, rules: &[Box<dyn Lint>]) -> Result<Report> {
    let started = Instant::now();
    let mut report = Report::new();
    let (mut passed, mut failed) = (0usize, 0usize);
    for file in cache.source_files_in(root) {
        match check_file(&file, cache, rules) {
            Ok(diagnostics) => {
                passed += 1;
                if !diagnostics.is_empty() {
                    tracing::debug!(
                        file = %file.display(),
                        findings = diagnostics.len(),
                        "lint findings"
                    );
                }
                report.add_file(&file, diagnostics);
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(file = %file.display(), %err, "skipping file");
            }
        }
    }
    report.finish(passed, failed, started.elapsed());
    Ok(report)
}
