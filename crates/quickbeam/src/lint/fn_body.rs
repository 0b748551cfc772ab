//! Function body length rule

use super::{FnDetails, Lint, LintContext};

/// Default maximum number of lines in a function body.
pub const DEFAULT_MAX_FN_LINES: usize = 16;

/// Reports function bodies spanning more lines than allowed.
///
/// The length of a body is the line distance between its opening and
/// closing braces. A limit of `0` disables the rule.
#[derive(Debug, Clone)]
pub struct FnBodyLength {
    max_lines: usize,
}

impl FnBodyLength {
    /// Create the rule with a line limit.
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }
}

impl Default for FnBodyLength {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FN_LINES)
    }
}

impl Lint for FnBodyLength {
    fn rule_id(&self) -> &'static str {
        "RS-000000"
    }

    fn rule_name(&self) -> &'static str {
        "too_long_fn_body"
    }

    fn check_fn(&self, details: &FnDetails<'_>, ctx: &mut LintContext<'_>) {
        if self.max_lines == 0 {
            return;
        }
        let braces = details.body.brace_token.span;
        let span = braces.join();
        let lines = braces
            .close()
            .end()
            .line
            .saturating_sub(braces.open().start().line);
        if lines > self.max_lines {
            ctx.report(
                self,
                "block",
                span,
                format!(
                    "body of `{}` is too long: {} lines",
                    details.name, lines
                ),
            );
        }
    }
}
