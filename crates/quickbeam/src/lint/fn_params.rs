//! Function parameter count rule

use super::{FnDetails, Lint, LintContext};

/// Default maximum number of parameters in a function signature.
pub const DEFAULT_MAX_PARAMS: usize = 4;

/// Reports functions taking more parameters than allowed.
///
/// `self` receivers are not counted. A limit of `0` disables the rule.
#[derive(Debug, Clone)]
pub struct FnParamCount {
    max_params: usize,
}

impl FnParamCount {
    /// Create the rule with a parameter limit.
    pub fn new(max_params: usize) -> Self {
        Self { max_params }
    }
}

impl Default for FnParamCount {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PARAMS)
    }
}

impl Lint for FnParamCount {
    fn rule_id(&self) -> &'static str {
        "RS-000001"
    }

    fn rule_name(&self) -> &'static str {
        "too_many_fn_params"
    }

    fn check_fn(&self, details: &FnDetails<'_>, ctx: &mut LintContext<'_>) {
        if self.max_params == 0 {
            return;
        }
        if details.param_count > self.max_params {
            let kind = if details.is_method { "method" } else { "function" };
            ctx.report(
                self,
                kind,
                details.span,
                format!(
                    "too many parameters in `{}`: {} found",
                    details.name, details.param_count
                ),
            );
        }
    }
}
