//! Magic number rule

use super::{Lint, LintContext, ParentKind};

/// Numbers that are never treated as magic, on top of the built-in checks.
pub const DEFAULT_ALLOWED: [i64; 9] = [16, 32, 64, 128, 256, 512, 1024, 2048, 4096];

/// Reports bare numeric literals used outside initializer position.
///
/// A literal is skipped when it is the direct initializer of a `let`,
/// `const` or `static`, since that is exactly how a magic number is given
/// a name. Small values, round values and allow-listed values are never
/// reported:
///
/// * integers with `|v| < 10`, `v % 10 == 0` or `v % 1024 == 0`;
/// * floats with `|v| < 10.0`;
/// * any value whose magnitude is on the allow list.
#[derive(Debug, Clone)]
pub struct MagicNumber {
    allowed: Vec<i64>,
}

impl MagicNumber {
    /// Create the rule with extra allowed values on top of the defaults.
    pub fn new(extra_allowed: impl IntoIterator<Item = i64>) -> Self {
        let mut allowed = DEFAULT_ALLOWED.to_vec();
        allowed.extend(extra_allowed);
        Self { allowed }
    }

    fn is_ignorable_int(&self, value: i64) -> bool {
        value.abs() < 10
            || self.allowed.contains(&value)
            || self.allowed.contains(&-value)
            || value % 10 == 0
            || value % 1024 == 0
    }

    fn is_ignorable_float(&self, value: f64) -> bool {
        value.abs() < 10.0
            || self
                .allowed
                .iter()
                .any(|&a| a as f64 == value || a as f64 == -value)
    }
}

impl Default for MagicNumber {
    fn default() -> Self {
        Self::new([])
    }
}

impl Lint for MagicNumber {
    fn rule_id(&self) -> &'static str {
        "RS-000002"
    }

    fn rule_name(&self) -> &'static str {
        "magic_number_use"
    }

    fn check_lit(&self, lit: &syn::Lit, parent: ParentKind, ctx: &mut LintContext<'_>) {
        if parent.is_initializer() {
            return;
        }
        match lit {
            syn::Lit::Int(int) => {
                let Ok(value) = int.base10_parse::<i64>() else {
                    return;
                };
                if self.is_ignorable_int(value) {
                    return;
                }
                ctx.report(
                    self,
                    "integer literal",
                    lit.span(),
                    format!("magic number {value} should not be used"),
                );
            }
            syn::Lit::Float(float) => {
                let Ok(value) = float.base10_parse::<f64>() else {
                    return;
                };
                if self.is_ignorable_float(value) {
                    return;
                }
                ctx.report(
                    self,
                    "float literal",
                    lit.span(),
                    format!("magic number {value} should not be used"),
                );
            }
            _ => {}
        }
    }
}
