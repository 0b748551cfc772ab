use std::fs;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

use quickbeam::lint::{check_all, default_rules};
use quickbeam::{Diagnostic, FnBodyLength, FnParamCount, Lint, MagicNumber, SourceCache, Walker};

// Helper to lint an inline snippet with a chosen rule set
fn lint(code: &str, rules: Vec<Box<dyn Lint>>) -> Vec<Diagnostic> {
    let file = syn::parse_file(code).expect("parse failed");
    let mut walker = Walker::new(Path::new("snippet.rs"), code, &rules);
    walker.visit_file(&file);
    walker.into_diagnostics()
}

fn magic_only() -> Vec<Box<dyn Lint>> {
    vec![Box::new(MagicNumber::default())]
}

// ═══════════════════════════════════════════════════════════════════════
// Parameter Count
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_param_count_at_limit_passes() {
    let code = "fn f(a: i32, b: i32, c: i32, d: i32) {}";
    let found = lint(code, vec![Box::new(FnParamCount::new(4))]);
    assert!(found.is_empty());
}

#[test]
fn test_param_count_over_limit_is_reported() {
    let code = "fn f(a: i32, b: i32, c: i32, d: i32, e: i32) {}";
    let found = lint(code, vec![Box::new(FnParamCount::new(4))]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule_id, "RS-000001");
    assert_eq!(found[0].rule_name, "too_many_fn_params");
    assert!(found[0].message.contains("5 found"));
}

#[test]
fn test_param_count_ignores_self_receiver() {
    let code = "struct S;\nimpl S {\n    fn m(&mut self, a: i32, b: i32) {}\n}";
    let found = lint(code, vec![Box::new(FnParamCount::new(2))]);
    assert!(found.is_empty());
}

#[test]
fn test_param_count_checks_methods() {
    let code = "struct S;\nimpl S {\n    fn m(&self, a: i32, b: i32, c: i32) {}\n}";
    let found = lint(code, vec![Box::new(FnParamCount::new(2))]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, "method");
}

#[test]
fn test_param_count_zero_disables() {
    let code = "fn f(a: i32, b: i32, c: i32, d: i32, e: i32, g: i32) {}";
    assert!(lint(code, vec![Box::new(FnParamCount::new(0))]).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Body Length
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_body_length_at_limit_passes() {
    let code = "fn f() {\n    1;\n    2;\n}\n";
    assert!(lint(code, vec![Box::new(FnBodyLength::new(3))]).is_empty());
}

#[test]
fn test_body_length_over_limit_is_reported() {
    let code = "fn f() {\n    1;\n    2;\n}\n";
    let found = lint(code, vec![Box::new(FnBodyLength::new(2))]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule_id, "RS-000000");
    assert!(found[0].message.contains("3 lines"));
}

#[test]
fn test_body_length_zero_disables() {
    let code = "fn f() {\n    1;\n    2;\n    3;\n    4;\n}\n";
    assert!(lint(code, vec![Box::new(FnBodyLength::new(0))]).is_empty());
}

#[test]
fn test_body_length_checks_methods() {
    let code = "struct S;\nimpl S {\n    fn m(&self) {\n        1;\n        2;\n    }\n}";
    let found = lint(code, vec![Box::new(FnBodyLength::new(2))]);
    assert_eq!(found.len(), 1);
    assert!(found[0].message.contains("`m`"));
}

// ═══════════════════════════════════════════════════════════════════════
// Magic Numbers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_magic_number_in_expression_is_reported() {
    let found = lint("fn f() -> i32 {\n    1234\n}\n", magic_only());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule_id, "RS-000002");
    assert_eq!(found[0].kind, "integer literal");
    assert_eq!(found[0].line, 2);
    assert_eq!(found[0].column, 5);
    assert_eq!(found[0].snippet, "1234");
}

#[test]
fn test_magic_number_skips_let_initializer() {
    assert!(lint("fn f() {\n    let x = 1234;\n}\n", magic_only()).is_empty());
}

#[test]
fn test_magic_number_skips_const_and_static() {
    assert!(lint("const LIMIT: i32 = 77;", magic_only()).is_empty());
    assert!(lint("static SEED: i64 = 77;", magic_only()).is_empty());
    assert!(lint("struct S;\nimpl S {\n    const LIMIT: i32 = 77;\n}", magic_only()).is_empty());
}

#[test]
fn test_magic_number_in_nested_initializer_is_reported() {
    // only a literal that IS the initializer gets a name
    let found = lint("fn f() {\n    let x = g(1234);\n}\nfn g(v: i32) -> i32 { v }\n", magic_only());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].snippet, "1234");
}

#[test]
fn test_magic_number_ignores_small_and_round_values() {
    let code = "fn f() -> i32 {\n    9 + 50 + 4096 + 3072\n}\n";
    assert!(lint(code, magic_only()).is_empty());
}

#[test]
fn test_magic_float_is_reported() {
    let found = lint("fn f(z: f64) -> bool {\n    z >= 123.45\n}\n", magic_only());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, "float literal");
}

#[test]
fn test_small_float_is_ignored() {
    assert!(lint("fn f(z: f64) -> bool {\n    z >= 2.5\n}\n", magic_only()).is_empty());
}

#[test]
fn test_extra_allowed_value_is_ignored() {
    let code = "fn f() -> i32 {\n    255\n}\n";
    assert_eq!(lint(code, magic_only()).len(), 1);
    let relaxed: Vec<Box<dyn Lint>> = vec![Box::new(MagicNumber::new([255]))];
    assert!(lint(code, relaxed).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Directory Runs
// ═══════════════════════════════════════════════════════════════════════

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quickbeam-lint-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_check_all_counts_parse_failures() {
    let dir = scratch_dir("parse-failures");
    fs::write(dir.join("good.rs"), "fn f() -> i32 {\n    1234\n}\n").unwrap();
    fs::write(dir.join("bad.rs"), "fn broken( {\n").unwrap();

    let cache = SourceCache::new();
    let report = check_all(&dir, &cache, &default_rules()).unwrap();
    assert_eq!(report.summary().passed, 1);
    assert_eq!(report.summary().failed, 1);
    assert_eq!(report.total(), 1);
    assert_eq!(report.summary().pass_rate(), 50.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_default_rules_cover_all_three() {
    let ids: Vec<_> = default_rules().iter().map(|r| r.rule_id()).collect();
    assert_eq!(ids, vec!["RS-000000", "RS-000001", "RS-000002"]);
}
