use std::path::{Path, PathBuf};

use quickbeam::lint::{check_all, check_file, default_rules};
use quickbeam::{dump_ast, SourceCache};

fn demo_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_hello_demo_has_one_magic_float() {
    let cache = SourceCache::new();
    let found = check_file(&demo_path("hello.rs"), &cache, &default_rules()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule_id, "RS-000002");
    assert_eq!(found[0].rule_name, "magic_number_use");
    assert_eq!(found[0].kind, "float literal");
    assert_eq!(found[0].snippet, "100.0");
    assert_eq!(found[0].line, 13);
}

#[test]
fn test_point_demo_is_clean() {
    let cache = SourceCache::new();
    let found = check_file(&demo_path("point.rs"), &cache, &default_rules()).unwrap();
    assert!(found.is_empty(), "unexpected findings: {found:?}");
}

#[test]
fn test_check_all_over_demo_dir() {
    let cache = SourceCache::new();
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let report = check_all(&demos, &cache, &default_rules()).unwrap();
    assert_eq!(report.summary().passed, 2);
    assert_eq!(report.summary().failed, 0);
    assert_eq!(report.summary().pass_rate(), 100.0);
    assert_eq!(report.total(), 1);
}

#[test]
fn test_hello_demo_ast_dump() {
    let cache = SourceCache::new();
    let root = dump_ast(&demo_path("hello.rs"), &cache).unwrap();
    assert_eq!(root.kind, "file");
    let kinds: Vec<_> = root.children.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec!["constant", "function", "function", "function"]);
    // every function body was descended into
    assert!(root.node_count() > 10);
}
