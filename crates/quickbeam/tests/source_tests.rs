use std::fs;
use std::path::PathBuf;

use quickbeam::{QuickbeamError, SourceCache};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quickbeam-src-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("nested")).unwrap();
    dir
}

#[test]
fn test_source_files_in_walks_nested_dirs_sorted() {
    let dir = scratch_dir("walk");
    fs::write(dir.join("b.rs"), "fn b() {}\n").unwrap();
    fs::write(dir.join("a.rs"), "fn a() {}\n").unwrap();
    fs::write(dir.join("nested").join("c.rs"), "fn c() {}\n").unwrap();
    fs::write(dir.join("notes.txt"), "not source\n").unwrap();

    let cache = SourceCache::new();
    let files = cache.source_files_in(&dir);
    assert_eq!(files.len(), 3);
    assert_eq!(files[0].file_name().unwrap(), "a.rs");
    assert_eq!(files[1].file_name().unwrap(), "b.rs");
    assert_eq!(files[2].file_name().unwrap(), "c.rs");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_code_of_file_reads_and_caches() {
    let dir = scratch_dir("read");
    let path = dir.join("a.rs");
    fs::write(&path, "fn main() {}\n").unwrap();

    let cache = SourceCache::new();
    let first = cache.code_of_file(&path).unwrap();
    assert_eq!(&*first, "fn main() {}\n");
    assert_eq!(cache.cached_files(), 1);

    // second read is served from cache, even if the file changes underneath
    fs::write(&path, "fn changed() {}\n").unwrap();
    let second = cache.code_of_file(&path).unwrap();
    assert_eq!(&*second, "fn main() {}\n");
    assert_eq!(cache.cached_files(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_code_segment_and_out_of_range() {
    let dir = scratch_dir("segment");
    let path = dir.join("a.rs");
    fs::write(&path, "fn main() {}\n").unwrap();

    let cache = SourceCache::new();
    assert_eq!(cache.code_segment(&path, 3, 4).unwrap(), "main");
    // length clamps to the end of the file
    assert_eq!(cache.code_segment(&path, 10, 100).unwrap(), "{}\n");

    let err = cache.code_segment(&path, 500, 4).unwrap_err();
    assert!(matches!(err, QuickbeamError::OutOfRange { offset: 500, .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_eviction_keeps_cache_at_capacity() {
    let dir = scratch_dir("evict");
    for name in ["a.rs", "b.rs", "c.rs"] {
        fs::write(dir.join(name), "fn f() {}\n").unwrap();
    }

    let cache = SourceCache::with_capacity(2);
    for file in cache.source_files_in(&dir) {
        cache.code_of_file(&file).unwrap();
    }
    assert!(cache.cached_files() <= 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_non_source_paths_are_rejected() {
    let dir = scratch_dir("reject");
    let path = dir.join("notes.txt");
    fs::write(&path, "not source\n").unwrap();

    let cache = SourceCache::new();
    let err = cache.code_of_file(&path).unwrap_err();
    assert!(matches!(err, QuickbeamError::NotSourceFile { .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_source_reports_syntax_errors() {
    let dir = scratch_dir("parse");
    let good = dir.join("good.rs");
    let bad = dir.join("bad.rs");
    fs::write(&good, "fn main() {}\n").unwrap();
    fs::write(&bad, "fn broken( {\n").unwrap();

    let cache = SourceCache::new();
    assert!(cache.parse_source(&good).is_ok());
    let err = cache.parse_source(&bad).unwrap_err();
    assert!(matches!(err, QuickbeamError::Parse { .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_invalid_utf8_is_replaced_not_fatal() {
    let dir = scratch_dir("utf8");
    let path = dir.join("weird.rs");
    fs::write(&path, [0x66, 0x6e, 0x20, 0xff, 0xfe]).unwrap();

    let cache = SourceCache::new();
    let code = cache.code_of_file(&path).unwrap();
    assert!(code.starts_with("fn "));
    assert!(code.contains('\u{fffd}'));

    let _ = fs::remove_dir_all(&dir);
}
