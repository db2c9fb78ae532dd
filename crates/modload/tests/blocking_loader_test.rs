//! Blocking pipeline: discovery counts, filter semantics, and the loader
//! contract on the shared sample tree.

mod common;

use modload::blocking;
use modload::resolvers::JsonResolver;
use modload::{CollectingSink, ScanOptions};

#[test]
fn lists_all_top_level_files() {
    let sample = common::sample_tree();
    let files = blocking::get_all_files(sample.path(), &ScanOptions::default()).unwrap();
    assert_eq!(files.len(), 5);
}

#[test]
fn lists_all_files_recursively() {
    let sample = common::sample_tree();
    let files = blocking::get_all_files(sample.path(), &ScanOptions::recursive()).unwrap();
    assert_eq!(files.len(), 8);

    let forced = blocking::get_all_files_recursive(sample.path()).unwrap();
    assert_eq!(forced, files);
}

#[test]
fn count_matches_independent_listing() {
    let sample = common::sample_tree();
    let expected = std::fs::read_dir(sample.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .count();

    let files = blocking::get_all_files(sample.path(), &ScanOptions::default()).unwrap();
    assert_eq!(files.len(), expected);
}

#[test]
fn non_recursive_never_descends() {
    let sample = common::sample_tree();
    let files = blocking::get_all_files(sample.path(), &ScanOptions::default()).unwrap();
    assert!(files.iter().all(|p| p.parent() == Some(sample.path())));
}

#[test]
fn scan_is_idempotent() {
    let sample = common::sample_tree();
    let options = ScanOptions::recursive();
    let first = blocking::get_all_files(sample.path(), &options).unwrap();
    let second = blocking::get_all_files(sample.path(), &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn loads_top_level_modules() {
    let sample = common::sample_tree();
    let units =
        blocking::load_modules(sample.path(), &ScanOptions::default(), &JsonResolver).unwrap();
    assert_eq!(units.len(), 3);
    for unit in &units {
        assert!(unit.get("data").is_some());
    }
}

#[test]
fn loads_modules_recursively() {
    let sample = common::sample_tree();
    let units =
        blocking::load_modules(sample.path(), &ScanOptions::recursive(), &JsonResolver).unwrap();
    assert_eq!(units.len(), 6);
    for unit in &units {
        assert!(unit.get("data").is_some());
    }
}

#[test]
fn invalid_directory_fails_with_marker() {
    let err = blocking::load_modules("invalid dir", &ScanOptions::default(), &JsonResolver)
        .unwrap_err();
    assert!(err.to_string().contains("INVALID PATH"));
}

#[test]
fn prefix_filter_restricts_loaded_modules() {
    let sample = common::sample_tree();
    let options = ScanOptions {
        prefix: vec!["c-".to_string(), "i".to_string()],
        ..Default::default()
    };
    let units = blocking::load_modules(sample.path(), &options, &JsonResolver).unwrap();
    assert_eq!(units.len(), 2);
    for unit in &units {
        assert!(unit.get("data").is_some());
    }
}

#[test]
fn postfix_filter_recursive() {
    let sample = common::sample_tree();
    let options = ScanOptions {
        recursive: true,
        postfix: vec!["service.js".to_string(), "ex.js".to_string()],
        ..Default::default()
    };
    let units = blocking::load_modules(sample.path(), &options, &JsonResolver).unwrap();
    assert_eq!(units.len(), 4);

    // Plain ends_with: both index.js modules match "ex.js", alongside the
    // two *.service.js modules.
    let mut names: Vec<&str> = units
        .iter()
        .map(|u| u["data"]["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["c-item", "child-2", "nested-index", "root-index"]);
}

#[test]
fn exclude_drops_every_file_with_that_name() {
    let sample = common::sample_tree();
    let options = ScanOptions {
        recursive: true,
        exclude: vec!["index.js".to_string()],
        ..Default::default()
    };
    // Both index.js files (top-level and nested/) are gone; the two
    // non-module files still fail to load.
    let units = blocking::load_modules(sample.path(), &options, &JsonResolver).unwrap();
    assert_eq!(units.len(), 4);
}

#[test]
fn combined_prefix_postfix_exclude() {
    let sample = common::sample_tree();
    let options = ScanOptions {
        recursive: true,
        prefix: vec!["c".to_string()],
        postfix: vec!["service.js".to_string()],
        exclude: vec!["child-2.service.js".to_string()],
    };
    let units = blocking::load_modules(sample.path(), &options, &JsonResolver).unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0]["data"]["name"], "c-item");
}

#[test]
fn prefix_matching_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Foo.js"), r#"{ "data": 1 }"#).unwrap();

    let options = ScanOptions {
        prefix: vec!["foo".to_string()],
        ..Default::default()
    };
    let files = blocking::get_all_files(dir.path(), &options).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn load_failures_reach_the_sink_but_not_the_result() {
    let sample = common::sample_tree();
    let sink = CollectingSink::new();
    let units = blocking::load_modules_with_sink(
        sample.path(),
        &ScanOptions::recursive(),
        &JsonResolver,
        &sink,
    )
    .unwrap();

    assert_eq!(units.len(), 6);
    assert_eq!(sink.failure_count(), 2);
    let mut dropped: Vec<String> = sink
        .failures()
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    dropped.sort();
    assert_eq!(dropped, vec!["data.txt", "readme.md"]);
}

#[test]
fn no_matches_is_empty_not_an_error() {
    let sample = common::sample_tree();
    let options = ScanOptions {
        prefix: vec!["zzz".to_string()],
        ..Default::default()
    };
    let units = blocking::load_modules(sample.path(), &options, &JsonResolver).unwrap();
    assert!(units.is_empty());
}
