//! Compiled name filter.
//!
//! `ScanOptions` carries caller-supplied filter lists; `NameFilter` is the
//! case-folded form compiled once per scan call and consulted for every
//! file entry. Matching is name-only: callers pass the bare file name,
//! never a path.

use rustc_hash::FxHashSet;

use crate::config::ScanOptions;

/// Case-insensitive name filter compiled from `ScanOptions`.
#[derive(Debug, Clone)]
pub struct NameFilter {
    prefix: Vec<String>,
    postfix: Vec<String>,
    exclude: FxHashSet<String>,
}

impl NameFilter {
    /// Compile the filter lists, folding every entry to lowercase.
    pub fn compile(options: &ScanOptions) -> Self {
        Self {
            prefix: options.prefix.iter().map(|s| s.to_lowercase()).collect(),
            postfix: options.postfix.iter().map(|s| s.to_lowercase()).collect(),
            exclude: options.exclude.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Whether a bare file name qualifies.
    ///
    /// Empty prefix/postfix lists match everything; `exclude` is evaluated
    /// last and always wins.
    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();

        if !self.prefix.is_empty() && !self.prefix.iter().any(|p| name.starts_with(p.as_str())) {
            return false;
        }
        if !self.postfix.is_empty() && !self.postfix.iter().any(|p| name.ends_with(p.as_str())) {
            return false;
        }
        !self.exclude.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(prefix: &[&str], postfix: &[&str], exclude: &[&str]) -> NameFilter {
        NameFilter::compile(&ScanOptions {
            recursive: false,
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            postfix: postfix.iter().map(|s| s.to_string()).collect(),
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn empty_filters_match_everything() {
        let f = filter(&[], &[], &[]);
        assert!(f.matches("anything.txt"));
        assert!(f.matches("index.js"));
    }

    #[test]
    fn prefix_is_case_insensitive() {
        let f = filter(&["foo"], &[], &[]);
        assert!(f.matches("Foo.js"));
        assert!(f.matches("FOO-bar.js"));
        assert!(!f.matches("bar-foo.js"));
    }

    #[test]
    fn postfix_is_or_matched() {
        let f = filter(&[], &["service.js", "ex.js"], &[]);
        assert!(f.matches("child.Service.JS"));
        assert!(f.matches("demo.ex.js"));
        // Plain ends_with, no extension boundary: "index.js" ends with "ex.js".
        assert!(f.matches("index.js"));
        assert!(!f.matches("main.js"));
    }

    #[test]
    fn prefix_and_postfix_must_both_hold() {
        let f = filter(&["c"], &["service.js"], &[]);
        assert!(f.matches("c-item.service.js"));
        assert!(!f.matches("c-item.ex.js"));
        assert!(!f.matches("item.service.js"));
    }

    #[test]
    fn exclude_always_wins() {
        let f = filter(&["c"], &["service.js"], &["child-2.service.js"]);
        assert!(f.matches("child-1.service.js"));
        assert!(!f.matches("child-2.service.js"));
        assert!(!f.matches("Child-2.Service.js"));
    }

    #[test]
    fn empty_string_prefix_matches_all_names() {
        // Same semantics as the compiled form of a caller passing "".
        let f = filter(&[""], &[], &[]);
        assert!(f.matches("whatever.bin"));
    }
}
