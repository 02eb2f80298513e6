//! Reserved-name word lists consumed by the npm rules.
//!
//! Both lists are injected read-only data: newline-delimited names under
//! `data/`, compiled in and materialized into lookup sets on first use.
//! Initialization is idempotent, so concurrent first access from multiple
//! threads is safe without locking; redundant computation produces the
//! same value and no partial state is ever observable.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Fallback when the builtin-module data file is empty.
const DEFAULT_BUILTINS: &[&str] = &["assert", "buffer", "fs", "http", "path", "url", "util"];

/// Fallback when the legacy-name data file is empty.
const DEFAULT_LEGACY: &[&str] = &["JSONStream", "Base64", "EventEmitter"];

/// Names of interpreter/runtime builtin modules.
///
/// The npm rules forbid package names that collide with a core module.
pub fn builtin_modules() -> &'static HashSet<&'static str> {
    static CACHE: OnceLock<HashSet<&'static str>> = OnceLock::new();
    CACHE.get_or_init(|| load(include_str!("../data/node-builtins.txt"), DEFAULT_BUILTINS))
}

/// Package names exempt from modern naming restrictions.
///
/// Packages published before the rules tightened keep their original
/// casing and length; the npm rules skip case folding and the combined
/// length limit for names on this list.
pub fn legacy_names() -> &'static HashSet<&'static str> {
    static CACHE: OnceLock<HashSet<&'static str>> = OnceLock::new();
    CACHE.get_or_init(|| load(include_str!("../data/npm-legacy-names.txt"), DEFAULT_LEGACY))
}

fn load(data: &'static str, fallback: &'static [&'static str]) -> HashSet<&'static str> {
    let names: HashSet<&'static str> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    if names.is_empty() {
        fallback.iter().copied().collect()
    } else {
        names
    }
}
