//! Word extraction with a default or caller-supplied pattern.
//!
//! The default rule keeps maximal runs of non-whitespace, non-punctuation
//! characters.  Callers who need something else pass a pre-compiled
//! [`Regex`], the same way other pattern-driven code in this workspace takes
//! patterns: compiling belongs to the caller, matching belongs here.
//!
//! ```rust
//! use regex::Regex;
//! use textforge_case::words::{words, words_matching};
//!
//! assert_eq!(words("hello world"), vec!["hello", "world"]);
//! assert_eq!(words("hello & world"), vec!["hello", "world"]);
//!
//! let pattern = Regex::new(r"[^, ]+").unwrap();
//! assert_eq!(words_matching("hello & world", &pattern), vec!["hello", "&", "world"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static DEFAULT_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s\p{P}]+").expect("default word pattern is valid"));

/// Extract word tokens using the default rule.
pub fn words(input: &str) -> Vec<String> {
    words_matching(input, &DEFAULT_WORD_PATTERN)
}

/// Extract every match of `pattern`, in order.
pub fn words_matching(input: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}
