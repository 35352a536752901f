//! Boundary-driven word segmentation.
//!
//! All four case converters share this single pipeline: the input is split
//! into lowercase tokens at word boundaries, and the target convention only
//! decides how the tokens are rejoined.  A boundary is one of
//!
//! * a non-alphanumeric character (whitespace, punctuation, `-`, `_`, …),
//!   which is dropped,
//! * a lowercase→uppercase transition (`helloWorld`),
//! * the tail of an uppercase run followed by lowercase (`HTTPServer` splits
//!   before `Server`),
//! * a letter↔digit transition (`component2Test`).
//!
//! Because the output of every converter consists solely of token characters
//! and the convention's separator, re-segmenting converted text yields the
//! same tokens again: idempotence of the converters falls out of the
//! pipeline instead of being a special case.
//!
//! ```rust
//! use textforge_case::segment::segment;
//!
//! assert_eq!(segment("   Hello, World!   "), vec!["hello", "world"]);
//! assert_eq!(segment("HelloWorld"), vec!["hello", "world"]);
//! assert_eq!(segment("hello_world"), vec!["hello", "world"]);
//! ```

/// Split `input` into lowercase word tokens.
pub fn segment(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut tokens, &mut current);
            continue;
        }

        // `current` non-empty implies `chars[i - 1]` is the previous token
        // character: separators always flush.
        if !current.is_empty() && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            flush(&mut tokens, &mut current);
        }

        current.extend(c.to_lowercase());
    }

    flush(&mut tokens, &mut current);
    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

fn is_boundary(prev: char, current: char, next: Option<char>) -> bool {
    if prev.is_lowercase() && current.is_uppercase() {
        return true;
    }

    // An uppercase run ends one character before its trailing lowercase:
    // `HTTPServer` → `http`, `server`.
    if prev.is_uppercase()
        && current.is_uppercase()
        && next.is_some_and(|n| n.is_lowercase())
    {
        return true;
    }

    (prev.is_alphabetic() && current.is_numeric()) || (prev.is_numeric() && current.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separators() {
        assert_eq!(segment("hello world"), vec!["hello", "world"]);
        assert_eq!(segment("hello_world"), vec!["hello", "world"]);
        assert_eq!(segment("hello-world"), vec!["hello", "world"]);
        assert_eq!(segment("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn splits_on_camel_boundaries() {
        assert_eq!(segment("helloWorld"), vec!["hello", "world"]);
        assert_eq!(segment("HelloWorld"), vec!["hello", "world"]);
        assert_eq!(segment("HTTPServer"), vec!["http", "server"]);
    }

    #[test]
    fn splits_on_digit_boundaries() {
        assert_eq!(segment("component2Test"), vec!["component", "2", "test"]);
        assert_eq!(segment("utf8"), vec!["utf", "8"]);
    }

    #[test]
    fn ignores_surrounding_noise() {
        assert_eq!(segment("   Hello, World!   "), vec!["hello", "world"]);
        assert_eq!(segment(""), Vec::<String>::new());
        assert_eq!(segment("---"), Vec::<String>::new());
    }
}
