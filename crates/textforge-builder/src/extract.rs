//! Extractors: slice the materialized string around search markers.
//!
//! Each extractor materializes the content, looks for a marker and replaces
//! the fragment sequence with the selected slice.  A marker that does not
//! occur leaves the builder unchanged, so extractor chains degrade gracefully
//! instead of erroring:
//!
//! ```rust
//! use textforge_builder::Text;
//!
//! assert_eq!(Text::make("hello").before("l"), "he");
//! assert_eq!(Text::make("hello").before("x"), "hello");
//! ```

use crate::text::Text;

impl Text {
    /// Keep everything before the *first* occurrence of `search`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").before("l"), "he");
    /// assert_eq!(Text::make("aabbcc").before("b"), "aa");
    /// ```
    pub fn before(self, search: &str) -> Self {
        let content = self.to_string();
        match content.find(search) {
            Some(index) => self.with_content(content[..index].to_string()),
            None => self,
        }
    }

    /// Keep everything before the *last* occurrence of `search`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").before_last("l"), "hel");
    /// assert_eq!(Text::make("aabbcc").before_last("b"), "aab");
    /// ```
    pub fn before_last(self, search: &str) -> Self {
        let content = self.to_string();
        match content.rfind(search) {
            Some(index) => self.with_content(content[..index].to_string()),
            None => self,
        }
    }

    /// Keep everything after the *first* occurrence of `search`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").after("l"), "lo");
    /// assert_eq!(Text::make("aabbcc").after("b"), "bcc");
    /// ```
    pub fn after(self, search: &str) -> Self {
        let content = self.to_string();
        match content.find(search) {
            Some(index) => self.with_content(content[index + search.len()..].to_string()),
            None => self,
        }
    }

    /// Keep everything after the *last* occurrence of `search`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").after_last("l"), "o");
    /// assert_eq!(Text::make("aabbcc").after_last("b"), "cc");
    /// ```
    pub fn after_last(self, search: &str) -> Self {
        let content = self.to_string();
        match content.rfind(search) {
            Some(index) => self.with_content(content[index + search.len()..].to_string()),
            None => self,
        }
    }

    /// [`Text::before`] matching case-insensitively.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello World").before_ignore_case("WORLD"), "Hello ");
    /// ```
    pub fn before_ignore_case(self, search: &str) -> Self {
        let content = self.to_string();
        match find_ignore_case(&content, search) {
            Some((start, _)) => self.with_content(content[..start].to_string()),
            None => self,
        }
    }

    /// [`Text::after`] matching case-insensitively.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello World").after_ignore_case("HELLO"), " World");
    /// ```
    pub fn after_ignore_case(self, search: &str) -> Self {
        let content = self.to_string();
        match find_ignore_case(&content, search) {
            Some((_, end)) => self.with_content(content[end..].to_string()),
            None => self,
        }
    }

    /// Keep the widest slice between `start` and `end`: after the first
    /// `start`, before the last `end`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").between("h", "o"), "ell");
    /// assert_eq!(Text::make("aabbcc").between("a", "c"), "abbc");
    /// ```
    ///
    /// A missing marker is skipped, same as the underlying extractors:
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").between("h", "p"), "ello");
    /// assert_eq!(Text::make("hello").between("p", "e"), "h");
    /// ```
    pub fn between(self, start: &str, end: &str) -> Self {
        self.after(start).before_last(end)
    }

    /// Keep the narrowest slice between `start` and `end`: after the last
    /// `start`, before the first `end`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("aabbcc").inside("a", "c"), "bb");
    /// assert_eq!(Text::make("{{hello world}}").inside("{", "}"), "hello world");
    /// ```
    pub fn inside(self, start: &str, end: &str) -> Self {
        self.after_last(start).before(end)
    }

    /// Ensure the content ends with `value`, appending it when absent.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello").finish("!"), "Hello!");
    /// assert_eq!(Text::make("Hello!").finish("!"), "Hello!");
    /// ```
    pub fn finish(self, value: &str) -> Self {
        let content = self.to_string();
        if value.is_empty() || content.ends_with(value) {
            self
        } else {
            self.with_content(content + value)
        }
    }

    /// Ensure the content starts with exactly one run of `value`, collapsing
    /// repeated leading occurrences.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("example.com").start("https://"), "https://example.com");
    /// assert_eq!(Text::make("https://https://example.com").start("https://"), "https://example.com");
    /// ```
    pub fn start(self, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        let content = self.to_string();
        let mut rest = content.as_str();
        while let Some(stripped) = rest.strip_prefix(value) {
            rest = stripped;
        }
        self.with_content(format!("{value}{rest}"))
    }
}

/// Case-insensitive search over the Unicode-lowercased forms, returning the
/// matched byte range of the *original* string.  A match never splits a
/// character of the original, even when lowercasing expands it.
fn find_ignore_case(content: &str, search: &str) -> Option<(usize, usize)> {
    if search.is_empty() {
        return Some((0, 0));
    }
    let needle: Vec<char> = search.chars().flat_map(char::to_lowercase).collect();
    content
        .char_indices()
        .find_map(|(start, _)| match_at(content, start, &needle).map(|end| (start, end)))
}

fn match_at(content: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut remaining = needle.iter();
    for (offset, current) in content[start..].char_indices() {
        for folded in current.to_lowercase() {
            match remaining.next() {
                Some(&expected) if folded == expected => {}
                _ => return None,
            }
        }
        if remaining.len() == 0 {
            return Some(start + offset + current.len_utf8());
        }
    }
    None
}
