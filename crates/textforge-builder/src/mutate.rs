//! Mutators: fluent operations on the fragment sequence itself.
//!
//! Everything in this module appends, prepends or repeats fragments without
//! materializing the builder (except where the empty-content rule of the
//! line splices requires a check).  All methods consume `self` and return it
//! for chaining.

use textforge_core::fragment::{Fragment, IntoFragments};

use crate::text::Text;

const NEWLINE: &str = "\n";

impl Text {
    /// Coerce and push inputs after the existing fragments.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hel").append("lo!"), "Hello!");
    /// ```
    pub fn append(mut self, input: impl IntoFragments) -> Self {
        self.extend_fragments(input.into_fragments());
        self
    }

    /// Coerce and insert inputs before the existing fragments, preserving
    /// the relative order of the inputs themselves.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("world").prepend("Hello "), "Hello world");
    /// assert_eq!(Text::make("c").prepend(("a", "b")), "abc");
    /// ```
    pub fn prepend(mut self, input: impl IntoFragments) -> Self {
        self.splice_front(input.into_fragments());
        self
    }

    /// String-API alias for [`Text::append`].
    pub fn concat(self, input: impl IntoFragments) -> Self {
        self.append(input)
    }

    /// Append one line; see [`Text::append_lines`].
    pub fn append_line(self, input: impl IntoFragments) -> Self {
        self.append_lines(input)
    }

    /// Append lines, separated by a newline from the existing content and
    /// joined by newlines among themselves.  On empty content no leading
    /// separator is added.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(
    ///     Text::make("Line 1").append_lines(("Line 2", "Line 3")),
    ///     "Line 1\nLine 2\nLine 3"
    /// );
    /// assert_eq!(Text::new().append_lines("Line 1"), "Line 1");
    /// ```
    pub fn append_lines(mut self, input: impl IntoFragments) -> Self {
        let lines = input.into_fragments();
        if lines.is_empty() {
            return self;
        }

        if !self.is_empty() {
            self.push_fragment(NEWLINE);
        }
        self.extend_fragments(join_with_newlines(lines));
        self
    }

    /// Prepend one line; see [`Text::prepend_lines`].
    pub fn prepend_line(self, input: impl IntoFragments) -> Self {
        self.prepend_lines(input)
    }

    /// Prepend lines, separated by a newline from the existing content and
    /// joined by newlines among themselves.  On empty content no trailing
    /// separator is added.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(
    ///     Text::make("Line 3").prepend_lines(("Line 1", "Line 2")),
    ///     "Line 1\nLine 2\nLine 3"
    /// );
    /// assert_eq!(Text::new().prepend_lines("Line 1"), "Line 1");
    /// ```
    pub fn prepend_lines(mut self, input: impl IntoFragments) -> Self {
        let lines = input.into_fragments();
        if lines.is_empty() {
            return self;
        }

        let mut head = join_with_newlines(lines);
        if !self.is_empty() {
            head.push(NEWLINE.to_string());
        }
        self.splice_front(head);
        self
    }

    /// Append a single space character.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello").space().append("!"), "Hello !");
    /// ```
    pub fn space(self) -> Self {
        self.spaces(1)
    }

    /// Append `max(count, 1)` space characters, one fragment each.
    pub fn spaces(mut self, count: usize) -> Self {
        for _ in 0..count.max(1) {
            self.push_fragment(" ");
        }
        self
    }

    /// Append a single newline fragment.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Line 1").nl().append("Line 2"), "Line 1\nLine 2");
    /// ```
    pub fn nl(mut self) -> Self {
        self.push_fragment(NEWLINE);
        self
    }

    /// Append `value` repeated `count` times, each occurrence as a separate
    /// append.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::new().times("a", 3), "aaa");
    /// ```
    pub fn times(mut self, value: impl IntoFragments, count: usize) -> Self {
        let fragments = value.into_fragments();
        for _ in 0..count {
            self.extend_fragments(fragments.clone());
        }
        self
    }

    /// [`Text::append`], but only when `condition` holds.
    pub fn append_if(self, condition: bool, input: impl IntoFragments) -> Self {
        if condition { self.append(input) } else { self }
    }

    /// [`Text::prepend`], but only when `condition` holds.
    pub fn prepend_if(self, condition: bool, input: impl IntoFragments) -> Self {
        if condition { self.prepend(input) } else { self }
    }

    /// [`Text::append_lines`], but only when `condition` holds.  Follows the
    /// same no-separator-on-empty-content rule.
    pub fn line_if(self, condition: bool, input: impl IntoFragments) -> Self {
        if condition { self.append_lines(input) } else { self }
    }

    /// Iterate over the materialized string character by character, purely
    /// for side effects.  The callback receives each character as an owned
    /// single-character builder, its zero-based index, and the full array of
    /// single-character builders; the content is left untouched no matter
    /// what the callback does.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// let mut seen = String::new();
    /// let text = Text::make("Hello").each(|c, _, _| seen.push_str(&c.upper().to_string()));
    /// assert_eq!(text, "Hello");
    /// assert_eq!(seen, "HELLO");
    /// ```
    pub fn each<F>(self, mut callback: F) -> Self
    where
        F: FnMut(Text, usize, &[Text]),
    {
        let units = self.char_units();
        for (index, unit) in units.iter().enumerate() {
            callback(unit.clone(), index, &units);
        }
        self
    }

    /// Map the materialized string character by character and replace the
    /// content with the concatenated results, in index order.
    ///
    /// The callback sees the *original* array of single-character builders,
    /// never the in-progress result, so it may inspect neighbors ("is this
    /// the last character") without affecting its own enumeration:
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// let spaced = Text::make("Hello")
    ///     .map(|c, index, all| c.upper().append_if(index < all.len() - 1, " "));
    /// assert_eq!(spaced, "H E L L O");
    /// ```
    pub fn map<F, R>(mut self, mut callback: F) -> Self
    where
        F: FnMut(Text, usize, &[Text]) -> R,
        R: IntoFragments,
    {
        let units = self.char_units();
        let mut fragments: Vec<Fragment> = Vec::with_capacity(units.len());
        for (index, unit) in units.iter().enumerate() {
            fragments.extend(callback(unit.clone(), index, &units).into_fragments());
        }
        self.set_fragments(fragments);
        self
    }

    fn char_units(&self) -> Vec<Text> {
        self.to_string().chars().map(Text::from).collect()
    }
}

fn join_with_newlines(lines: Vec<Fragment>) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            fragments.push(NEWLINE.to_string());
        }
        fragments.push(line);
    }
    fragments
}
