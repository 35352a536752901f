//! Builder-style helper for assembling **text from ordered fragments**.
//!
//! Writing generated text with manual concatenation bookkeeping is tedious
//! and error-prone.  [`Text`] offers a fluent API that lets you focus on the
//! *content* instead of the plumbing.  Every method consumes `self` and
//! returns it, enabling call-chaining:
//!
//! ```rust
//! use textforge_builder::Text;
//!
//! let greeting = Text::make("Hel").append("lo!").to_string();
//! assert_eq!(greeting, "Hello!");
//!
//! let listing = Text::make("fn main() {")
//!     .append_line("    println!(\"hi\");")
//!     .append_line("}")
//!     .to_string();
//! assert_eq!(listing, "fn main() {\n    println!(\"hi\");\n}");
//! ```
//!
//! Internally the builder owns a `Vec` of fragments that grows with each
//! chained call; the materialized string is always the in-order
//! concatenation of those fragments.  Mutators work on the sequence directly
//! and stay cheap; extractors and formatters first materialize, transform
//! the whole string, and put the result back as a single fragment.

use std::fmt::{self, Display};

use textforge_core::fragment::{Fragment, IntoFragments};

use crate::input::Input;

/// Fluent builder over an ordered sequence of string fragments.
///
/// The fragment vector is kept private so every way of growing it goes
/// through [`IntoFragments`] coercion, preserving the invariant that the
/// sequence only ever holds fully stringified values.
#[derive(Debug, Clone, Default)]
pub struct Text {
    fragments: Vec<Fragment>,
}

impl Text {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from zero or more inputs.
    ///
    /// Heterogeneous argument lists are written as tuples; every element is
    /// coerced to its string form immediately, in argument order:
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make(()).to_string(), "");
    /// assert_eq!(Text::make("Hello there!").to_string(), "Hello there!");
    /// assert_eq!(Text::make(("answer: ", 42)).to_string(), "answer: 42");
    /// ```
    pub fn make(input: impl IntoFragments) -> Self {
        Self {
            fragments: input.into_fragments(),
        }
    }

    /// The fragment sequence, in concatenation order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Join the fragments with `separator` inserted between each.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// let csv = Text::make(("a", "b", "c")).join(",");
    /// assert_eq!(csv, "a,b,c");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }

    /// Character count of the materialized string, computed on demand.
    pub fn len(&self) -> usize {
        self.fragments.iter().map(|f| f.chars().count()).sum()
    }

    /// Whether the materialized string is empty.
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|f| f.is_empty())
    }

    /// Replace the whole fragment sequence with a single fragment.
    ///
    /// Extractors and formatters funnel through here after transforming the
    /// materialized string.
    pub(crate) fn with_content(mut self, content: String) -> Self {
        self.fragments = vec![content];
        self
    }

    pub(crate) fn push_fragment(&mut self, fragment: impl Into<Fragment>) {
        self.fragments.push(fragment.into());
    }

    pub(crate) fn extend_fragments(&mut self, fragments: Vec<Fragment>) {
        self.fragments.extend(fragments);
    }

    pub(crate) fn splice_front(&mut self, fragments: Vec<Fragment>) {
        self.fragments.splice(0..0, fragments);
    }

    pub(crate) fn set_fragments(&mut self, fragments: Vec<Fragment>) {
        self.fragments = fragments;
    }
}

/// The canonical materialization: `join("")`.
impl Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

/// Builders compare by materialized text, not by fragmentation.
impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        self.to_string() == *other
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::make(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::make(value)
    }
}

impl From<char> for Text {
    fn from(value: char) -> Self {
        Self::make(value)
    }
}

macro_rules! impl_from_numbers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Text {
                fn from(value: $ty) -> Self {
                    Self::make(value)
                }
            }
        )+
    };
}

impl_from_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<Input> for Text {
    fn from(value: Input) -> Self {
        Self::make(value)
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.to_string()
    }
}

impl FromIterator<Fragment> for Text {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Fragment> for Text {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        self.fragments.extend(iter);
    }
}

/// A nested builder coerces to its materialization, as a single fragment.
impl IntoFragments for Text {
    fn into_fragments(self) -> Vec<Fragment> {
        vec![self.to_string()]
    }
}

impl IntoFragments for &Text {
    fn into_fragments(self) -> Vec<Fragment> {
        vec![self.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialization_is_ordered_concatenation() {
        let text = Text::make(("f1", "f2", "f3"));
        assert_eq!(text.fragments(), ["f1", "f2", "f3"]);
        assert_eq!(text.to_string(), "f1f2f3");
        assert_eq!(text.join("-"), "f1-f2-f3");
    }

    #[test]
    fn length_counts_characters_of_the_materialized_string() {
        assert_eq!(Text::make("hello").len(), 5);
        assert_eq!(Text::new().len(), 0);
        assert_eq!(Text::make("héllo").len(), 5);
        assert!(Text::make(("", "")).is_empty());
    }

    #[test]
    fn nested_builders_coerce_to_one_fragment() {
        let inner = Text::make(("Hel", "lo"));
        let outer = Text::make((inner, "!"));
        assert_eq!(outer.fragments(), ["Hello", "!"]);
    }

    #[test]
    fn equality_ignores_fragmentation() {
        assert_eq!(Text::make(("ab", "c")), Text::make(("a", "bc")));
        assert_eq!(Text::make("abc"), "abc");
    }

    #[test]
    fn collects_from_fragment_iterators() {
        let text: Text = ["a", "b", "c"].map(String::from).into_iter().collect();
        assert_eq!(text.fragments(), ["a", "b", "c"]);

        let mut text = Text::make("a");
        text.extend(vec!["b".to_string()]);
        assert_eq!(text, "ab");
    }
}
