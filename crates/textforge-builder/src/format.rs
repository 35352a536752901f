//! Formatters: whole-content transformations and string-API passthroughs.
//!
//! Every method here materializes the content, transforms it and stores the
//! result back as a single fragment.  The casing and word helpers delegate
//! to [`textforge_case`], so the builder and the plain `&str` helpers always
//! agree on segmentation.

use regex::Regex;
use textforge_case::{convert, validate, words};

use crate::text::Text;

impl Text {
    /// Replace the content with `"true"` or `"false"` depending on whether
    /// it is a canonical hyphenated UUID.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").is_uuid(), "false");
    /// assert_eq!(
    ///     Text::make("52dc5778-1288-400d-b400-821b7beabd92").is_uuid(),
    ///     "true"
    /// );
    /// ```
    pub fn is_uuid(self) -> Self {
        let content = self.to_string();
        let flag = validate::is_canonical_uuid(&content);
        self.with_content(flag.to_string())
    }

    /// Extract word tokens, maximal runs of non-whitespace non-punctuation
    /// characters.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello world").words(), vec!["hello", "world"]);
    /// assert_eq!(Text::make("hello & world").words(), vec!["hello", "world"]);
    /// ```
    pub fn words(&self) -> Vec<String> {
        words::words(&self.to_string())
    }

    /// Extract every match of `pattern`, in order.
    ///
    /// ```rust
    /// use regex::Regex;
    /// use textforge_builder::Text;
    ///
    /// let pattern = Regex::new(r"[^, ]+").unwrap();
    /// assert_eq!(
    ///     Text::make("hello & world").words_matching(&pattern),
    ///     vec!["hello", "&", "world"]
    /// );
    /// ```
    pub fn words_matching(&self, pattern: &Regex) -> Vec<String> {
        words::words_matching(&self.to_string(), pattern)
    }

    /// Uppercase the first character, leave the rest untouched.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").upper_first(), "Hello");
    /// assert_eq!(Text::make(" hello").upper_first(), " hello");
    /// ```
    pub fn upper_first(self) -> Self {
        let content = self.to_string();
        let capitalized = convert::capitalize(&content);
        self.with_content(capitalized)
    }

    /// Lowercase the first character, leave the rest untouched.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello").lower_first(), "hello");
    /// ```
    pub fn lower_first(self) -> Self {
        let content = self.to_string();
        let decapitalized = convert::decapitalize(&content);
        self.with_content(decapitalized)
    }

    /// Convert the content to `kebab-case`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello World").kebab_case(), "hello-world");
    /// assert_eq!(Text::make("HelloWorld").kebab_case(), "hello-world");
    /// ```
    pub fn kebab_case(self) -> Self {
        let converted = convert::to_kebab_case(&self.to_string());
        self.with_content(converted)
    }

    /// Convert the content to `camelCase`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello, World!").camel_case(), "helloWorld");
    /// ```
    pub fn camel_case(self) -> Self {
        let converted = convert::to_camel_case(&self.to_string());
        self.with_content(converted)
    }

    /// Convert the content to `snake_case`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello-world").snake_case(), "hello_world");
    /// ```
    pub fn snake_case(self) -> Self {
        let converted = convert::to_snake_case(&self.to_string());
        self.with_content(converted)
    }

    /// Convert the content to `PascalCase`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello_world").pascal_case(), "HelloWorld");
    /// ```
    pub fn pascal_case(self) -> Self {
        let converted = convert::to_pascal_case(&self.to_string());
        self.with_content(converted)
    }

    /// Dedent a multi-line block and append the result.
    ///
    /// Leading and trailing blank lines are dropped, then the common
    /// leading-whitespace margin of the remaining lines is stripped.  Made
    /// for indented raw string literals:
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// let text = Text::new().trim_lines(
    ///     "
    ///     Hello
    ///     from
    ///     raw
    ///     literals
    ///     ",
    /// );
    /// assert_eq!(text, "Hello\nfrom\nraw\nliterals");
    /// ```
    pub fn trim_lines(self, block: impl AsRef<str>) -> Self {
        self.append(dedent(block.as_ref()))
    }

    /// Trim surrounding whitespace from the content.
    pub fn trim(self) -> Self {
        let trimmed = self.to_string().trim().to_string();
        self.with_content(trimmed)
    }

    /// Trim leading whitespace from the content.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("  hello").trim_start(), "hello");
    /// ```
    pub fn trim_start(self) -> Self {
        let trimmed = self.to_string().trim_start().to_string();
        self.with_content(trimmed)
    }

    /// Trim trailing whitespace from the content.
    pub fn trim_end(self) -> Self {
        let trimmed = self.to_string().trim_end().to_string();
        self.with_content(trimmed)
    }

    /// Replace the content with itself repeated `count` times.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("1").repeat(3), "111");
    /// ```
    pub fn repeat(self, count: usize) -> Self {
        let repeated = self.to_string().repeat(count);
        self.with_content(repeated)
    }

    /// Reduce the content to the character at `index`, or to the empty
    /// string when out of range.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("cat").char_at(1), "a");
    /// assert_eq!(Text::make("cat").char_at(9), "");
    /// ```
    pub fn char_at(self, index: usize) -> Self {
        let unit = self
            .to_string()
            .chars()
            .nth(index)
            .map(String::from)
            .unwrap_or_default();
        self.with_content(unit)
    }

    /// Replace every occurrence of `from` with `to`.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("Hello").replace("l", "w"), "Hewwo");
    /// ```
    pub fn replace(self, from: &str, to: &str) -> Self {
        let replaced = self.to_string().replace(from, to);
        self.with_content(replaced)
    }

    /// Replace every match of `pattern` with `replacement`.  Capture groups
    /// are available in the replacement string via `$1`, `$name`.
    ///
    /// ```rust
    /// use regex::Regex;
    /// use textforge_builder::Text;
    ///
    /// let pattern = Regex::new(r"l+").unwrap();
    /// assert_eq!(Text::make("Hello").replace_pattern(&pattern, "w"), "Hewo");
    /// ```
    pub fn replace_pattern(self, pattern: &Regex, replacement: &str) -> Self {
        let content = self.to_string();
        let replaced = pattern.replace_all(&content, replacement).into_owned();
        self.with_content(replaced)
    }

    /// Uppercase the whole content.
    ///
    /// ```rust
    /// use textforge_builder::Text;
    ///
    /// assert_eq!(Text::make("hello").upper(), "HELLO");
    /// ```
    pub fn upper(self) -> Self {
        let raised = self.to_string().to_uppercase();
        self.with_content(raised)
    }

    /// Lowercase the whole content.
    pub fn lower(self) -> Self {
        let lowered = self.to_string().to_lowercase();
        self.with_content(lowered)
    }
}

fn dedent(block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();
    let (Some(first), Some(last)) = (
        lines.iter().position(|line| !line.trim().is_empty()),
        lines.iter().rposition(|line| !line.trim().is_empty()),
    ) else {
        return String::new();
    };

    let lines = &lines[first..=last];
    let margin = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| strip_margin(line, margin))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop the first `margin` characters, the whole line when shorter.
fn strip_margin(line: &str, margin: usize) -> &str {
    match line.char_indices().nth(margin) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_validation_accepts_any_canonical_version() {
        assert_eq!(Text::make("hello").is_uuid(), "false");
        assert_eq!(
            Text::make("52dc5778-1288-400d-b400-821b7beabd92").is_uuid(),
            "true"
        );
        assert_eq!(
            Text::make("0630c1d6-8fab-11ea-bc55-0242ac130003").is_uuid(),
            "true"
        );
    }

    #[test]
    fn first_character_casing_skips_non_letters() {
        assert_eq!(Text::make("hello").upper_first(), "Hello");
        assert_eq!(Text::make("Hello").upper_first(), "Hello");
        assert_eq!(Text::make(" hello").upper_first(), " hello");
        assert_eq!(Text::make("Hello").lower_first(), "hello");
        assert_eq!(Text::make(" Hello").lower_first(), " Hello");
    }

    #[test]
    fn case_converters_share_one_segmentation() {
        assert_eq!(Text::make("   Hello, World!   ").kebab_case(), "hello-world");
        assert_eq!(Text::make("   Hello, World!   ").camel_case(), "helloWorld");
        assert_eq!(Text::make("   Hello, World!   ").snake_case(), "hello_world");
        assert_eq!(Text::make("   Hello, World!   ").pascal_case(), "HelloWorld");
    }

    #[test]
    fn trim_lines_strips_the_common_margin() {
        let text = Text::new().trim_lines("\n\t\t\tHello\n\t\t\tfrom\n\t\t\ttemplate\n\t\t\tliterals\n\t\t");
        assert_eq!(text, "Hello\nfrom\ntemplate\nliterals");
    }

    #[test]
    fn trim_lines_keeps_relative_indentation() {
        let text = Text::new().trim_lines("\n    fn main() {\n        body\n    }\n");
        assert_eq!(text, "fn main() {\n    body\n}");
    }

    #[test]
    fn trim_lines_on_a_blank_block_appends_nothing() {
        assert_eq!(Text::new().trim_lines("\n   \n\t\n"), "");
        assert_eq!(Text::make("intro").trim_lines(""), "intro");
    }

    #[test]
    fn passthroughs_mirror_the_str_api() {
        assert_eq!(Text::make("  hello").trim_start(), "hello");
        assert_eq!(Text::make("hello  ").trim_end(), "hello");
        assert_eq!(Text::make("  hello  ").trim(), "hello");
        assert_eq!(Text::make("1").repeat(3), "111");
        assert_eq!(Text::make("cat").char_at(1), "a");
        assert_eq!(Text::make("Hello").replace("l", "w"), "Hewwo");
        assert_eq!(Text::make("hello").upper(), "HELLO");
        assert_eq!(Text::make("HELLO").lower(), "hello");
    }

    #[test]
    fn replace_pattern_supports_captures() {
        let pattern = Regex::new(r"(\w+) (\w+)").unwrap();
        assert_eq!(
            Text::make("hello world").replace_pattern(&pattern, "$2 $1"),
            "world hello"
        );
    }
}
