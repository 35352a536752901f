//! # Changelog assembly example
//!
//! Demonstrates the mutator family: building a multi-line document without
//! ever concatenating strings by hand.
//!
//! 1. **Line splicing** with `append_line`, which inserts separators only
//!    between non-empty content.
//! 2. **Block dedenting** with `trim_lines`, so indented raw literals read
//!    naturally in source.
//! 3. **Suffix guarding** with `finish`, which never doubles the trailing
//!    newline.
//!
//! ## Running the example
//!
//! ```bash
//! cargo run -p textforge --example changelog
//! ```

use textforge::Text;

struct Release {
    version: &'static str,
    features: Vec<&'static str>,
    fixes: Vec<&'static str>,
}

/// Render one titled bullet list, or nothing when there are no entries.
fn section(title: &str, entries: &[&'static str]) -> Option<Text> {
    if entries.is_empty() {
        return None;
    }

    let body = entries.iter().fold(Text::make(title), |text, entry| {
        text.append_line(("- ", *entry))
    });
    Some(body)
}

fn render(release: &Release) -> String {
    let mut text = Text::make(("# Release ", release.version)).nl().trim_lines(
        "
        Thanks for keeping up to date!
        This release contains:
        ",
    );

    let sections = [
        section("## Features", &release.features),
        section("## Fixes", &release.fixes),
    ];
    for section in sections.into_iter().flatten() {
        text = text.nl().append_line(section);
    }

    text.finish("\n").to_string()
}

fn main() -> anyhow::Result<()> {
    let release = Release {
        version: "0.1.0",
        features: vec!["fluent fragment builder", "case conversion"],
        fixes: vec!["newline handling on empty content"],
    };

    print!("{}", render(&release));
    Ok(())
}
