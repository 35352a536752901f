//! # `textforge` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                   | What it provides                                                  |
//! |-------------------------|-------------------------------------------------------------------|
//! | **`textforge-core`**    | The `Fragment` model, `IntoFragments` coercion, errors            |
//! | **`textforge-builder`** | The fluent [`Text`] builder and the dynamic [`Input`] union       |
//! | **`textforge-case`**    | Word segmentation, case conversion and validation on plain `&str` |
//!
//! ## Quick example
//!
//! ```rust
//! use textforge::Text;
//!
//! let listing = Text::make("Hello")
//!     .space()
//!     .append(("world", "!"))
//!     .append_line("Second line")
//!     .to_string();
//! assert_eq!(listing, "Hello world!\nSecond line");
//! ```
//!
//! Heterogeneous inputs are written as tuples; anything stringifiable per
//! [`IntoFragments`] coerces at the call site:
//!
//! ```rust
//! use textforge::Text;
//!
//! assert_eq!(Text::make(("answer: ", 42)), "answer: 42");
//! ```
//!
//! ## Design philosophy
//!
//! * **Fragments over buffers** – mutators grow an ordered fragment sequence
//!   and never pay for materialization; only extractors and formatters do.
//! * **No procedural macros** – coercion is powered by ordinary traits and
//!   `impl`s so you can understand and extend the code without magic.
//! * **Graceful extraction** – a marker that does not occur leaves the
//!   content unchanged instead of erroring, so chains degrade softly.
//!
//! ## Crate contents
//!
//! The `pub use` statements below simply forward the public API of the
//! individual crates so users can write `textforge::Text` instead of
//! juggling three separate dependencies.
#![doc(html_root_url = "https://docs.rs/textforge/latest")]

pub use textforge_builder::{Input, Text};
pub use textforge_case as case;
pub use textforge_core::*;
