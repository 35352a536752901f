//! # `textforge-builder` – the fluent text builder
//!
//! The home of [`Text`], a builder that assembles strings from ordered
//! fragments through chainable calls:
//!
//! ```rust
//! use textforge_builder::Text;
//!
//! let greeting = Text::make("Hello")
//!     .space()
//!     .append(("world", "!"))
//!     .to_string();
//! assert_eq!(greeting, "Hello world!");
//! ```
//!
//! The API splits into three families:
//!
//! | Family     | Behavior                                                        |
//! |------------|------------------------------------------------------------------|
//! | Mutators   | Grow the fragment sequence in place (`append`, `nl`, `times`, …) |
//! | Extractors | Materialize, slice around markers (`before`, `between`, …)       |
//! | Formatters | Materialize, transform the whole content (`kebab_case`, …)       |
//!
//! Extractors and formatters collapse the sequence to a single fragment;
//! mutators never materialize.  Inputs are coerced through
//! [`IntoFragments`](textforge_core::fragment::IntoFragments) at the call
//! site, with heterogeneous argument lists written as tuples.  The closed
//! [`Input`] union covers the dynamic boundary where values arrive as JSON.

mod extract;
mod format;
mod input;
mod mutate;
mod schema;
mod text;

pub use input::Input;
pub use text::Text;
