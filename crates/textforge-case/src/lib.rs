//! # `textforge-case` – casing and word-level text helpers
//!
//! Reusable, builder-independent helpers for the *textforge* workspace:
//!
//! | Module      | What it provides                                              |
//! |-------------|---------------------------------------------------------------|
//! | [`segment`] | The shared word-boundary segmentation pipeline                |
//! | [`convert`] | `kebab-case` / `camelCase` / `snake_case` / `PascalCase`      |
//! | [`words`]   | Word extraction with a default or caller-supplied pattern     |
//! | [`validate`]| Canonical UUID text validation                                |
//!
//! Everything here operates on plain `&str` so the helpers are usable with
//! or without the fluent builder.

pub mod convert;
pub mod segment;
pub mod validate;
pub mod words;
