//! # `textforge-core` – fragment model and errors
//!
//! The foundation crate of the *textforge* workspace.  It stays deliberately
//! small: the [`Fragment`] type, the [`IntoFragments`] coercion trait and the
//! workspace-wide error type live here so the builder and helper crates can
//! agree on a single vocabulary without depending on each other.
//!
//! Most users should depend on the umbrella `textforge` crate instead, which
//! re-exports everything below.

pub mod error;
pub mod fragment;

pub use error::{Result, TextError};
pub use fragment::{Fragment, IntoFragments};
