//! The fragment model shared by the whole workspace.
//!
//! A builder is nothing more than an ordered sequence of [`Fragment`]s that
//! concatenate left-to-right into the final text.  Everything that can be fed
//! into a builder goes through one trait:
//!
//! 1. [`IntoFragments`] – turns *any* accepted value into an ordered list of
//!    fragments.
//!
//! The trait is implemented for string slices, owned strings, characters and
//! the common numeric types, so heterogeneous argument lists can be written
//! as plain tuples:
//!
//! ```rust
//! use textforge_core::fragment::IntoFragments;
//!
//! let fragments = ("Hel", "lo", '!', 42).into_fragments();
//! assert_eq!(fragments, vec!["Hel", "lo", "!", "42"]);
//! ```
//!
//! Keeping coercion behind a trait means unsupported types are rejected by
//! the compiler instead of at runtime.  The only place where a runtime check
//! remains is dynamic data such as JSON values, which the builder crate
//! handles through its closed `Input` union.

/// One string segment held in a builder's ordered sequence.
///
/// Fragments concatenate left-to-right to form the materialized text; the
/// sequence never contains a "missing" entry because every accepted input is
/// coerced to its string form at insertion time.
pub type Fragment = String;

/// Converts a value into a series of text fragments.
///
/// Mirrors the variadic constructors found in dynamic string-builder
/// libraries: a single implementation covers one value, a tuple covers an
/// argument list, and a `Vec` covers a homogeneous batch.  Numbers stringify
/// through their `Display` form, so `42` becomes `"42"` and `3.5` becomes
/// `"3.5"`.
pub trait IntoFragments {
    /// Consume `self` and return **all** fragments in the desired order.
    fn into_fragments(self) -> Vec<Fragment>;
}

impl IntoFragments for &str {
    fn into_fragments(self) -> Vec<Fragment> {
        vec![self.to_string()]
    }
}

impl IntoFragments for String {
    fn into_fragments(self) -> Vec<Fragment> {
        vec![self]
    }
}

impl IntoFragments for &String {
    fn into_fragments(self) -> Vec<Fragment> {
        vec![self.clone()]
    }
}

impl IntoFragments for char {
    fn into_fragments(self) -> Vec<Fragment> {
        vec![self.to_string()]
    }
}

/// Numbers are stringified through `Display`, the standard decimal form.
macro_rules! impl_into_fragments_for_numbers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoFragments for $ty {
                fn into_fragments(self) -> Vec<Fragment> {
                    vec![self.to_string()]
                }
            }
        )+
    };
}

impl_into_fragments_for_numbers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: IntoFragments> IntoFragments for Vec<T> {
    fn into_fragments(self) -> Vec<Fragment> {
        self.into_iter()
            .flat_map(IntoFragments::into_fragments)
            .collect()
    }
}

/// The empty argument list.
impl IntoFragments for () {
    fn into_fragments(self) -> Vec<Fragment> {
        Vec::new()
    }
}

/// Tuples model variadic, heterogeneous argument lists.  Ordinary
/// `macro_rules!` keeps this free of procedural macros.
macro_rules! impl_into_fragments_for_tuples {
    ($(($($name:ident),+))+) => {
        $(
            impl<$($name: IntoFragments),+> IntoFragments for ($($name,)+) {
                fn into_fragments(self) -> Vec<Fragment> {
                    #[allow(non_snake_case)]
                    let ($($name,)+) = self;
                    let mut fragments = Vec::new();
                    $(fragments.extend($name.into_fragments());)+
                    fragments
                }
            }
        )+
    };
}

impl_into_fragments_for_tuples! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_pass_through() {
        assert_eq!("abc".into_fragments(), vec!["abc"]);
        assert_eq!(String::from("abc").into_fragments(), vec!["abc"]);
    }

    #[test]
    fn numbers_use_standard_decimal_form() {
        assert_eq!(42.into_fragments(), vec!["42"]);
        assert_eq!(3.5.into_fragments(), vec!["3.5"]);
        assert_eq!(3.0.into_fragments(), vec!["3"]);
        assert_eq!((-7i64).into_fragments(), vec!["-7"]);
    }

    #[test]
    fn tuples_preserve_argument_order() {
        assert_eq!(("a", 1, 'c').into_fragments(), vec!["a", "1", "c"]);
        assert_eq!(().into_fragments(), Vec::<Fragment>::new());
    }

    #[test]
    fn vectors_flatten_in_order() {
        let batch = vec!["Line 1", "Line 2"];
        assert_eq!(batch.into_fragments(), vec!["Line 1", "Line 2"]);
    }
}
