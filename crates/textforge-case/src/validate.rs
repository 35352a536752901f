//! Validation of canonical UUID text.
//!
//! Accepts exactly the hyphenated 8-4-4-4-12 form, in either case and with
//! any version or variant nibble.  [`uuid::Uuid::try_parse`] alone would also
//! accept the un-hyphenated "simple" form, so the canonical shape is checked
//! first.
//!
//! ```rust
//! use textforge_case::validate::is_canonical_uuid;
//!
//! assert!(is_canonical_uuid("52dc5778-1288-400d-b400-821b7beabd92"));
//! assert!(!is_canonical_uuid("52dc57781288400db400821b7beabd92"));
//! assert!(!is_canonical_uuid("hello"));
//! ```

use uuid::Uuid;

const CANONICAL_LEN: usize = 36;
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Whether `input` as a whole is a canonically formatted UUID.
pub fn is_canonical_uuid(input: &str) -> bool {
    if input.len() != CANONICAL_LEN {
        return false;
    }

    let bytes = input.as_bytes();
    if HYPHEN_OFFSETS.iter().any(|&offset| bytes[offset] != b'-') {
        return false;
    }

    Uuid::try_parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_version_and_case() {
        // v4
        assert!(is_canonical_uuid("52dc5778-1288-400d-b400-821b7beabd92"));
        // v1
        assert!(is_canonical_uuid("0630c1d6-8fab-11ea-bc55-0242ac130003"));
        // uppercase
        assert!(is_canonical_uuid("52DC5778-1288-400D-B400-821B7BEABD92"));
        // nil
        assert!(is_canonical_uuid("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn rejects_non_canonical_shapes() {
        assert!(!is_canonical_uuid("hello"));
        assert!(!is_canonical_uuid(""));
        // simple form without hyphens
        assert!(!is_canonical_uuid("52dc57781288400db400821b7beabd92"));
        // hyphens in the wrong spots
        assert!(!is_canonical_uuid("52dc57781-288-400d-b400-821b7beabd92"));
        // non-hex digit
        assert!(!is_canonical_uuid("52dc5778-1288-400d-b400-821b7beabdg2"));
        // trailing garbage
        assert!(!is_canonical_uuid("52dc5778-1288-400d-b400-821b7beabd92 "));
    }
}
