//! # Identifier normalization example
//!
//! Demonstrates the formatter family on a batch of messy, user-supplied
//! names:
//!
//! 1. **Case conversion** – every spelling of the same words normalizes to
//!    identical `kebab-case` / `PascalCase` forms.
//! 2. **Word extraction** with the default pattern.
//! 3. **UUID validation** through `is_uuid`, flagging entries that are
//!    already machine-generated identifiers.
//!
//! ## Running the example
//!
//! ```bash
//! cargo run -p textforge --example identifiers
//! ```

use textforge::Text;

fn main() -> anyhow::Result<()> {
    let raw_names = [
        "   Billing, Report!   ",
        "billing_report",
        "BillingReport",
        "52dc5778-1288-400d-b400-821b7beabd92",
    ];

    for raw in raw_names {
        let already_id = Text::make(raw).is_uuid();
        if already_id == "true" {
            println!("{raw:>40}  (already a UUID, left untouched)");
            continue;
        }

        let slug = Text::make(raw).kebab_case();
        let type_name = Text::make(raw).pascal_case();
        let words = Text::make(raw).words();

        println!("{raw:>40}  slug={slug}  type={type_name}  words={words:?}");
    }

    Ok(())
}
