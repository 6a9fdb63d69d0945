//! Fuzz target for card number grouping.
//!
//! Tests that grouping never panics on arbitrary input and never loses or
//! invents characters.

#![no_main]

use card_entry::{format, CardBrand, MAX_GROUPED_CHARS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let expected: String = data.chars().take(MAX_GROUPED_CHARS).collect();

    for brand in CardBrand::ALL {
        let groups = format::group_card_number(data, brand);
        assert_eq!(groups.len(), brand.grouping().slot_count());
        assert_eq!(groups.concat(), expected, "Grouping should preserve content");

        let _ = format::format_for_display(data, brand, " ");
    }

    let _ = format::strip_formatting(data);
});
