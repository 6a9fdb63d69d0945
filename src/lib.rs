//! # card_entry
//!
//! Input formatting and error-state logic for payment card entry fields.
//!
//! ## Features
//!
//! - Brand-aware grouping of a card number as the user types it
//! - Error display state for a field: message or color swap, never both
//! - Delete-on-empty detection unified across hardware and soft keyboards
//! - Cancellable delayed hints driven by the host's event loop
//!
//! Rendering, keyboard plumbing and brand detection are left to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_entry::{group_card_number, CardBrand};
//!
//! let groups = group_card_number("4242424242424242", CardBrand::Visa);
//! assert_eq!(groups.join(" "), "4242 4242 4242 4242");
//!
//! // American Express uses three slots split after 4 and 10
//! let groups = group_card_number("378282246310005", CardBrand::Amex);
//! assert_eq!(groups.len(), 3);
//! assert_eq!(groups.join(" "), "3782 822463 10005");
//!
//! // Partial input leaves later slots unset
//! let groups = group_card_number("42424", CardBrand::Visa);
//! assert_eq!(groups.get(1), Some("4"));
//! assert_eq!(groups.get(2), None);
//! ```
//!
//! ## Error Display
//!
//! ```rust
//! use card_entry::{CardField, Color, ErrorMode};
//!
//! let mut field = CardField::new();
//! field.set_error_color(Color::from_rgb(0xE5, 0x39, 0x35));
//!
//! field.set_should_show_error(true);
//! assert_eq!(field.error_mode(), ErrorMode::ErrorShown);
//! assert_eq!(field.text_style().default_color(), Color::from_rgb(0xE5, 0x39, 0x35));
//!
//! field.set_should_show_error(false);
//! assert_eq!(field.text_style().default_color(), Color::BLACK);
//! ```
//!
//! ## Delayed Hints
//!
//! ```rust
//! use card_entry::CardField;
//! use std::time::Duration;
//!
//! let mut field = CardField::new();
//! field.set_hint_delayed("4242 4242 4242 4242", Duration::from_millis(500));
//!
//! field.advance(Duration::from_millis(500));
//! assert_eq!(field.hint(), Some("4242 4242 4242 4242"));
//!
//! // Teardown cancels anything still pending
//! field.set_hint_delayed("never shown", Duration::from_millis(500));
//! field.detach();
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `config` | JSON field configuration |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - The field's text buffer is reserved up front, zeroized before it is
//!   replaced by a larger allocation, and zeroized on drop
//! - `Debug` for `CardField` never prints the card number
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod color;
pub mod config;
pub mod cvv;
pub mod error;
pub mod error_state;
pub mod field;
pub mod format;
pub mod timer;

// Re-export main types at crate root
pub use card::{CardBrand, GroupingScheme};
pub use color::{Color, TextStyle};
pub use config::{DelayedHint, FieldConfig};
pub use error::ConfigError;
pub use error_state::{ErrorEffect, ErrorMode, ErrorPalette, FieldErrorState};
pub use field::CardField;
pub use format::{group_card_number, GroupSet, MAX_GROUPED_CHARS};
pub use timer::TimerHandle;

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4242424242424242";
    const AMEX: &str = "378282246310005";

    #[test]
    fn test_group_then_strip_round_trip() {
        for (number, brand) in [(VISA_16, CardBrand::Visa), (AMEX, CardBrand::Amex)] {
            let display = format::format_for_display(number, brand, " ");
            assert_eq!(format::strip_formatting(&display), number);
        }
    }

    #[test]
    fn test_field_drives_grouping() {
        let mut field = CardField::new();
        field.set_text(AMEX);
        let groups = group_card_number(field.text(), CardBrand::Amex);
        assert_eq!(groups.join(" "), "3782 822463 10005");
    }

    #[test]
    fn test_thread_safety() {
        // Value types are Send + Sync; CardField holds boxed listeners and is not.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GroupSet>();
        assert_send_sync::<CardBrand>();
        assert_send_sync::<Color>();
        assert_send_sync::<FieldErrorState>();
        assert_send_sync::<ConfigError>();
    }
}
