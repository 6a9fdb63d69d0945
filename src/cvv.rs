//! CVC entry helpers.
//!
//! The CVC field of a card entry widget usually advances focus once the
//! user has typed as many digits as the brand expects:
//!
//! - American Express: 4 digits (printed on front)
//! - All other cards: 3 digits (printed on back)
//!
//! # Example
//!
//! ```
//! use card_entry::cvv::is_cvc_maximal_length;
//! use card_entry::CardBrand;
//!
//! assert!(is_cvc_maximal_length(CardBrand::Visa, Some("123")));
//! assert!(!is_cvc_maximal_length(CardBrand::Amex, Some("123")));
//! assert!(is_cvc_maximal_length(CardBrand::Amex, Some(" 1234 ")));
//! assert!(!is_cvc_maximal_length(CardBrand::Visa, None));
//! ```

use crate::CardBrand;

/// True if the trimmed CVC text has exactly the brand's CVC length.
///
/// No digit check is made; this only measures how much has been typed.
#[inline]
pub fn is_cvc_maximal_length(brand: CardBrand, cvc: Option<&str>) -> bool {
    match cvc {
        Some(text) => text.trim().chars().count() == brand.cvv_length(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_digit_brands() {
        for brand in [CardBrand::Visa, CardBrand::Mastercard, CardBrand::Unknown] {
            assert!(is_cvc_maximal_length(brand, Some("123")));
            assert!(!is_cvc_maximal_length(brand, Some("12")));
            assert!(!is_cvc_maximal_length(brand, Some("1234")));
        }
    }

    #[test]
    fn test_amex() {
        assert!(is_cvc_maximal_length(CardBrand::Amex, Some("1234")));
        assert!(!is_cvc_maximal_length(CardBrand::Amex, Some("123")));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(is_cvc_maximal_length(CardBrand::Visa, Some("  123\n")));
        // Inner characters count; only the ends are trimmed.
        assert!(is_cvc_maximal_length(CardBrand::Visa, Some("1 3")));
        assert!(!is_cvc_maximal_length(CardBrand::Visa, Some(" 1 3 4 ")));
    }

    #[test]
    fn test_missing_or_empty() {
        assert!(!is_cvc_maximal_length(CardBrand::Visa, None));
        assert!(!is_cvc_maximal_length(CardBrand::Visa, Some("")));
    }
}
