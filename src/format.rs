//! Card number grouping for display.
//!
//! This module splits a raw card number into the groups a card entry field
//! renders while the user types, following the numbering scheme of an
//! already-known brand.
//!
//! # Grouping Conventions
//!
//! - **Uniform brands** (Visa, Mastercard, ...): up to four slots of 4
//! - **American Express**: three slots split after 4 and 10 characters
//!
//! Input longer than [`MAX_GROUPED_CHARS`] is truncated. Nothing is
//! validated: non-digit characters pass through untouched.
//!
//! # Example
//!
//! ```
//! use card_entry::format::group_card_number;
//! use card_entry::CardBrand;
//!
//! let groups = group_card_number("4242424242424242", CardBrand::Visa);
//! assert_eq!(groups.join(" "), "4242 4242 4242 4242");
//!
//! let groups = group_card_number("37828224631", CardBrand::Amex);
//! assert_eq!(groups.join(" "), "3782 822463 1");
//! ```

use crate::card::{CardBrand, GroupingScheme};

/// Maximum number of characters consumed by grouping.
pub const MAX_GROUPED_CHARS: usize = 16;

/// Boundaries of the American Express scheme.
const AMEX_FIRST: usize = 4;
const AMEX_SECOND: usize = 10;

/// An ordered, fixed-size set of group slots.
///
/// Slots are `None` while the input is too short to reach them. Joining the
/// defined slots in order reproduces the (truncated) input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSet {
    slots: Vec<Option<String>>,
}

impl GroupSet {
    fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// Returns the number of slots (3 or 4).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a set has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the group in slot `index`, if defined.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// Returns the raw slots.
    #[inline]
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Iterates over the defined groups in order, empty groups included.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|s| s.as_deref())
    }

    /// Number of defined slots.
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if every slot is defined and non-empty.
    pub fn is_complete(&self) -> bool {
        self.slots
            .iter()
            .all(|s| s.as_deref().is_some_and(|g| !g.is_empty()))
    }

    /// Concatenates the defined groups.
    pub fn concat(&self) -> String {
        self.groups().collect()
    }

    /// Joins the defined, non-empty groups with `separator`.
    ///
    /// # Example
    ///
    /// ```
    /// use card_entry::format::group_card_number;
    /// use card_entry::CardBrand;
    ///
    /// let groups = group_card_number("424242", CardBrand::Visa);
    /// assert_eq!(groups.join("-"), "4242-42");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        let mut result = String::with_capacity(MAX_GROUPED_CHARS + 3 * separator.len());
        for group in self.groups().filter(|g| !g.is_empty()) {
            if !result.is_empty() {
                result.push_str(separator);
            }
            result.push_str(group);
        }
        result
    }

    /// Consumes the set, returning its slots.
    pub fn into_slots(self) -> Vec<Option<String>> {
        self.slots
    }
}

/// Splits a raw card number into display groups for `brand`.
///
/// Characters beyond the first [`MAX_GROUPED_CHARS`] are dropped. Slots that
/// the input does not reach are left `None`.
///
/// For uniform schemes a chunk is only assigned by the main loop when more
/// input follows it; the remainder (possibly empty, possibly a full group)
/// always lands in the next free slot.
///
/// # Example
///
/// ```
/// use card_entry::format::group_card_number;
/// use card_entry::CardBrand;
///
/// let groups = group_card_number("", CardBrand::Visa);
/// assert_eq!(groups.get(0), Some(""));
/// assert_eq!(groups.get(1), None);
///
/// let groups = group_card_number("3782", CardBrand::Amex);
/// assert_eq!(groups.get(0), Some("3782"));
/// assert_eq!(groups.get(1), None);
/// ```
pub fn group_card_number(raw: &str, brand: CardBrand) -> GroupSet {
    let chars: Vec<char> = raw.chars().take(MAX_GROUPED_CHARS).collect();
    let scheme = brand.grouping();
    let mut set = GroupSet::with_slots(scheme.slot_count());

    match scheme {
        GroupingScheme::AmexStyle => {
            let length = chars.len();
            let mut last_used = 0;

            if length > AMEX_FIRST {
                set.slots[0] = Some(collect(&chars[..AMEX_FIRST]));
                last_used = AMEX_FIRST;
            }

            if length > AMEX_SECOND {
                set.slots[1] = Some(collect(&chars[AMEX_FIRST..AMEX_SECOND]));
                last_used = AMEX_SECOND;
            }

            if let Some(slot) = set.slots.iter_mut().find(|s| s.is_none()) {
                *slot = Some(collect(&chars[last_used..]));
            }
        }
        GroupingScheme::Uniform { group_len } => {
            let mut i = 0;
            let mut previous_start = 0;
            while (i + 1) * group_len < chars.len() && i + 1 < set.slots.len() {
                set.slots[i] = Some(collect(&chars[previous_start..(i + 1) * group_len]));
                previous_start = (i + 1) * group_len;
                i += 1;
            }
            set.slots[i] = Some(collect(&chars[previous_start..]));
        }
    }

    set
}

/// Groups `raw` for `brand` and joins the groups with `separator`.
///
/// # Example
///
/// ```
/// use card_entry::format::format_for_display;
/// use card_entry::CardBrand;
///
/// assert_eq!(
///     format_for_display("378282246310005", CardBrand::Amex, " "),
///     "3782 822463 10005"
/// );
/// ```
pub fn format_for_display(raw: &str, brand: CardBrand, separator: &str) -> String {
    group_card_number(raw, brand).join(separator)
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use card_entry::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("3782-822463-10005"), "378282246310005");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[inline]
fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}
