//! Card brands and their display numbering schemes.
//!
//! This module provides the `CardBrand` enum for identifying the scheme a
//! card number belongs to, and the `GroupingScheme` that decides how its
//! digits are split for display. Brand detection is not performed here:
//! the brand is always supplied by the caller.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Supported card brands/networks.
///
/// Each variant carries a CVC length and a display grouping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardBrand {
    /// Visa - 4-4-4-4 grouping, 3 digit CVV
    Visa,
    /// Mastercard - 4-4-4-4 grouping, 3 digit CVC
    Mastercard,
    /// American Express - 4-6-5 grouping, 4 digit CID
    Amex,
    /// Discover - 4-4-4-4 grouping, 3 digit CID
    Discover,
    /// Diners Club - 4-4-4-4 grouping, 3 digit CVV
    DinersClub,
    /// JCB - 4-4-4-4 grouping, 3 digit CAV2
    Jcb,
    /// UnionPay - 4-4-4-4 grouping, 3 digit CVN2
    UnionPay,
    /// Brand not (yet) known - generic 4-4-4-4 grouping
    #[default]
    Unknown,
}

/// How a card number is split into groups for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingScheme {
    /// Fixed-length groups, filling four slots.
    Uniform {
        /// Characters per group.
        group_len: usize,
    },
    /// American Express style: three slots with boundaries after 4 and 10.
    AmexStyle,
}

impl GroupingScheme {
    /// Number of group slots this scheme allocates.
    #[inline]
    pub const fn slot_count(&self) -> usize {
        match self {
            Self::Uniform { .. } => 4,
            Self::AmexStyle => 3,
        }
    }
}

impl CardBrand {
    /// Every brand, in declaration order.
    pub const ALL: [CardBrand; 8] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::DinersClub,
        Self::Jcb,
        Self::UnionPay,
        Self::Unknown,
    ];

    /// Returns the expected CVC length for this brand.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Returns the display grouping scheme for this brand.
    #[inline]
    pub const fn grouping(&self) -> GroupingScheme {
        match self {
            Self::Amex => GroupingScheme::AmexStyle,
            _ => GroupingScheme::Uniform { group_len: 4 },
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CardBrand {
    type Err = ConfigError;

    /// Parses a brand name, ignoring case, spaces, dashes and underscores.
    ///
    /// ```
    /// use card_entry::CardBrand;
    ///
    /// assert_eq!("amex".parse::<CardBrand>().unwrap(), CardBrand::Amex);
    /// assert_eq!("American Express".parse::<CardBrand>().unwrap(), CardBrand::Amex);
    /// assert_eq!("diners-club".parse::<CardBrand>().unwrap(), CardBrand::DinersClub);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "americanexpress" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "diners" | "dinersclub" => Ok(Self::DinersClub),
            "jcb" => Ok(Self::Jcb),
            "unionpay" => Ok(Self::UnionPay),
            "unknown" | "generic" => Ok(Self::Unknown),
            _ => Err(ConfigError::UnknownBrand {
                input: s.to_string(),
            }),
        }
    }
}
