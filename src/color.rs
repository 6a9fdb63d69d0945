//! Packed ARGB colors and text styles.
//!
//! Colors use the common mobile-toolkit packing: alpha in the high byte,
//! then red, green and blue.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Alpha values below this are treated as invisible.
pub const TRANSPARENT_ALPHA_THRESHOLD: u8 = 0x10;

/// A 32-bit `0xAARRGGBB` color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct Color(u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Creates a color from its packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb_u32(value: u32) -> Self {
        Self(value)
    }

    /// Creates a color from individual channels.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Returns the packed value.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// True if the color is too transparent to be seen (`alpha < 0x10`).
    ///
    /// ```
    /// use card_entry::Color;
    ///
    /// assert!(Color::from_argb(15, 0, 0, 0).is_transparent());
    /// assert!(!Color::from_argb(16, 0, 0, 0).is_transparent());
    /// ```
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() < TRANSPARENT_ALPHA_THRESHOLD
    }

    /// Perceived brightness, `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
    ///
    /// Alpha is ignored.
    #[inline]
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.red()) + 0.587 * f64::from(self.green())
            + 0.114 * f64::from(self.blue())
    }

    /// True if normalized luminance is at most one half.
    ///
    /// ```
    /// use card_entry::Color;
    ///
    /// assert!(Color::BLACK.is_dark());
    /// assert!(!Color::WHITE.is_dark());
    /// ```
    #[inline]
    pub fn is_dark(self) -> bool {
        self.luminance() / 255.0 <= 0.5
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ConfigError::InvalidColor {
            input: s.to_string(),
            reason,
        };

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hex characters"));
        }

        let value = match hex.len() {
            6 => 0xFF00_0000 | parse_hex(hex).ok_or_else(|| invalid("out of range"))?,
            8 => parse_hex(hex).ok_or_else(|| invalid("out of range"))?,
            _ => return Err(invalid("expected 6 or 8 hex digits")),
        };

        Ok(Self(value))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_hex(hex: &str) -> Option<u32> {
    u32::from_str_radix(hex, 16).ok()
}

/// The non-error appearance of a field's text.
///
/// Only the default color drives luminance decisions; the per-state colors
/// are carried along so restoring a snapshot restores them too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    default_color: Color,
    focused_color: Option<Color>,
    disabled_color: Option<Color>,
}

impl TextStyle {
    /// A style with a single color for every state.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self {
            default_color: color,
            focused_color: None,
            disabled_color: None,
        }
    }

    /// Sets the color used while the field has focus.
    #[must_use]
    pub const fn with_focused(mut self, color: Color) -> Self {
        self.focused_color = Some(color);
        self
    }

    /// Sets the color used while the field is disabled.
    #[must_use]
    pub const fn with_disabled(mut self, color: Color) -> Self {
        self.disabled_color = Some(color);
        self
    }

    /// The primary color.
    #[inline]
    pub const fn default_color(&self) -> Color {
        self.default_color
    }

    /// Color for the focused state, falling back to the default.
    #[inline]
    pub fn focused_color(&self) -> Color {
        self.focused_color.unwrap_or(self.default_color)
    }

    /// Color for the disabled state, falling back to the default.
    #[inline]
    pub fn disabled_color(&self) -> Color {
        self.disabled_color.unwrap_or(self.default_color)
    }
}
