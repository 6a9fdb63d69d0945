//! Field configuration.
//!
//! Collects everything a host sets on a card field up front: the error
//! color, the optional error message, hints and the error palette.
//!
//! # Feature
//!
//! Loading from JSON requires the `config` feature.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "text_color": "#DE000000",
//!   "error_color": "#E53935",
//!   "error_message": "Your card number is invalid.",
//!   "hint": "Card number",
//!   "delayed_hint": { "hint": "4242 4242 4242 4242", "delay_ms": 1500 },
//!   "palette": { "light_theme": "#E53935", "dark_theme": "#FF8A80" }
//! }
//! ```
//!
//! Every key is optional.

use crate::color::Color;
use crate::error_state::ErrorPalette;
use std::time::Duration;

/// A hint to apply after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DelayedHint {
    /// The hint text.
    pub hint: String,
    /// Delay before the hint is applied, in milliseconds.
    pub delay_ms: u64,
}

impl DelayedHint {
    /// The delay as a `Duration`.
    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Configuration for a [`CardField`](crate::field::CardField).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FieldConfig {
    /// Initial text color; defaults to opaque black.
    pub text_color: Option<Color>,
    /// Color for color-based error display; defaults to the palette pick.
    pub error_color: Option<Color>,
    /// Message for message-based error display.
    pub error_message: Option<String>,
    /// Initial hint.
    pub hint: Option<String>,
    /// Hint applied after a delay once the field is created.
    pub delayed_hint: Option<DelayedHint>,
    /// Light/dark error colors.
    pub palette: ErrorPalette,
}

impl FieldConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial text color.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the error color.
    #[must_use]
    pub fn error_color(mut self, color: Color) -> Self {
        self.error_color = Some(color);
        self
    }

    /// Sets the error message.
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Sets the initial hint.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets a hint to apply after `delay`.
    #[must_use]
    pub fn delayed_hint(mut self, hint: impl Into<String>, delay: Duration) -> Self {
        self.delayed_hint = Some(DelayedHint {
            hint: hint.into(),
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        });
        self
    }

    /// Sets the error palette.
    #[must_use]
    pub fn palette(mut self, palette: ErrorPalette) -> Self {
        self.palette = palette;
        self
    }
}

#[cfg(feature = "config")]
mod json {
    use super::FieldConfig;
    use crate::error::ConfigError;
    use std::fs;
    use std::path::Path;

    impl FieldConfig {
        /// Parses a configuration from a JSON string.
        ///
        /// # Example
        ///
        /// ```
        /// use card_entry::{Color, FieldConfig};
        ///
        /// let config = FieldConfig::from_json(r##"{ "error_color": "#FF0000" }"##).unwrap();
        /// assert_eq!(config.error_color, Some(Color::from_rgb(255, 0, 0)));
        /// ```
        pub fn from_json(json: &str) -> Result<Self, ConfigError> {
            serde_json::from_str(json)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))
        }

        /// Loads a configuration from a JSON file.
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path)?;
            Self::from_json(&content)
        }
    }
}
