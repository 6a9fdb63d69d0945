//! Error display state for a single input field.
//!
//! A field shows an error in exactly one of two ways: by forwarding a
//! message to an attached listener, or by swapping its text color. This
//! module decides which, remembers whether the error is currently shown,
//! and keeps the normal style snapshot to restore on recovery.
//!
//! # Example
//!
//! ```
//! use card_entry::error_state::{ErrorEffect, FieldErrorState};
//! use card_entry::{Color, TextStyle};
//!
//! let normal = TextStyle::solid(Color::BLACK);
//! let mut state = FieldErrorState::new(normal);
//! state.set_error_color(Color::from_rgb(0xE5, 0x39, 0x35));
//!
//! assert_eq!(
//!     state.set_should_show_error(true, false),
//!     ErrorEffect::ApplyColor(Color::from_rgb(0xE5, 0x39, 0x35))
//! );
//! assert_eq!(state.set_should_show_error(false, false), ErrorEffect::RestoreStyle(normal));
//! ```

use crate::color::{Color, TextStyle};
use tracing::debug;

/// Error color used on light backgrounds (dark text).
pub const DEFAULT_ERROR_LIGHT_THEME: Color = Color::from_rgb(0xE5, 0x39, 0x35);

/// Error color used on dark backgrounds (light text).
pub const DEFAULT_ERROR_DARK_THEME: Color = Color::from_rgb(0xFF, 0x8A, 0x80);

/// Which theme a field's text color implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark text on a light surface.
    Light,
    /// Light text on a dark surface.
    Dark,
}

impl Theme {
    /// Infers the surrounding theme from a text color.
    ///
    /// Dark text implies a light theme, and vice versa.
    #[inline]
    pub fn for_text_color(color: Color) -> Self {
        if color.is_dark() {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// The pair of error colors a host resolves from its resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ErrorPalette {
    /// Error color for light themes.
    pub light_theme: Color,
    /// Error color for dark themes.
    pub dark_theme: Color,
}

impl Default for ErrorPalette {
    fn default() -> Self {
        Self {
            light_theme: DEFAULT_ERROR_LIGHT_THEME,
            dark_theme: DEFAULT_ERROR_DARK_THEME,
        }
    }
}

impl ErrorPalette {
    /// Picks the error color for a theme.
    #[inline]
    pub const fn for_theme(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => self.light_theme,
            Theme::Dark => self.dark_theme,
        }
    }
}

/// The two states of a field's error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Rendered normally.
    #[default]
    Normal,
    /// Rendered as invalid.
    ErrorShown,
}

/// What the host must do after an error toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEffect {
    /// Forward this message (or `None` to clear it) to the message listener.
    ShowMessage(Option<String>),
    /// Paint the text in the error color, then refresh.
    ApplyColor(Color),
    /// Restore the normal style snapshot, then refresh.
    RestoreStyle(TextStyle),
}

/// Error display state for one field.
#[derive(Debug, Clone)]
pub struct FieldErrorState {
    is_showing_error: bool,
    cached_normal_style: TextStyle,
    error_message: Option<String>,
    error_color: Color,
}

impl FieldErrorState {
    /// Creates a state in [`ErrorMode::Normal`] with `normal` as the snapshot.
    ///
    /// The error color starts as the palette default for the style's theme.
    pub fn new(normal: TextStyle) -> Self {
        let error_color = ErrorPalette::default()
            .for_theme(Theme::for_text_color(normal.default_color()));
        Self {
            is_showing_error: false,
            cached_normal_style: normal,
            error_message: None,
            error_color,
        }
    }

    /// Replaces the normal style snapshot.
    #[inline]
    pub fn capture_normal_style(&mut self, current: TextStyle) {
        self.cached_normal_style = current;
    }

    /// The most recent normal style snapshot.
    #[inline]
    pub fn cached_normal_style(&self) -> TextStyle {
        self.cached_normal_style
    }

    /// Re-snapshots `current` and returns the palette's error color for it.
    pub fn default_error_color(&mut self, current: TextStyle, palette: &ErrorPalette) -> Color {
        self.capture_normal_style(current);
        palette.for_theme(Theme::for_text_color(current.default_color()))
    }

    /// Sets the color applied in color-based error mode.
    #[inline]
    pub fn set_error_color(&mut self, color: Color) {
        self.error_color = color;
    }

    /// The color applied in color-based error mode.
    #[inline]
    pub fn error_color(&self) -> Color {
        self.error_color
    }

    /// Sets (or clears) the message shown in message-based error mode.
    #[inline]
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// The configured error message.
    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True while the field is in [`ErrorMode::ErrorShown`].
    #[inline]
    pub fn is_showing_error(&self) -> bool {
        self.is_showing_error
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> ErrorMode {
        if self.is_showing_error {
            ErrorMode::ErrorShown
        } else {
            ErrorMode::Normal
        }
    }

    /// Enters or leaves error mode.
    ///
    /// `has_message_listener` tells whether the host has a message listener
    /// attached. With a listener and a message, the error is a message and
    /// the text color is left alone; otherwise it is a color swap.
    pub fn set_should_show_error(&mut self, show: bool, has_message_listener: bool) -> ErrorEffect {
        self.is_showing_error = show;

        match (&self.error_message, has_message_listener) {
            (Some(message), true) => {
                debug!(show, "error display via message");
                ErrorEffect::ShowMessage(show.then(|| message.clone()))
            }
            _ if show => {
                debug!(color = %self.error_color, "error display via color");
                ErrorEffect::ApplyColor(self.error_color)
            }
            _ => {
                debug!("restoring normal style");
                ErrorEffect::RestoreStyle(self.cached_normal_style)
            }
        }
    }
}
