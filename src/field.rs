//! The card entry text field model.
//!
//! `CardField` holds everything a platform text field needs to decide on
//! its own: the raw text and cursor, its listeners, its error display state
//! and its pending delayed hints. The host forwards input events in and
//! reads decisions back out; it never has to re-derive them.
//!
//! # Delete on empty
//!
//! Users expect backspace in an empty card field to move focus back to the
//! previous field. Platforms report that press along two different paths
//! (a hardware key event, or a soft keyboard asking to delete surrounding
//! text), so both hooks funnel into the same zero-length check and the same
//! [`DeleteEmptyListener`].
//!
//! # Example
//!
//! ```
//! use card_entry::field::{CardField, Key, KeyAction, KeyEvent};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let deletes = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&deletes);
//!
//! let mut field = CardField::new();
//! field.set_delete_empty_listener(move || counter.set(counter.get() + 1));
//!
//! field.on_key_event(KeyEvent::new(Key::Delete, KeyAction::Down));
//! assert_eq!(deletes.get(), 1);
//!
//! field.set_text("4242");
//! field.on_key_event(KeyEvent::new(Key::Delete, KeyAction::Down));
//! assert_eq!(deletes.get(), 1);
//! ```

use crate::color::{Color, TextStyle};
use crate::config::FieldConfig;
use crate::error_state::{ErrorEffect, ErrorMode, ErrorPalette, FieldErrorState, Theme};
use crate::format::MAX_GROUPED_CHARS;
use crate::timer::{DeferredQueue, TimerHandle};
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// Bytes reserved up front: a full card number even in four-byte characters.
const INITIAL_CAPACITY: usize = MAX_GROUPED_CHARS * 4;

/// Receives the full text after each completed mutation.
pub trait AfterTextChangedListener {
    /// Called once per mutation with the final text.
    fn on_text_changed(&mut self, text: &str);
}

impl<F: FnMut(&str)> AfterTextChangedListener for F {
    fn on_text_changed(&mut self, text: &str) {
        self(text)
    }
}

/// Receives delete presses made while the field is empty.
pub trait DeleteEmptyListener {
    /// Called once per delete action on an empty field.
    fn on_delete_empty(&mut self);
}

impl<F: FnMut()> DeleteEmptyListener for F {
    fn on_delete_empty(&mut self) {
        self()
    }
}

/// Displays (or clears, on `None`) the field's error message.
pub trait ErrorMessageListener {
    /// Called on every error toggle while a message is configured.
    fn display_error_message(&mut self, message: Option<&str>);
}

impl<F: FnMut(Option<&str>)> ErrorMessageListener for F {
    fn display_error_message(&mut self, message: Option<&str>) {
        self(message)
    }
}

/// A hardware key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Backspace / delete-previous.
    Delete,
    /// Delete-next.
    ForwardDelete,
    /// Any other platform key code.
    Other(u32),
}

/// Key press phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key went down.
    Down,
    /// Key came up.
    Up,
}

/// A hardware key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key.
    pub key: Key,
    /// Press or release.
    pub action: KeyAction,
}

impl KeyEvent {
    /// Creates a key event.
    #[inline]
    pub const fn new(key: Key, action: KeyAction) -> Self {
        Self { key, action }
    }
}

#[derive(Debug, Clone, Copy)]
enum DeleteSource {
    HardwareKey,
    SoftKeyboard,
}

#[derive(Debug)]
enum Deferred {
    SetHint(String),
}

/// A card entry text field.
///
/// The raw text is wiped from memory when the field is dropped, and
/// `Debug` output never contains it.
pub struct CardField {
    text: String,
    /// Cursor position, in characters.
    cursor: usize,
    hint: Option<String>,
    text_style: TextStyle,
    palette: ErrorPalette,
    error: FieldErrorState,
    refresh_requested: bool,
    /// True while `text_style` holds the error color rather than the normal style.
    painting_error: bool,
    deferred: DeferredQueue<Deferred>,
    after_text_changed: Option<Box<dyn AfterTextChangedListener>>,
    delete_empty: Option<Box<dyn DeleteEmptyListener>>,
    error_message_listener: Option<Box<dyn ErrorMessageListener>>,
}

impl Default for CardField {
    fn default() -> Self {
        Self::new()
    }
}

impl CardField {
    /// Creates an empty field with black text and default settings.
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default())
    }

    /// Creates an empty field from `config`.
    ///
    /// The normal style is captured immediately and the error color
    /// defaults to the palette's pick for that style. A configured delayed
    /// hint is scheduled relative to creation.
    pub fn with_config(config: FieldConfig) -> Self {
        let text_style = TextStyle::solid(config.text_color.unwrap_or(Color::BLACK));
        let mut error = FieldErrorState::new(text_style);
        let default_error_color = error.default_error_color(text_style, &config.palette);
        error.set_error_color(config.error_color.unwrap_or(default_error_color));
        error.set_error_message(config.error_message);

        let mut field = Self {
            text: String::with_capacity(INITIAL_CAPACITY),
            cursor: 0,
            hint: config.hint,
            text_style,
            palette: config.palette,
            error,
            refresh_requested: false,
            painting_error: false,
            deferred: DeferredQueue::new(),
            after_text_changed: None,
            delete_empty: None,
            error_message_listener: None,
        };

        if let Some(delayed) = config.delayed_hint {
            let delay = delayed.delay();
            field.set_hint_delayed(delayed.hint, delay);
        }

        field
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// The current text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True if the field holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position, in characters.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the text length.
    pub fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.len());
    }

    /// Replaces the whole text and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text.zeroize();
        self.reserve_zeroizing(text.len());
        self.text.push_str(text);
        self.cursor = self.len();
        self.text_changed();
    }

    /// Inserts `text` at the cursor and moves the cursor past it.
    pub fn insert(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor);
        self.reserve_zeroizing(text.len());
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
        self.text_changed();
    }

    /// Soft keyboard hook: deletes `before` characters before the cursor
    /// and `after` characters after it.
    ///
    /// If the field is empty when the request arrives, the delete-empty
    /// listener is notified first. Returns true, as the request is always
    /// accepted.
    pub fn delete_surrounding_text(&mut self, before: usize, after: usize) -> bool {
        self.notify_if_deleting_empty(DeleteSource::SoftKeyboard);

        let start = self.cursor.saturating_sub(before);
        let end = self.cursor.saturating_add(after).min(self.len());
        if start < end {
            let range = self.byte_offset(start)..self.byte_offset(end);
            self.text.replace_range(range, "");
            self.cursor = start;
            self.text_changed();
        }
        true
    }

    /// Hardware keyboard hook.
    ///
    /// A [`Key::Delete`] press on an empty field notifies the delete-empty
    /// listener. The event is never consumed: the return value is always
    /// false so the host runs its default key handling afterwards.
    pub fn on_key_event(&mut self, event: KeyEvent) -> bool {
        if event.key == Key::Delete && event.action == KeyAction::Down {
            self.notify_if_deleting_empty(DeleteSource::HardwareKey);
        }
        false
    }

    fn notify_if_deleting_empty(&mut self, source: DeleteSource) {
        if !self.text.is_empty() {
            return;
        }
        if let Some(listener) = self.delete_empty.as_mut() {
            debug!(?source, "delete on empty field");
            listener.on_delete_empty();
        }
    }

    fn text_changed(&mut self) {
        trace!(len = self.text.len(), "text changed");
        if let Some(listener) = self.after_text_changed.as_mut() {
            listener.on_text_changed(&self.text);
        }
    }

    /// Makes room for `additional` bytes without letting `String` grow in
    /// place, so the old allocation is wiped before it is freed.
    fn reserve_zeroizing(&mut self, additional: usize) {
        let needed = self.text.len().saturating_add(additional);
        if needed <= self.text.capacity() {
            return;
        }
        let mut grown = String::with_capacity(needed.max(self.text.capacity() * 2));
        grown.push_str(&self.text);
        self.text.zeroize();
        self.text = grown;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Attaches the after-text-changed listener, replacing any previous one.
    pub fn set_after_text_changed_listener<L>(&mut self, listener: L)
    where
        L: AfterTextChangedListener + 'static,
    {
        self.after_text_changed = Some(Box::new(listener));
    }

    /// Detaches the after-text-changed listener.
    pub fn remove_after_text_changed_listener(&mut self) {
        self.after_text_changed = None;
    }

    /// Attaches the delete-empty listener, replacing any previous one.
    pub fn set_delete_empty_listener<L>(&mut self, listener: L)
    where
        L: DeleteEmptyListener + 'static,
    {
        self.delete_empty = Some(Box::new(listener));
    }

    /// Detaches the delete-empty listener.
    pub fn remove_delete_empty_listener(&mut self) {
        self.delete_empty = None;
    }

    /// Attaches the error message listener, replacing any previous one.
    pub fn set_error_message_listener<L>(&mut self, listener: L)
    where
        L: ErrorMessageListener + 'static,
    {
        self.error_message_listener = Some(Box::new(listener));
    }

    /// Detaches the error message listener.
    pub fn remove_error_message_listener(&mut self) {
        self.error_message_listener = None;
    }

    // ------------------------------------------------------------------
    // Style and error display
    // ------------------------------------------------------------------

    /// The style the field should currently render with.
    #[inline]
    pub fn text_style(&self) -> TextStyle {
        self.text_style
    }

    /// Applies an externally changed style and snapshots it as the normal
    /// style.
    ///
    /// While the error color is painted the field keeps showing it; the new
    /// style is what clearing the error restores.
    pub fn set_text_style(&mut self, style: TextStyle) {
        self.error.capture_normal_style(style);
        if !self.painting_error {
            self.text_style = style;
            self.refresh_requested = true;
        }
    }

    /// Snapshots the current style as the one to restore after an error.
    ///
    /// Does nothing while the error color is painted, as the current style
    /// is then the error style.
    pub fn capture_normal_style(&mut self) {
        if !self.painting_error {
            self.error.capture_normal_style(self.text_style);
        }
    }

    /// The most recent normal style snapshot.
    #[inline]
    pub fn cached_normal_style(&self) -> TextStyle {
        self.error.cached_normal_style()
    }

    /// The palette error color matching the current text color.
    ///
    /// The text color may have been changed since creation, so this
    /// re-snapshots the normal style on every call made in
    /// [`ErrorMode::Normal`]. While an error is shown the existing snapshot
    /// picks the color and is left as it is.
    pub fn default_error_color(&mut self) -> Color {
        match self.error_mode() {
            ErrorMode::Normal => self.error.default_error_color(self.text_style, &self.palette),
            ErrorMode::ErrorShown => {
                let normal = self.error.cached_normal_style();
                self.palette
                    .for_theme(Theme::for_text_color(normal.default_color()))
            }
        }
    }

    /// Sets the color used for color-based error display.
    pub fn set_error_color(&mut self, color: Color) {
        self.error.set_error_color(color);
    }

    /// Sets (or clears) the message used for message-based error display.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error.set_error_message(message);
    }

    /// Whether the field is currently showing an error.
    #[inline]
    pub fn should_show_error(&self) -> bool {
        self.error.is_showing_error()
    }

    /// Current error mode.
    #[inline]
    pub fn error_mode(&self) -> ErrorMode {
        self.error.mode()
    }

    /// Puts the field into or out of error mode.
    ///
    /// With an error message and a message listener configured, the message
    /// (or `None`) is forwarded and the text color is left alone. Otherwise
    /// the error color is applied, or the normal style restored, and a
    /// refresh is requested.
    pub fn set_should_show_error(&mut self, show: bool) {
        let has_listener = self.error_message_listener.is_some();
        match self.error.set_should_show_error(show, has_listener) {
            ErrorEffect::ShowMessage(message) => {
                if let Some(listener) = self.error_message_listener.as_mut() {
                    listener.display_error_message(message.as_deref());
                }
            }
            ErrorEffect::ApplyColor(color) => {
                self.text_style = TextStyle::solid(color);
                self.painting_error = true;
                self.refresh_requested = true;
            }
            ErrorEffect::RestoreStyle(style) => {
                self.text_style = style;
                self.painting_error = false;
                self.refresh_requested = true;
            }
        }
    }

    /// Returns and clears the pending visual refresh request.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    // ------------------------------------------------------------------
    // Hints and deferred work
    // ------------------------------------------------------------------

    /// The current hint.
    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Sets the hint immediately.
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = Some(hint.into());
    }

    /// Sets the hint once `delay` has elapsed on this field's clock.
    pub fn set_hint_delayed(&mut self, hint: impl Into<String>, delay: Duration) -> TimerHandle {
        self.deferred.schedule(delay, Deferred::SetHint(hint.into()))
    }

    /// Cancels one pending delayed change.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.deferred.cancel(handle)
    }

    /// Number of pending delayed changes.
    #[inline]
    pub fn pending_callbacks(&self) -> usize {
        self.deferred.pending()
    }

    /// Advances this field's clock and applies whatever came due.
    pub fn advance(&mut self, elapsed: Duration) {
        for deferred in self.deferred.advance(elapsed) {
            match deferred {
                Deferred::SetHint(hint) => self.hint = Some(hint),
            }
        }
    }

    /// Teardown hook: cancels every pending delayed change.
    pub fn detach(&mut self) {
        debug!(pending = self.deferred.pending(), "detaching field");
        self.deferred.cancel_all();
    }
}

impl fmt::Debug for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the card number itself
        f.debug_struct("CardField")
            .field("len", &self.len())
            .field("cursor", &self.cursor)
            .field("hint", &self.hint)
            .field("text_style", &self.text_style)
            .field("error", &self.error.mode())
            .field("pending_callbacks", &self.deferred.pending())
            .finish()
    }
}

impl Drop for CardField {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Rc<RefCell<Vec<T>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Rc::clone(&log), log)
    }

    fn delete_down() -> KeyEvent {
        KeyEvent::new(Key::Delete, KeyAction::Down)
    }

    #[test]
    fn test_after_text_changed_fires_once_per_mutation() {
        let (log, sink) = recorder::<String>();
        let mut field = CardField::new();
        field.set_after_text_changed_listener(move |t: &str| sink.borrow_mut().push(t.to_string()));

        field.set_text("4242");
        field.insert("42");
        field.delete_surrounding_text(1, 0);

        assert_eq!(*log.borrow(), vec!["4242", "424242", "42424"]);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut field = CardField::new();
        field.set_text("4444");
        field.set_cursor(2);
        field.insert("22");
        assert_eq!(field.text(), "442244");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut field = CardField::new();
        field.set_text("12");
        field.set_cursor(10);
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_delete_surrounding_text_around_cursor() {
        let mut field = CardField::new();
        field.set_text("123456");
        field.set_cursor(3);
        assert!(field.delete_surrounding_text(1, 2));
        assert_eq!(field.text(), "126");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_delete_surrounding_text_clamps() {
        let mut field = CardField::new();
        field.set_text("12");
        field.delete_surrounding_text(10, 10);
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_noop_delete_does_not_fire_text_changed() {
        let (log, sink) = recorder::<String>();
        let mut field = CardField::new();
        field.set_after_text_changed_listener(move |t: &str| sink.borrow_mut().push(t.to_string()));

        field.delete_surrounding_text(1, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_delete_empty_from_both_paths() {
        let (log, sink) = recorder::<()>();
        let mut field = CardField::new();
        field.set_delete_empty_listener(move || sink.borrow_mut().push(()));

        field.on_key_event(delete_down());
        assert_eq!(log.borrow().len(), 1);

        field.delete_surrounding_text(1, 0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_delete_empty_ignores_other_keys_and_key_up() {
        let (log, sink) = recorder::<()>();
        let mut field = CardField::new();
        field.set_delete_empty_listener(move || sink.borrow_mut().push(()));

        field.on_key_event(KeyEvent::new(Key::Delete, KeyAction::Up));
        field.on_key_event(KeyEvent::new(Key::ForwardDelete, KeyAction::Down));
        field.on_key_event(KeyEvent::new(Key::Other(66), KeyAction::Down));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_delete_with_content_never_fires() {
        let (log, sink) = recorder::<()>();
        let mut field = CardField::new();
        field.set_delete_empty_listener(move || sink.borrow_mut().push(()));
        field.set_text("4");

        field.on_key_event(delete_down());
        // Deleting the last character is not a delete-on-empty.
        field.delete_surrounding_text(1, 0);
        assert!(log.borrow().is_empty());
        assert!(field.is_empty());

        field.delete_surrounding_text(1, 0);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_key_events_are_never_consumed() {
        let mut field = CardField::new();
        field.set_delete_empty_listener(|| {});
        assert!(!field.on_key_event(delete_down()));
    }

    #[test]
    fn test_removed_listener_is_not_called() {
        let (log, sink) = recorder::<()>();
        let mut field = CardField::new();
        field.set_delete_empty_listener(move || sink.borrow_mut().push(()));
        field.remove_delete_empty_listener();
        field.on_key_event(delete_down());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_color_error_mode() {
        let red = Color::from_rgb(255, 0, 0);
        let mut field = CardField::new();
        field.set_error_color(red);
        let normal = field.text_style();

        field.set_should_show_error(true);
        assert_eq!(field.error_mode(), ErrorMode::ErrorShown);
        assert_eq!(field.text_style().default_color(), red);
        assert!(field.take_refresh_request());
        assert!(!field.take_refresh_request());

        field.set_should_show_error(false);
        assert_eq!(field.error_mode(), ErrorMode::Normal);
        assert_eq!(field.text_style(), normal);
        assert!(field.take_refresh_request());
    }

    #[test]
    fn test_message_error_mode_leaves_color() {
        let (log, sink) = recorder::<Option<String>>();
        let mut field = CardField::new();
        field.set_error_message(Some("Invalid".to_string()));
        field.set_error_message_listener(move |m: Option<&str>| {
            sink.borrow_mut().push(m.map(str::to_string))
        });
        let style = field.text_style();

        field.set_should_show_error(true);
        assert!(field.should_show_error());
        field.set_should_show_error(false);
        assert!(!field.should_show_error());

        assert_eq!(*log.borrow(), vec![Some("Invalid".to_string()), None]);
        assert_eq!(field.text_style(), style);
        assert!(!field.take_refresh_request());
    }

    #[test]
    fn test_default_error_color_tracks_style() {
        let mut field = CardField::new();
        let palette = ErrorPalette::default();
        assert_eq!(field.default_error_color(), palette.light_theme);

        let white = TextStyle::solid(Color::WHITE);
        field.set_text_style(white);
        assert_eq!(field.default_error_color(), palette.dark_theme);
        assert_eq!(field.cached_normal_style(), white);
    }

    #[test]
    fn test_error_color_query_while_shown_keeps_snapshot() {
        let mut field = CardField::new();
        let normal = field.text_style();

        field.set_should_show_error(true);
        assert_eq!(field.default_error_color(), ErrorPalette::default().light_theme);
        assert_eq!(field.cached_normal_style(), normal);

        field.set_should_show_error(false);
        assert_eq!(field.text_style(), normal);
        assert_eq!(field.text_style().default_color(), Color::BLACK);
    }

    #[test]
    fn test_capture_while_shown_is_ignored() {
        let mut field = CardField::new();
        let normal = field.text_style();

        field.set_should_show_error(true);
        field.capture_normal_style();
        field.set_should_show_error(false);
        assert_eq!(field.text_style(), normal);
    }

    #[test]
    fn test_restyle_is_restored_after_error() {
        let blue = TextStyle::solid(Color::from_rgb(0, 0, 0xFF));
        let mut field = CardField::new();
        field.set_text_style(blue);
        assert_eq!(field.cached_normal_style(), blue);

        field.set_should_show_error(true);
        field.set_should_show_error(false);
        assert_eq!(field.text_style(), blue);
    }

    #[test]
    fn test_restyle_while_error_painted() {
        let red = Color::from_rgb(255, 0, 0);
        let blue = TextStyle::solid(Color::from_rgb(0, 0, 0xFF));
        let mut field = CardField::new();
        field.set_error_color(red);

        field.set_should_show_error(true);
        field.take_refresh_request();
        field.set_text_style(blue);
        assert_eq!(field.text_style().default_color(), red);
        assert!(!field.take_refresh_request());

        field.set_should_show_error(false);
        assert_eq!(field.text_style(), blue);
    }

    #[test]
    fn test_restyle_while_message_shown_applies_directly() {
        let blue = TextStyle::solid(Color::from_rgb(0, 0, 0xFF));
        let mut field = CardField::new();
        field.set_error_message(Some("Invalid".to_string()));
        field.set_error_message_listener(|_: Option<&str>| {});

        field.set_should_show_error(true);
        field.set_text_style(blue);
        assert_eq!(field.text_style(), blue);
        field.set_should_show_error(false);
        assert_eq!(field.text_style(), blue);
    }

    #[test]
    fn test_buffer_reserved_up_front() {
        let mut field = CardField::new();
        assert!(field.text.capacity() >= INITIAL_CAPACITY);

        let before = field.text.capacity();
        for c in "4242424242424242".chars() {
            field.insert(c.encode_utf8(&mut [0; 4]));
        }
        assert_eq!(field.text.capacity(), before);
    }

    #[test]
    fn test_buffer_grows_past_reservation() {
        let mut field = CardField::new();
        let long = "4".repeat(INITIAL_CAPACITY + 10);
        field.set_text("42");
        field.set_cursor(1);
        field.insert(&long);
        assert_eq!(field.len(), INITIAL_CAPACITY + 12);
        assert!(field.text().starts_with("44"));
        assert!(field.text().ends_with('2'));

        field.set_text(&long);
        assert_eq!(field.text(), long);
    }

    #[test]
    fn test_config_is_applied() {
        let config = FieldConfig::new()
            .text_color(Color::WHITE)
            .error_message("Bad number")
            .hint("Card number");
        let field = CardField::with_config(config);

        assert_eq!(field.text_style().default_color(), Color::WHITE);
        assert_eq!(field.hint(), Some("Card number"));
        assert_eq!(field.cached_normal_style(), TextStyle::solid(Color::WHITE));
    }

    #[test]
    fn test_default_error_color_from_config_palette() {
        let mut field = CardField::with_config(FieldConfig::new().text_color(Color::WHITE));
        field.set_should_show_error(true);
        assert_eq!(
            field.text_style().default_color(),
            ErrorPalette::default().dark_theme
        );
    }

    #[test]
    fn test_delayed_hint() {
        let mut field = CardField::new();
        field.set_hint("Card number");
        field.set_hint_delayed("4242 4242 4242 4242", Duration::from_millis(1000));

        field.advance(Duration::from_millis(999));
        assert_eq!(field.hint(), Some("Card number"));
        field.advance(Duration::from_millis(1));
        assert_eq!(field.hint(), Some("4242 4242 4242 4242"));
    }

    #[test]
    fn test_cancel_delayed_hint() {
        let mut field = CardField::new();
        let handle = field.set_hint_delayed("later", Duration::from_millis(10));
        assert!(field.cancel(handle));
        field.advance(Duration::from_millis(10));
        assert_eq!(field.hint(), None);
    }

    #[test]
    fn test_detach_cancels_pending() {
        let config = FieldConfig::new().delayed_hint("later", Duration::from_millis(10));
        let mut field = CardField::with_config(config);
        field.set_hint_delayed("also later", Duration::from_millis(20));
        assert_eq!(field.pending_callbacks(), 2);

        field.detach();
        field.detach();
        assert_eq!(field.pending_callbacks(), 0);
        field.advance(Duration::from_secs(1));
        assert_eq!(field.hint(), None);
    }

    #[test]
    fn test_debug_hides_text() {
        let mut field = CardField::new();
        field.set_text("4242424242424242");
        let debug = format!("{:?}", field);
        assert!(!debug.contains("4242424242424242"));
        assert!(debug.contains("len: 16"));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = CardField::new();
        field.set_text("é1");
        field.set_cursor(1);
        field.delete_surrounding_text(1, 0);
        assert_eq!(field.text(), "1");
    }
}
