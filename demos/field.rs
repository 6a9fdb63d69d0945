//! Card field error display and delete-on-empty example.
//!
//! Run with: `cargo run --example field`

use card_entry::field::{Key, KeyAction, KeyEvent};
use card_entry::{CardField, Color, FieldConfig};
use std::time::Duration;

fn main() {
    println!("=== Card Field ===\n");

    // -------------------------------------------------------------------------
    // Color-based error display
    // -------------------------------------------------------------------------
    println!("--- Color error display ---\n");

    let mut field = CardField::with_config(FieldConfig::new().text_color(Color::BLACK));
    println!("  Default error color: {}", field.default_error_color());

    field.set_text("4242424242424241");
    field.set_should_show_error(true);
    println!("  Error shown, text color: {}", field.text_style().default_color());
    field.set_should_show_error(false);
    println!("  Restored, text color:    {}", field.text_style().default_color());
    println!();

    // -------------------------------------------------------------------------
    // Message-based error display
    // -------------------------------------------------------------------------
    println!("--- Message error display ---\n");

    let mut field =
        CardField::with_config(FieldConfig::new().error_message("Your card number is invalid."));
    field.set_error_message_listener(|message: Option<&str>| match message {
        Some(m) => println!("  Show message: {}", m),
        None => println!("  Hide message"),
    });
    field.set_should_show_error(true);
    field.set_should_show_error(false);
    println!();

    // -------------------------------------------------------------------------
    // Delete on empty
    // -------------------------------------------------------------------------
    println!("--- Delete on empty ---\n");

    let mut field = CardField::new();
    field.set_delete_empty_listener(|| println!("  Empty delete: move focus back"));
    field.set_text("4");
    field.on_key_event(KeyEvent::new(Key::Delete, KeyAction::Down));
    field.delete_surrounding_text(1, 0);
    field.delete_surrounding_text(1, 0);
    println!();

    // -------------------------------------------------------------------------
    // Delayed hint
    // -------------------------------------------------------------------------
    println!("--- Delayed hint ---\n");

    let mut field = CardField::with_config(
        FieldConfig::new()
            .hint("Card number")
            .delayed_hint("4242 4242 4242 4242", Duration::from_millis(1500)),
    );
    let step = Duration::from_millis(500);
    for tick in 0..4u32 {
        println!("  t={:>4}ms hint={:?}", (step * tick).as_millis(), field.hint());
        field.advance(step);
    }
    field.detach();
}
