//! Fuzz target for field editing.
//!
//! Drives a field with an arbitrary sequence of edits and checks that the
//! cursor stays in bounds and delete-on-empty only fires on an empty field.

#![no_main]

use arbitrary::Arbitrary;
use card_entry::field::{CardField, Key, KeyAction, KeyEvent};
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Arbitrary, Debug)]
enum Op {
    SetText(String),
    Insert(String),
    SetCursor(u8),
    DeleteSurrounding(u8, u8),
    KeyDelete,
    ShowError(bool),
    HintDelayed(u16),
    Advance(u16),
    Detach,
}

fuzz_target!(|ops: Vec<Op>| {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);

    let mut field = CardField::new();
    field.set_delete_empty_listener(move || flag.set(true));

    for op in ops {
        let was_empty = field.is_empty();
        fired.set(false);

        match op {
            Op::SetText(s) => field.set_text(&s),
            Op::Insert(s) => field.insert(&s),
            Op::SetCursor(pos) => field.set_cursor(pos as usize),
            Op::DeleteSurrounding(before, after) => {
                field.delete_surrounding_text(before as usize, after as usize);
            }
            Op::KeyDelete => {
                field.on_key_event(KeyEvent::new(Key::Delete, KeyAction::Down));
            }
            Op::ShowError(show) => field.set_should_show_error(show),
            Op::HintDelayed(ms) => {
                field.set_hint_delayed("hint", Duration::from_millis(ms as u64));
            }
            Op::Advance(ms) => field.advance(Duration::from_millis(ms as u64)),
            Op::Detach => field.detach(),
        }

        assert!(field.cursor() <= field.len());
        if fired.get() {
            assert!(was_empty, "delete-empty fired on a non-empty field");
        }
    }
});
