//! Card number grouping example.
//!
//! Run with: `cargo run --example formatting`

use card_entry::{format, CardBrand};

fn main() {
    println!("=== Card Number Grouping ===\n");

    // -------------------------------------------------------------------------
    // Grouping by brand
    // -------------------------------------------------------------------------
    println!("--- Grouping by brand ---\n");

    let cards = [
        ("4242424242424242", CardBrand::Visa),
        ("5555555555554444", CardBrand::Mastercard),
        ("378282246310005", CardBrand::Amex),
        ("6011111111111117", CardBrand::Discover),
    ];

    for (number, brand) in cards {
        let formatted = format::format_for_display(number, brand, " ");
        println!("  {}", brand);
        println!("    Input:  {}", number);
        println!("    Output: {}", formatted);
        println!();
    }

    // -------------------------------------------------------------------------
    // As the user types
    // -------------------------------------------------------------------------
    println!("--- As the user types (American Express) ---\n");

    let number = "378282246310005";
    for len in 1..=number.len() {
        let groups = format::group_card_number(&number[..len], CardBrand::Amex);
        let slots: Vec<String> = groups
            .slots()
            .iter()
            .map(|s| match s {
                Some(g) => format!("{:?}", g),
                None => "-".to_string(),
            })
            .collect();
        println!("  {:>2} chars: [{}]", len, slots.join(", "));
    }
    println!();

    // -------------------------------------------------------------------------
    // Truncation
    // -------------------------------------------------------------------------
    println!("--- Truncation ---\n");

    let long = "42424242424242424242";
    println!("  Input:  {} ({} chars)", long, long.len());
    println!(
        "  Output: {}",
        format::format_for_display(long, CardBrand::Visa, " ")
    );
    println!();

    // -------------------------------------------------------------------------
    // Strip formatting
    // -------------------------------------------------------------------------
    println!("--- Stripping Formatting ---\n");

    for formatted in ["4242 4242 4242 4242", "3782-822463-10005"] {
        println!("  '{}' -> '{}'", formatted, format::strip_formatting(formatted));
    }
}
