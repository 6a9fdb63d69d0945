//! CLI tool for exercising card field logic.
//!
//! # Usage
//!
//! ```bash
//! # Group a card number for display
//! cardfield group 378282246310005 --brand amex
//!
//! # Show every slot, including unset ones
//! cardfield group 42424 --slots
//!
//! # Inspect a text color
//! cardfield color "#DE000000"
//!
//! # Check whether a CVC is complete
//! cardfield cvc 1234 --brand amex
//! ```
//!
//! Set `RUST_LOG=card_entry=debug` to see state transitions.

use card_entry::{cvv, error_state::Theme, format, CardBrand, Color, ErrorPalette};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardfield")]
#[command(author, version, about = "Card entry field formatting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a card number for display
    Group {
        /// Raw card number (truncated to 16 characters)
        card_number: String,

        /// Card brand whose grouping to use
        #[arg(short, long, default_value = "unknown")]
        brand: BrandArg,

        /// Separator between groups
        #[arg(short, long, default_value = " ")]
        separator: String,

        /// Print each slot on its own line
        #[arg(long)]
        slots: bool,
    },

    /// Inspect a text color (#RRGGBB or #AARRGGBB)
    Color {
        /// Color to inspect
        color: String,
    },

    /// Check whether a CVC has the brand's full length
    Cvc {
        /// CVC text
        cvc: String,

        /// Card brand (affects expected length)
        #[arg(short, long, default_value = "unknown")]
        brand: BrandArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    DinersClub,
    Jcb,
    UnionPay,
    Unknown,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::Mastercard,
            BrandArg::Amex => CardBrand::Amex,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::DinersClub => CardBrand::DinersClub,
            BrandArg::Jcb => CardBrand::Jcb,
            BrandArg::UnionPay => CardBrand::UnionPay,
            BrandArg::Unknown => CardBrand::Unknown,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_entry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Group {
            card_number,
            brand,
            separator,
            slots,
        } => {
            cmd_group(&card_number, brand.into(), &separator, slots);
        }
        Commands::Color { color } => {
            cmd_color(&color);
        }
        Commands::Cvc { cvc, brand } => {
            cmd_cvc(&cvc, brand.into());
        }
    }
}

fn cmd_group(card_number: &str, brand: CardBrand, separator: &str, slots: bool) {
    let groups = format::group_card_number(card_number, brand);
    tracing::debug!(%brand, defined = groups.defined_count(), "grouped");

    if slots {
        for (i, slot) in groups.slots().iter().enumerate() {
            match slot {
                Some(group) => println!("{}: \"{}\"", i, group),
                None => println!("{}: (unset)", i),
            }
        }
    } else {
        println!("{}", groups.join(separator));
    }
}

fn cmd_color(input: &str) {
    let color: Color = match input.parse() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let theme = Theme::for_text_color(color);
    let palette = ErrorPalette::default();

    println!("Color: {}", color);
    println!("Luminance: {:.3}", color.luminance() / 255.0);
    println!("Dark: {}", if color.is_dark() { "yes" } else { "no" });
    println!("Transparent: {}", if color.is_transparent() { "yes" } else { "no" });
    println!("Theme: {:?}", theme);
    println!("Default Error Color: {}", palette.for_theme(theme));
}

fn cmd_cvc(cvc: &str, brand: CardBrand) {
    if cvv::is_cvc_maximal_length(brand, Some(cvc)) {
        println!("Complete: yes ({} digits)", brand.cvv_length());
        std::process::exit(0);
    } else {
        println!("Complete: no (expected {} digits)", brand.cvv_length());
        std::process::exit(1);
    }
}
