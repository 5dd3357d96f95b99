//! CLI tool for payment form input.
//!
//! # Usage
//!
//! ```bash
//! # Format a field as if it had just been typed
//! payform format card_number 4111111111111111
//!
//! # Validate one field
//! payform validate expiry_date 06/24 --today 24-06
//!
//! # Luhn check and network detection
//! payform luhn 4532015112830366
//! payform detect 340000000000009
//!
//! # Validate a whole form read from JSON
//! payform check --file form.json --json
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `warn`) and goes to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use payform::expiry::{Clock, SystemClock};
use payform::{detect_card_type, luhn, mask, Field, FormReport, FormValues, YearMonth};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "payform")]
#[command(author, version, about = "Payment form formatting and validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a field's keystroke formatter
    Format {
        /// Field name (card_number, expiry_date, cvv, cardholder_name, amount)
        field: Field,

        /// Text to format
        value: String,
    },

    /// Validate one field
    Validate {
        /// Field name (card_number, expiry_date, cvv, cardholder_name, amount)
        field: Field,

        /// Field text
        value: String,

        /// Current month as YY-MM (defaults to the system clock)
        #[arg(short, long)]
        today: Option<YearMonth>,
    },

    /// Check a digit string with the Luhn algorithm
    Luhn {
        /// Digits to check
        number: String,
    },

    /// Detect the card network from a (partial) number
    Detect {
        /// Card number
        number: String,
    },

    /// Validate a whole form read from a JSON file
    Check {
        /// JSON object with card_number, expiry_date, cvv, cardholder_name, amount
        #[arg(short, long)]
        file: PathBuf,

        /// Run each field's formatter before validating
        #[arg(long)]
        formatted: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Current month as YY-MM (defaults to the system clock)
        #[arg(short, long)]
        today: Option<YearMonth>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format { field, value } => cmd_format(field, &value),
        Commands::Validate {
            field,
            value,
            today,
        } => cmd_validate(field, &value, resolve_today(today)),
        Commands::Luhn { number } => cmd_luhn(&number),
        Commands::Detect { number } => cmd_detect(&number),
        Commands::Check {
            file,
            formatted,
            json,
            today,
        } => cmd_check(&file, formatted, json, resolve_today(today)),
    }
}

fn resolve_today(today: Option<YearMonth>) -> YearMonth {
    today.unwrap_or_else(|| SystemClock.today())
}

fn cmd_format(field: Field, value: &str) {
    match field.format(value) {
        Some(formatted) => println!("{}", formatted),
        None => println!("{}", value),
    }
}

fn cmd_validate(field: Field, value: &str, today: YearMonth) {
    match field.validate(value, today) {
        Ok(()) => {
            println!("Valid: yes");
            if field == Field::CardNumber {
                println!("Card Type: {}", detect_card_type(value).display_name());
                println!("Masked: {}", mask::mask_digits(value));
            }
            std::process::exit(0);
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_luhn(number: &str) {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if luhn::passes(&digits) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_detect(number: &str) {
    let card_type = detect_card_type(number);
    println!("Detected Card Type: {}", card_type.display_name());
    if !card_type.is_known() {
        std::process::exit(1);
    }
}

fn cmd_check(file: &Path, formatted: bool, json: bool, today: YearMonth) {
    let values = match read_values(file) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let values = if formatted { values.formatted() } else { values };

    tracing::debug!(file = %file.display(), %today, "checking form");
    let report = payform::validate_form(&values, today);

    if json {
        print_report_json(&report);
    } else {
        print_report_text(&report);
    }

    std::process::exit(if report.is_valid() { 0 } else { 1 });
}

fn read_values(file: &Path) -> Result<FormValues, String> {
    let text = fs::read_to_string(file).map_err(|e| format!("{}: {}", file.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("{}: {}", file.display(), e))
}

fn print_report_text(report: &FormReport) {
    println!("Valid: {}", if report.is_valid() { "yes" } else { "no" });
    println!("Card Type: {}", report.card_type().display_name());
    if let Some(last_four) = report.last_four() {
        println!("Last Four: {}", last_four);
    }
    if let Some(amount) = report.amount() {
        println!("Amount: {:.2}", amount);
    }
    for (field, result) in report.results() {
        match result {
            Ok(()) => println!("  {:<16} ok", field.name()),
            Err(e) => println!("  {:<16} {}", field.name(), e),
        }
    }
}

fn print_report_json(report: &FormReport) {
    let errors: serde_json::Map<String, serde_json::Value> = report
        .errors()
        .into_iter()
        .map(|(field, e)| (field.name().to_string(), e.message().into()))
        .collect();

    let body = serde_json::json!({
        "valid": report.is_valid(),
        "card_type": report.card_type().name(),
        "last_four": report.last_four(),
        "amount": report.amount(),
        "errors": errors,
    });

    match serde_json::to_string_pretty(&body) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
