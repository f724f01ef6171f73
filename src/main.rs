//! Airline Checkout - complete a flight booking from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

/// Checkout - Airline: Complete your booking
#[derive(Parser, Debug)]
#[command(name = "checkout")]
#[command(about = "Checkout - Airline: Complete your booking", long_about = None)]
struct Args {
    /// Print JSON events instead of showing the TUI
    #[arg(long)]
    headless: bool,

    /// Coupon code to submit (repeatable, headless only); "-" removes the coupon
    #[arg(long = "coupon", value_name = "CODE", requires = "headless")]
    coupons: Vec<String>,

    /// Settings file (default: .checkout/config.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default .checkout/config.toml and exit
    #[arg(long, conflicts_with_all = ["headless", "config"])]
    init_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    airline_checkout::init()?;

    let base_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        checkout_app::config::init_config_dir(&base_path)?;
        eprintln!(
            "Wrote {}",
            base_path
                .join(checkout_app::config::CONFIG_DIR)
                .join(checkout_app::config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    let settings = match airline_checkout::resolve_settings(&base_path, args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            if args.headless {
                airline_checkout::headless::HeadlessEvent::error(e.to_string(), true).emit();
            }
            return Err(e.into());
        }
    };

    if args.headless {
        airline_checkout::run_headless(settings, &args.coupons)?;
    } else {
        airline_checkout::run(settings)?;
    }

    Ok(())
}
