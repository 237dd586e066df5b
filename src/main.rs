use anyhow::Result;
use clap::Parser;
use std::fs;
use tracing::info;

use quote_engine::{
    config::Settings,
    handlers::quote::{QuoteForm, handle_quote, render_summary},
};

fn init_tracing() {
    tracing_subscriber::fmt::init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(
        long,
        help = "(Optional) Sets the price table configuration file path.",
        required = false
    )]
    pub config: Option<String>,

    #[arg(
        long,
        help = "(Optional) Reads the quote form as JSON from a file, overriding the field flags.",
        required = false
    )]
    pub input: Option<String>,

    #[arg(
        long,
        help = "Adds the product category (shutters or blinds).",
        required_unless_present = "input"
    )]
    pub category: Option<String>,

    #[arg(
        long,
        help = "Adds the style name within the category.",
        required_unless_present = "input"
    )]
    pub style: Option<String>,

    #[arg(long, help = "(Optional) Adds the panel width in centimeters.", required = false)]
    pub width: Option<String>,

    #[arg(long, help = "(Optional) Adds the panel height in centimeters.", required = false)]
    pub height: Option<String>,

    #[arg(long, help = "(Optional) Adds the number of windows.", required = false)]
    pub quantity: Option<String>,

    #[arg(
        long = "extra",
        help = "(Optional) Adds a flat-fee extra. May be repeated.",
        required = false
    )]
    pub extras: Vec<String>,

    #[arg(
        long,
        help = "(Optional) Sets flag to print the result as JSON.",
        required = false
    )]
    pub json: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let settings = Settings::load(&args.config)?;

    let form = match &args.input {
        Some(path) => serde_json::from_str::<QuoteForm>(&fs::read_to_string(path)?)?,
        None => QuoteForm {
            category: args.category.clone().unwrap_or_default(),
            style: args.style.clone().unwrap_or_default(),
            width: args.width.clone(),
            height: args.height.clone(),
            quantity: args.quantity.clone(),
            extras: args.extras.clone(),
        },
    };

    let result = handle_quote(form, &settings.pricing)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_summary(&result));
    }

    info!("Quote rendered");

    Ok(())
}
