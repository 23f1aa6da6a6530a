use capconvert::config::Config;
use capconvert::locale::LocaleFormat;
use capconvert::sync::{FieldView, SyncOutcome, Synchronizer};
use capconvert::units::{self, Unit};
use capconvert::CapError;
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "capconvert.toml";

#[derive(Parser)]
#[command(name = "capconvert")]
#[command(about = "Capacitance converter between nF, pF, uF and mF", long_about = None)]
struct Cli {
    /// Locale tag overriding the OS locale (e.g. "de-DE")
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Config file (default: ./capconvert.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log each synchronization pass
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one value into all four units
    Convert {
        /// Value with unit (e.g. "4.7uF"), or a bare number together with --unit
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Unit of a bare number (nF, pF, uF, mF)
        #[arg(short, long)]
        unit: Option<String>,

        /// Print raw values as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Read "<unit> <text>" edit events from stdin and show the four fields after each
    Session,

    /// Show the active decimal and grouping separators
    Locale,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| {
        let locale = config.resolve_locale(cli.locale.as_deref())?;
        match cli.command {
            Commands::Convert { quantity, unit, json } => {
                convert_quantity(&locale, &quantity, unit.as_deref(), json)
            }
            Commands::Session => run_session(locale),
            Commands::Locale => {
                print_locale(&locale);
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<Config, CapError> {
    match path {
        Some(path) => Config::load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load_from_file(DEFAULT_CONFIG_FILE)
        }
        None => Ok(Config::empty()),
    }
}

fn convert_quantity(
    locale: &LocaleFormat,
    quantity: &str,
    unit: Option<&str>,
    json: bool,
) -> Result<(), CapError> {
    let (value, unit) = match unit {
        Some(unit) => {
            let value = locale
                .classify_input(quantity)
                .value()
                .ok_or_else(|| CapError::UnparsableInput(quantity.to_string()))?;
            (value, unit.parse::<Unit>()?)
        }
        None => units::parse_quantity(quantity, locale)?,
    };

    let conversion = units::convert(value, unit);

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
        return Ok(());
    }

    for (u, v) in conversion.iter() {
        let marker = if u == unit { "*" } else { " " };
        println!("{} {:>2}  {}", marker, u.symbol(), locale.format_value(v));
    }

    Ok(())
}

/// Echoes the writes the synchronizer makes
struct TerminalView;

impl FieldView for TerminalView {
    fn set_text(&mut self, unit: Unit, text: &str) {
        println!("  {} <- {}", unit.symbol(), text);
    }
}

fn run_session(locale: LocaleFormat) -> Result<(), CapError> {
    let sync = Synchronizer::new(locale);
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // The text is everything after the first space and may be empty
        let (unit_str, text) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let unit = match unit_str.parse::<Unit>() {
            Ok(unit) => unit,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        sync.set_focus(Some(unit));
        match sync.on_text_changed(unit, text, &mut TerminalView) {
            SyncOutcome::Ignored => println!("  (ignored)"),
            SyncOutcome::Skipped | SyncOutcome::Updated { .. } => {}
        }

        for (u, text) in sync.state().texts() {
            println!("{:>2} [{}]", u.symbol(), text);
        }
        println!();
    }

    Ok(())
}

fn print_locale(locale: &LocaleFormat) {
    println!("Locale: {}", locale.tag);
    println!("Decimal separator: {:?}", locale.decimal_separator);
    println!("Grouping separator: {:?}", locale.grouping_separator);
    println!("Max fraction digits: {}", locale.max_fraction_digits);
    println!("Example: {}", locale.format_value(1234567.891));
}
