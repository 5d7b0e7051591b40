//! CLI frontend for Arcana numerology tarot readings.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::{OutputFormat, ProfileArgs, Style};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana: numerology tarot profiles, readings, year grids, and calendars",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug detail to stderr (ARCANA_LOG overrides the filter)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Load card names and phrases from a JSON lexicon file
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every reduced value with its cards
    Profile {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a narrative reading
    Reading {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Narrate in the third person
        #[arg(long)]
        third_person: bool,

        /// Add a paragraph on the running month and day
        #[arg(long)]
        cycles: bool,

        /// Paragraph length
        #[arg(long, value_enum, default_value = "normal")]
        style: Style,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Display the Single/Bridge grid for each year of life
    Years {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Number of years, starting with the birth year
        #[arg(short, long, default_value = "88")]
        span: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Display a month with the card of each day
    Calendar {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Calendar year (default: the reference year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (default: the reference month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Hide bridge numbers in the day cards
        #[arg(long)]
        collapse: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the lexicon as editable JSON
    Lexicon {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::load_lexicon(cli.lexicon.as_deref()).and_then(|lexicon| {
        match cli.command {
            Commands::Profile { profile, format } => {
                commands::profile::run(&profile, &lexicon, format)
            }
            Commands::Reading {
                profile,
                third_person,
                cycles,
                style,
                format,
            } => commands::reading::run(&profile, &lexicon, third_person, cycles, style, format),
            Commands::Years {
                profile,
                span,
                format,
            } => commands::years::run(&profile, &lexicon, span, format),
            Commands::Calendar {
                profile,
                year,
                month,
                collapse,
                format,
            } => commands::calendar::run(&profile, &lexicon, year, month, collapse, format),
            Commands::Lexicon { output } => commands::lexicon::run(&lexicon, output.as_deref()),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
