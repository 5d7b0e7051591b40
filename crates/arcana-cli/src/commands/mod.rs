pub mod calendar;
pub mod lexicon;
pub mod profile;
pub mod reading;
pub mod years;

use std::borrow::Cow;
use std::path::Path;

use arcana_core::date::parse_date;
use arcana_core::{Lexicon, Profile, ProfileBuilder};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Inputs shared by every profile-based command.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Date of birth, DD/MM/YYYY (YYYY-MM-DD also accepted)
    pub birth: String,

    /// Name to add a name value
    #[arg(short, long)]
    pub name: Option<String>,

    /// Reference date instead of today, DD/MM/YYYY
    #[arg(short, long)]
    pub today: Option<String>,
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tables and paragraphs for the terminal.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Reading length.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// One sentence per paragraph.
    Terse,
    /// Full paragraphs.
    Normal,
    /// Full paragraphs with the reduction trail.
    Verbose,
}

/// Parse the shared inputs and build the profile.
fn build_profile(args: &ProfileArgs) -> Result<Profile, String> {
    let mut builder = ProfileBuilder::parse(&args.birth).map_err(|e| e.to_string())?;
    if let Some(name) = &args.name {
        builder = builder.with_name(name.as_str());
    }
    if let Some(today) = &args.today {
        let reference = parse_date(today).map_err(|e| format!("--today: {e}"))?;
        builder = builder.with_reference(reference);
    }
    Ok(builder.build())
}

/// The standard lexicon, or a validated replacement read from `path`.
pub fn load_lexicon(path: Option<&Path>) -> Result<Cow<'static, Lexicon>, String> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(Lexicon::standard()));
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let lexicon = Lexicon::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "using custom lexicon");
    Ok(Cow::Owned(lexicon))
}

/// Print any result as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}
