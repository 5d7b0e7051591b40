use arcana_core::Lexicon;
use arcana_narrative::{Narrator, NarratorConfig, Perspective, Verbosity};
use colored::Colorize;

use super::{OutputFormat, ProfileArgs, Style};

pub fn run(
    args: &ProfileArgs,
    lexicon: &Lexicon,
    third_person: bool,
    cycles: bool,
    style: Style,
    format: OutputFormat,
) -> Result<(), String> {
    let profile = super::build_profile(args)?;

    let perspective = if third_person {
        Perspective::ThirdPerson
    } else {
        Perspective::SecondPerson
    };
    let verbosity = match style {
        Style::Terse => Verbosity::Terse,
        Style::Normal => Verbosity::Normal,
        Style::Verbose => Verbosity::Verbose,
    };
    let config = NarratorConfig::new()
        .with_perspective(perspective)
        .with_verbosity(verbosity)
        .with_cycles(cycles);

    let reading = Narrator::new(config, lexicon).narrate(&profile);
    tracing::info!(paragraphs = reading.paragraphs.len(), "reading");

    if format == OutputFormat::Json {
        return super::print_json(&reading);
    }

    println!("  {}", reading.header.bold());
    for paragraph in &reading.paragraphs {
        println!();
        println!("  {}", paragraph.title.bold());
        println!("  {}", paragraph.body);
    }
    println!();
    println!("  {}", reading.disclaimer.dimmed());
    Ok(())
}
