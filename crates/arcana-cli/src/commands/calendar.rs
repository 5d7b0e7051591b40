use arcana_core::calendar::{WEEKDAY_NAMES, Week};
use arcana_core::{Lexicon, MonthCalendar, OverlayMode};
use chrono::Datelike;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{OutputFormat, ProfileArgs};

pub fn run(
    args: &ProfileArgs,
    lexicon: &Lexicon,
    year: Option<i32>,
    month: Option<u32>,
    collapse: bool,
    format: OutputFormat,
) -> Result<(), String> {
    let profile = super::build_profile(args)?;
    let year = year.unwrap_or_else(|| profile.reference.year());
    let month = month.unwrap_or_else(|| profile.reference.month());

    let calendar = MonthCalendar::build(&profile, year, month).map_err(|e| e.to_string())?;
    tracing::info!(year, month, weeks = calendar.weeks.len(), "calendar");

    if format == OutputFormat::Json {
        return super::print_json(&calendar);
    }

    let mode = if collapse {
        OverlayMode::Collapse
    } else {
        OverlayMode::Bridge
    };

    let base = calendar.base_reduction();
    let title = format!("Calendar {year}-{month:02}");
    let base_line = format!("year base {}: {}", calendar.base, lexicon.label(&base, mode));
    println!("  {}  {}", title.bold(), base_line.dimmed());
    println!();

    println!("  {}", "Dates".bold());
    println!("{}", week_table(&calendar.weeks, |cell| cell.day().to_string()));
    println!();

    println!("  {}", "Daily Cards".bold());
    println!(
        "{}",
        week_table(&calendar.weeks, |cell| lexicon.label(&cell.reduction, mode))
    );

    Ok(())
}

fn week_table(weeks: &[Week], render: impl Fn(&arcana_core::DayCell) -> String) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(WEEKDAY_NAMES.to_vec());
    for week in weeks {
        table.add_row(
            week.iter()
                .map(|slot| slot.as_ref().map(&render).unwrap_or_default())
                .collect::<Vec<_>>(),
        );
    }
    table
}
