use arcana_core::Lexicon;
use arcana_core::date::format_date;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use super::{OutputFormat, ProfileArgs};

#[derive(Serialize)]
struct ProfileOutput<'a> {
    profile: &'a arcana_core::Profile,
    panels: Vec<arcana_core::Panel>,
}

pub fn run(args: &ProfileArgs, lexicon: &Lexicon, format: OutputFormat) -> Result<(), String> {
    let profile = super::build_profile(args)?;
    let panels = profile.panels(lexicon);
    tracing::info!(birth = %profile.birth, "profile");

    if format == OutputFormat::Json {
        return super::print_json(&ProfileOutput {
            profile: &profile,
            panels,
        });
    }

    let who = profile
        .name
        .as_ref()
        .map_or_else(String::new, |n| format!("{}  ", n.name.bold()));
    let context = format!(
        "(reference {}, running year {})",
        format_date(profile.reference),
        profile.running_year.year
    );
    println!(
        "  {who}born {} {}",
        format_date(profile.birth),
        context.dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Value",
        "Raw Sum",
        "Digit Sum",
        "Single",
        "Bridge",
        "Tarot",
        "Bridge Tarot",
    ]);

    for panel in &panels {
        table.add_row(vec![
            panel.kind.to_string(),
            panel.total.to_string(),
            panel.digit_sum.to_string(),
            panel.single.to_string(),
            panel.bridge.map(|b| b.to_string()).unwrap_or_default(),
            panel.tarot.clone(),
            panel.bridge_tarot.clone().unwrap_or_default(),
        ]);
    }

    println!("{table}");
    Ok(())
}
