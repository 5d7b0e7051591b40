use arcana_core::grid::Mark;
use arcana_core::{GridConfig, Lexicon, YearGrid};
use comfy_table::{Cell, Color, ContentArrangement, Table};

use super::{OutputFormat, ProfileArgs};

pub fn run(
    args: &ProfileArgs,
    lexicon: &Lexicon,
    span: u32,
    format: OutputFormat,
) -> Result<(), String> {
    let profile = super::build_profile(args)?;
    let config = GridConfig::default().with_span(span);
    let grid = YearGrid::build(&profile, &config).map_err(|e| e.to_string())?;
    tracing::info!(columns = grid.columns.len(), "year grid");

    if format == OutputFormat::Json {
        return super::print_json(&grid);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Disabled);

    let mut header = vec![Cell::new("#"), Cell::new("Card")];
    header.extend(grid.columns.iter().map(|c| Cell::new(c.year)));
    table.set_header(header);

    for row in YearGrid::rows() {
        let mut cells = vec![Cell::new(row), Cell::new(lexicon.card(row))];
        cells.extend(grid.row_marks(row).into_iter().map(mark_cell));
        table.add_row(cells);
    }

    println!("{table}");
    println!();
    println!(
        "  S = single (anchor), B = bridge (overlay); character anchor {} ({})",
        profile.character_anchor(),
        lexicon.card(profile.character_anchor())
    );

    Ok(())
}

fn mark_cell(mark: Option<Mark>) -> Cell {
    match mark {
        Some(Mark::Single) => Cell::new(Mark::Single.symbol()).fg(Color::Blue),
        Some(Mark::Bridge) => Cell::new(Mark::Bridge.symbol()).fg(Color::Red),
        None => Cell::new(""),
    }
}
