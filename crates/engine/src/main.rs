//! DeckBldr Engine - Main entry point.

use std::sync::Arc;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deckbldr_engine::{CatalogImporter, DeckSheet, Loadout, SheetUseCases};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the working directory, if a .env is present.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckbldr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DeckBldr Engine");

    // Load configuration
    let data_dir = std::env::var("DECKBLDR_DATA_DIR").unwrap_or_else(|_| "data".into());
    let loadout_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DECKBLDR_LOADOUT").ok());

    let importer = CatalogImporter::new(&data_dir);
    let catalog = importer.load_all().await?;
    tracing::info!(
        qualities = catalog.qualities.len(),
        programs = catalog.programs.len(),
        actions = catalog.matrix_actions.len(),
        presets = catalog.presets.len(),
        "Catalogs loaded from {}",
        data_dir
    );

    let mut loadout = match &loadout_path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await?;
            serde_json::from_str::<Loadout>(&content)?
        }
        None => {
            tracing::info!("No loadout file given, using an empty loadout");
            Loadout::default()
        }
    };

    if let Some(name) = loadout.preset.clone() {
        match catalog.preset(&name) {
            Some(preset) => loadout.apply_preset_defaults(preset),
            None => tracing::warn!(preset = %name, "loadout names an unknown preset"),
        }
    }

    let sheet = SheetUseCases::new(Arc::new(catalog)).build(&loadout);
    print_sheet(&sheet);

    Ok(())
}

fn print_sheet(sheet: &DeckSheet) {
    let stats: Vec<String> = sheet
        .deck_stats
        .iter()
        .map(|(stat, value)| format!("{} {}", stat.label(), value))
        .collect();
    println!("\nDeck: {}", stats.join(" / "));

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Action").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Marks"),
        Cell::new("Limit"),
        Cell::new("Formula"),
        Cell::new("Opposed Roll"),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(6) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in &sheet.rows {
        table.add_row(vec![
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(row.action.as_deref().unwrap_or("")),
            Cell::new(row.marks.as_deref().unwrap_or("")),
            Cell::new(&row.limit),
            Cell::new(&row.formula),
            Cell::new(row.opposed_roll.as_deref().unwrap_or("")),
            Cell::new(row.total).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{}", table);

    if !sheet.notes.is_empty() {
        println!("\nNotes:");
        for note in &sheet.notes {
            println!("  {}: {}", note.source, note.text);
        }
    }
}
