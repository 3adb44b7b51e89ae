use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_reading::{OfflineNarrator, Reader, ReaderConfig, Reading};

pub fn run(
    question: &str,
    layout: Option<&str>,
    seed: Option<u64>,
    no_save: bool,
    exclude: Vec<String>,
    store: &Path,
) -> Result<(), String> {
    let config = ReaderConfig {
        seed,
        persist: !no_save,
        store_path: store.to_path_buf(),
    };
    let reader = Reader::new(&config, Arc::new(OfflineNarrator)).map_err(|e| e.to_string())?;
    let reading = reader
        .read_excluding(question, layout, exclude)
        .map_err(|e| e.to_string())?;

    print_reading(&reading);
    Ok(())
}

fn print_reading(reading: &Reading) {
    println!();
    println!("  {}", reading.question.bold());
    println!(
        "  {} · {} ({})",
        reading.category.to_string().cyan(),
        reading.layout_name,
        reading.layout_id.dimmed()
    );
    println!("  {}", reading.analysis.dimmed());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Orientation"]);
    for card in &reading.drawn_cards {
        table.add_row(vec![
            card.position.to_string(),
            card.name.clone(),
            card.orientation().to_string(),
        ]);
    }
    println!("{table}");
    println!();

    for interp in &reading.individual_interpretations {
        println!(
            "  {} {}",
            format!("{}.", interp.position).bold(),
            interp.card_name.bold()
        );
        for line in interp.text.lines() {
            println!("     {}", line.trim());
        }
        println!();
    }

    println!("  {}", "Reading".bold());
    for line in reading.narrative.lines() {
        println!("  {}", line.trim());
    }
    println!();
    println!("  {} {}", "Summary:".bold(), reading.summary);
    println!();

    if reading.persisted {
        if let Some(id) = &reading.record_id {
            println!("  Saved as {}", id.dimmed());
        }
    } else {
        println!("  {}", "Not saved.".dimmed());
    }
}
