use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_store::RecordStore;

pub fn run(store: &Path) -> Result<(), String> {
    let store = RecordStore::new(store);
    let stats = store.statistics().map_err(|e| e.to_string())?;

    println!();
    println!("  Total readings: {}", stats.total.to_string().bold());

    if stats.total == 0 {
        return Ok(());
    }

    println!("  Average per month: {:.1}", stats.average_per_month);
    if let Some(newest) = stats.newest {
        println!("  Most recent: {}", newest.format("%Y-%m-%d %H:%M"));
    }
    if let Some(oldest) = stats.oldest {
        println!("  First reading: {}", oldest.format("%Y-%m-%d %H:%M"));
    }
    println!();

    let mut by_category: Vec<_> = stats.by_category.iter().collect();
    by_category.sort_by(|a, b| b.1.cmp(a.1));
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Readings"]);
    for (category, count) in by_category {
        table.add_row(vec![category.to_string(), count.to_string()]);
    }
    println!("{table}");
    println!();

    let mut by_layout: Vec<_> = stats.by_layout.iter().collect();
    by_layout.sort_by(|a, b| b.1.cmp(a.1));
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Layout", "Readings"]);
    for (layout, count) in by_layout {
        table.add_row(vec![layout.clone(), count.to_string()]);
    }
    println!("{table}");

    Ok(())
}
