use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use arcana_deck::QuestionCategory;
use arcana_store::RecordStore;

pub fn run(
    store: &Path,
    limit: usize,
    category: Option<&str>,
    layout: Option<&str>,
) -> Result<(), String> {
    let store = RecordStore::new(store);

    let records = match (category, layout) {
        (Some(cat_str), _) => {
            let cat = QuestionCategory::parse(cat_str)
                .ok_or_else(|| format!("unknown category: {cat_str:?}"))?;
            store.filter_by_category(cat).map_err(|e| e.to_string())?
        }
        (None, Some(layout_id)) => store
            .filter_by_layout(layout_id)
            .map_err(|e| e.to_string())?,
        (None, None) => store.load_all().map_err(|e| e.to_string())?,
    };

    // Both filters together: narrow the category result by layout.
    let records: Vec<_> = records
        .into_iter()
        .filter(|r| layout.is_none_or(|l| r.layout_id == l))
        .take(limit)
        .collect();

    if records.is_empty() {
        println!("  No readings found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Question", "Category", "Layout", "Summary"]);

    for record in &records {
        let when = record
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "—".to_string());
        let question = truncate(&record.question, 40);
        let summary = truncate(&record.combined.summary, 50);
        table.add_row(vec![
            when,
            question,
            record.category.to_string(),
            record.layout_id.clone(),
            summary,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} readings", records.len());

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
