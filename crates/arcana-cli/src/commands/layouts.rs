use comfy_table::{ContentArrangement, Table};

use arcana_deck::{Difficulty, all_layouts, layouts_by_difficulty};

pub fn run(difficulty: Option<&str>) -> Result<(), String> {
    let layouts = match difficulty {
        Some(tier_str) => {
            let tier = parse_difficulty(tier_str)
                .ok_or_else(|| format!("unknown difficulty: {tier_str:?}"))?;
            layouts_by_difficulty(tier)
        }
        None => all_layouts().iter().collect(),
    };

    if layouts.is_empty() {
        println!("  No layouts found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Cards", "Difficulty", "Good for"]);
    for layout in &layouts {
        table.add_row(vec![
            layout.id.clone(),
            layout.name.clone(),
            layout.card_count.to_string(),
            layout.difficulty.to_string(),
            layout.usage.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn parse_difficulty(s: &str) -> Option<Difficulty> {
    match s.to_lowercase().trim() {
        "beginner" => Some(Difficulty::Beginner),
        "intermediate" => Some(Difficulty::Intermediate),
        "advanced" => Some(Difficulty::Advanced),
        _ => None,
    }
}
