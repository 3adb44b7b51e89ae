use comfy_table::{ContentArrangement, Table};

use arcana_deck::{Card, Catalogue, Suit};

pub fn run(suit: Option<&str>, search: Option<&str>) -> Result<(), String> {
    let catalogue = Catalogue::standard();

    let cards: Vec<&Card> = match (suit, search) {
        (Some(suit_str), _) => {
            let suit =
                Suit::parse(suit_str).ok_or_else(|| format!("unknown suit: {suit_str:?}"))?;
            catalogue.cards_by_suit(suit)
        }
        (None, Some(keyword)) => catalogue.search_by_keyword(keyword),
        (None, None) => catalogue.cards().iter().collect(),
    };

    // Both filters together: narrow the suit result by keyword.
    let cards: Vec<&Card> = cards
        .into_iter()
        .filter(|c| {
            search.is_none_or(|kw| {
                let kw = kw.to_lowercase();
                c.keywords.iter().any(|k| k.to_lowercase().contains(&kw))
            })
        })
        .collect();

    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Suit", "Keywords"]);
    for card in &cards {
        table.add_row(vec![
            card.name.clone(),
            card.suit.to_string(),
            card.keywords.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
