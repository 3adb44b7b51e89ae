//! Batched narrative generation with deterministic fallback.
//!
//! All cards of a reading go to the narrator in one prompt; the response is
//! split on a delimiter and associated with cards strictly by position. Any
//! shortfall, per segment or total, is covered by deterministic text built
//! from the card's own meaning, so interpretation never fails a reading.

use arcana_deck::{CardMeaning, QuestionCategory};
use arcana_store::{CombinedInterpretation, IndividualInterpretation};

use crate::narrator::Narrator;

/// Delimiter the narrator is asked to place between per-card blocks.
pub const SEGMENT_DELIMITER: &str = "---";

/// Longest prefix before a colon that is still treated as a block label.
const MAX_LABEL_LEN: usize = 40;

/// Build the single prompt covering every card of the reading.
pub fn build_batch_prompt(
    question: &str,
    category: QuestionCategory,
    meanings: &[CardMeaning],
) -> String {
    let mut prompt = format!(
        "You are an experienced tarot reader. The querent asks ({category}): {question}\n\n\
         Interpret each card below in its position. Write one block per card, \
         in the given order, separated by a line containing only \
         `{SEGMENT_DELIMITER}`. Start each block with `Card N reading:`.\n",
    );

    for meaning in meanings {
        prompt.push_str(&format!(
            "\nCard {}: {} ({})\nPosition: {} - {}\nMeaning: {}\n",
            meaning.position,
            meaning.card_name,
            meaning.orientation_label(),
            meaning.position_name,
            meaning.position_description,
            meaning.general_meaning,
        ));
        if let Some(specific) = &meaning.category_meaning {
            prompt.push_str(&format!("For this topic: {specific}\n"));
        }
    }

    prompt
}

/// Deterministic per-card text used whenever generated text is missing.
pub fn fallback_interpretation(meaning: &CardMeaning) -> String {
    format!(
        "{} {} in {} position: {}",
        meaning.card_name,
        meaning.orientation_label(),
        meaning.position_name,
        meaning.general_meaning,
    )
}

/// Strip a leading `... reading:`-style label from a response block. Only a
/// short prefix before the first colon that mentions "reading" counts as a
/// label; anything else is kept as content.
fn strip_label(segment: &str) -> &str {
    if let Some((prefix, rest)) = segment.split_once(':') {
        if prefix.chars().count() <= MAX_LABEL_LEN && prefix.to_lowercase().contains("reading") {
            return rest.trim();
        }
    }
    segment.trim()
}

/// Associate response blocks with cards by position. Card `i` takes block
/// `i` when it exists and is non-empty, and the deterministic fallback
/// otherwise. Surplus blocks are dropped.
pub fn parse_batch_response(
    response: &str,
    meanings: &[CardMeaning],
) -> Vec<IndividualInterpretation> {
    let segments: Vec<&str> = response.split(SEGMENT_DELIMITER).collect();

    meanings
        .iter()
        .enumerate()
        .map(|(i, meaning)| {
            let text = segments
                .get(i)
                .map(|s| strip_label(s.trim()))
                .filter(|s| !s.is_empty())
                .map_or_else(|| fallback_interpretation(meaning), ToString::to_string);
            interpretation(meaning, text)
        })
        .collect()
}

fn interpretation(meaning: &CardMeaning, text: String) -> IndividualInterpretation {
    IndividualInterpretation {
        card_name: meaning.card_name.clone(),
        position: meaning.position,
        position_name: meaning.position_name.clone(),
        reversed: meaning.reversed,
        text,
    }
}

/// Generate per-card narratives for the whole reading in one narrator call.
///
/// Never fails: a narrator error covers every card with deterministic
/// fallback text and logs a warning.
pub fn interpret_cards(
    narrator: &dyn Narrator,
    question: &str,
    category: QuestionCategory,
    meanings: &[CardMeaning],
) -> Vec<IndividualInterpretation> {
    let prompt = build_batch_prompt(question, category, meanings);
    match narrator.generate(&prompt) {
        Ok(response) => parse_batch_response(&response, meanings),
        Err(err) => {
            log::warn!("card interpretation fell back to deterministic text: {err}");
            meanings
                .iter()
                .map(|m| interpretation(m, fallback_interpretation(m)))
                .collect()
        }
    }
}

/// Build the prompt asking for one narrative over the whole layout.
pub fn build_combined_prompt(
    question: &str,
    category: QuestionCategory,
    meanings: &[CardMeaning],
) -> String {
    let mut prompt = format!(
        "You are an experienced tarot reader. The querent asks ({category}): {question}\n\n\
         The cards drawn, in order:\n",
    );
    for meaning in meanings {
        prompt.push_str(&format!(
            "{}. {} ({}) in the {} position\n",
            meaning.position,
            meaning.card_name,
            meaning.orientation_label(),
            meaning.position_name,
        ));
    }
    prompt.push_str(
        "\nWeave these cards into one coherent reading that answers the \
         question, ending with practical guidance.",
    );
    prompt
}

/// Deterministic whole-layout text used when generation fails.
pub fn fallback_combined(card_count: usize) -> String {
    format!(
        "This reading of {card_count} cards asks for your own reflection: \
         take each card's message in its position, and weigh them together \
         against your question.",
    )
}

/// Derive the short summary from a narrative: the first line when its
/// character count is strictly between 10 and 50, otherwise the first 30
/// characters with an ellipsis. Counts are in characters, not bytes.
pub fn extract_summary(narrative: &str) -> String {
    let first_line = narrative.lines().next().unwrap_or("").trim();
    let len = first_line.chars().count();
    if len > 10 && len < 50 {
        first_line.to_string()
    } else {
        let head: String = narrative.chars().take(30).collect();
        format!("{head}...")
    }
}

/// Generate the combined narrative and summary for the whole reading.
///
/// Never fails: a narrator error substitutes the deterministic combined
/// text and logs a warning.
pub fn synthesize_combined(
    narrator: &dyn Narrator,
    question: &str,
    category: QuestionCategory,
    meanings: &[CardMeaning],
) -> CombinedInterpretation {
    let prompt = build_combined_prompt(question, category, meanings);
    let narrative = match narrator.generate(&prompt) {
        Ok(response) => response.trim().to_string(),
        Err(err) => {
            log::warn!("combined interpretation fell back to deterministic text: {err}");
            fallback_combined(meanings.len())
        }
    };
    let summary = extract_summary(&narrative);
    CombinedInterpretation { narrative, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::{NarratorError, OfflineNarrator};

    fn meaning(name: &str, position: u32, position_name: &str, reversed: bool) -> CardMeaning {
        CardMeaning {
            card_name: name.to_string(),
            position,
            reversed,
            keywords: vec!["keyword".to_string()],
            general_meaning: format!("{name} general meaning"),
            category_meaning: None,
            position_name: position_name.to_string(),
            position_description: format!("{position_name} description"),
        }
    }

    struct Canned(&'static str);

    impl Narrator for Canned {
        fn generate(&self, _prompt: &str) -> Result<String, NarratorError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn parse_associates_blocks_by_position() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", true),
            meaning("The Moon", 3, "Future", false),
        ];
        let response = "Card 1 reading: a fresh start\n---\nCard 2 reading: warmth turned inward\n---\nCard 3 reading: trust your intuition";

        let parsed = parse_batch_response(response, &meanings);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].text, "a fresh start");
        assert_eq!(parsed[1].text, "warmth turned inward");
        assert_eq!(parsed[2].text, "trust your intuition");
        assert_eq!(parsed[1].card_name, "The Sun");
        assert!(parsed[1].reversed);
        assert_eq!(parsed[2].position, 3);
    }

    #[test]
    fn parse_fills_missing_blocks_with_fallback() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", false),
            meaning("The Moon", 3, "Future", true),
        ];
        // Only two blocks for three cards.
        let response = "Card 1 reading: a fresh start\n---\nCard 2 reading: warmth";

        let parsed = parse_batch_response(response, &meanings);
        assert_eq!(parsed[0].text, "a fresh start");
        assert_eq!(parsed[1].text, "warmth");
        assert_eq!(
            parsed[2].text,
            "The Moon reversed in Future position: The Moon general meaning"
        );
    }

    #[test]
    fn parse_keeps_colons_in_content() {
        let meanings = vec![meaning("Justice", 1, "Guidance", false)];
        // No "reading" label, and the colon sits deep inside the text.
        let response = "The scales tip in your favour: act with fairness and the outcome follows.";
        let parsed = parse_batch_response(response, &meanings);
        assert_eq!(parsed[0].text, response);
    }

    #[test]
    fn parse_strips_case_insensitive_labels() {
        let meanings = vec![meaning("Justice", 1, "Guidance", false)];
        let parsed = parse_batch_response("CARD 1 READING: balance returns", &meanings);
        assert_eq!(parsed[0].text, "balance returns");
    }

    #[test]
    fn parse_treats_blank_block_as_missing() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", false),
        ];
        let parsed = parse_batch_response("first block\n---\n   \n", &meanings);
        assert_eq!(parsed[0].text, "first block");
        assert_eq!(
            parsed[1].text,
            "The Sun upright in Present position: The Sun general meaning"
        );
    }

    #[test]
    fn total_failure_covers_every_card() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", true),
        ];
        let parsed = interpret_cards(
            &OfflineNarrator,
            "What lies ahead?",
            QuestionCategory::General,
            &meanings,
        );
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed[0].text,
            "The Fool upright in Past position: The Fool general meaning"
        );
        assert_eq!(
            parsed[1].text,
            "The Sun reversed in Present position: The Sun general meaning"
        );
    }

    #[test]
    fn successful_batch_roundtrip() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", false),
        ];
        let narrator = Canned("Card 1 reading: begin again\n---\nCard 2 reading: joy arrives");
        let parsed = interpret_cards(
            &narrator,
            "What lies ahead?",
            QuestionCategory::General,
            &meanings,
        );
        assert_eq!(parsed[0].text, "begin again");
        assert_eq!(parsed[1].text, "joy arrives");
    }

    #[test]
    fn batch_prompt_carries_every_card_and_the_delimiter() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", true),
        ];
        let prompt = build_batch_prompt("What lies ahead?", QuestionCategory::Career, &meanings);
        assert!(prompt.contains("What lies ahead?"));
        assert!(prompt.contains("career"));
        assert!(prompt.contains("The Fool"));
        assert!(prompt.contains("The Sun (reversed)"));
        assert!(prompt.contains(SEGMENT_DELIMITER));
    }

    #[test]
    fn summary_takes_qualifying_first_line() {
        let narrative = "A season of renewal begins now.\nMore detail follows here.";
        assert_eq!(extract_summary(narrative), "A season of renewal begins now.");
    }

    #[test]
    fn summary_truncates_when_first_line_is_off_length() {
        let narrative = "Short line\nrest of the narrative continues well past the summary";
        // First line is exactly 10 chars, not strictly greater.
        let summary = extract_summary(narrative);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 33);
        assert!(summary.starts_with("Short line"));
    }

    #[test]
    fn summary_counts_chars_not_bytes() {
        // 14 Chinese characters: well over 10 chars but under 50, while the
        // byte length is far past both thresholds.
        let narrative = "今天的运势整体向好值得期待\n后续内容";
        assert_eq!(extract_summary(narrative), "今天的运势整体向好值得期待");
    }

    #[test]
    fn synthesize_falls_back_with_card_count() {
        let meanings = vec![
            meaning("The Fool", 1, "Past", false),
            meaning("The Sun", 2, "Present", false),
            meaning("The Moon", 3, "Future", false),
        ];
        let combined = synthesize_combined(
            &OfflineNarrator,
            "What lies ahead?",
            QuestionCategory::General,
            &meanings,
        );
        assert!(combined.narrative.contains("3 cards"));
        assert!(!combined.summary.is_empty());
    }

    #[test]
    fn synthesize_uses_generated_narrative() {
        let narrator = Canned("The cards speak of steady growth.\nTrust the slow work.");
        let combined = synthesize_combined(
            &narrator,
            "What lies ahead?",
            QuestionCategory::General,
            &[meaning("The Fool", 1, "Guidance", false)],
        );
        assert_eq!(
            combined.narrative,
            "The cards speak of steady growth.\nTrust the slow work."
        );
        assert_eq!(combined.summary, "The cards speak of steady growth.");
    }
}
