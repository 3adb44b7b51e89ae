//! Randomized, non-repeating card draw with orientation assignment.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::error::{DeckError, DeckResult};

/// Probability that a drawn card lands reversed.
pub const REVERSED_PROBABILITY: f64 = 0.30;

/// Orientation of a drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The card's primary meanings apply.
    Upright,
    /// The card's reversed meanings apply.
    Reversed,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// One card as drawn: its name, orientation, and 1-based slot within the
/// layout. Position is the selection order, which layout metadata is keyed
/// against, so it is semantically meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Catalogue name of the card.
    pub name: String,
    /// Whether the card landed reversed.
    pub reversed: bool,
    /// 1-based position in selection order.
    pub position: u32,
}

impl DrawnCard {
    /// Orientation of the card.
    pub fn orientation(&self) -> Orientation {
        if self.reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }
}

/// Draw `count` distinct cards from the catalogue, skipping `excluded`
/// names, sampling uniformly without replacement.
///
/// Each selected card is independently reversed with probability
/// [`REVERSED_PROBABILITY`]. Positions are assigned densely from 1 in
/// selection order. Fails with [`DeckError::DrawOutOfRange`] when `count`
/// exceeds the permitted subset.
pub fn draw(
    catalogue: &Catalogue,
    count: usize,
    excluded: &[String],
    rng: &mut StdRng,
) -> DeckResult<Vec<DrawnCard>> {
    let permitted: Vec<&str> = catalogue
        .all_card_names()
        .into_iter()
        .filter(|name| !excluded.iter().any(|e| e == name))
        .collect();

    if count > permitted.len() {
        return Err(DeckError::DrawOutOfRange {
            requested: count,
            available: permitted.len(),
        });
    }

    let drawn = index::sample(rng, permitted.len(), count)
        .into_iter()
        .enumerate()
        .map(|(i, idx)| DrawnCard {
            name: permitted[idx].to_string(),
            reversed: rng.random_bool(REVERSED_PROBABILITY),
            position: i as u32 + 1,
        })
        .collect();

    Ok(drawn)
}

/// Draw a single card.
pub fn draw_one(
    catalogue: &Catalogue,
    excluded: &[String],
    rng: &mut StdRng,
) -> DeckResult<DrawnCard> {
    let mut cards = draw(catalogue, 1, excluded, rng)?;
    Ok(cards.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn draw_returns_exact_count() {
        let cat = Catalogue::standard();
        let mut r = rng(1);
        for count in [1, 3, 10] {
            let cards = draw(cat, count, &[], &mut r).unwrap();
            assert_eq!(cards.len(), count);
        }
    }

    #[test]
    fn draw_names_distinct_and_positions_dense() {
        let cat = Catalogue::standard();
        let mut r = rng(2);
        let cards = draw(cat, 10, &[], &mut r).unwrap();

        let names: HashSet<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 10);

        let positions: Vec<u32> = cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn draw_honours_exclusions() {
        let cat = Catalogue::standard();
        let excluded: Vec<String> = vec!["The Fool".to_string(), "The Sun".to_string()];
        let mut r = rng(3);
        // Draw everything that remains; excluded cards must never appear.
        let cards = draw(cat, cat.len() - 2, &excluded, &mut r).unwrap();
        assert_eq!(cards.len(), cat.len() - 2);
        for c in &cards {
            assert!(!excluded.contains(&c.name));
        }
    }

    #[test]
    fn draw_over_limit_fails() {
        let cat = Catalogue::standard();
        let mut r = rng(4);
        let err = draw(cat, cat.len() + 1, &[], &mut r).unwrap_err();
        match err {
            DeckError::DrawOutOfRange {
                requested,
                available,
            } => {
                assert_eq!(requested, cat.len() + 1);
                assert_eq!(available, cat.len());
            }
        }
    }

    #[test]
    fn draw_over_limit_with_exclusions_fails() {
        let cat = Catalogue::standard();
        let excluded: Vec<String> = cat
            .all_card_names()
            .iter()
            .take(5)
            .map(|n| (*n).to_string())
            .collect();
        let mut r = rng(5);
        assert!(draw(cat, cat.len() - 4, &excluded, &mut r).is_err());
        assert!(draw(cat, cat.len() - 5, &excluded, &mut r).is_ok());
    }

    #[test]
    fn reversal_rate_within_tolerance() {
        // 10,000 independent single-card draws; the reversed fraction
        // should sit inside [0.27, 0.33] around the configured 0.30.
        let cat = Catalogue::standard();
        let mut r = rng(6);
        let mut reversed = 0u32;
        let total = 10_000;
        for _ in 0..total {
            if draw_one(cat, &[], &mut r).unwrap().reversed {
                reversed += 1;
            }
        }
        let fraction = f64::from(reversed) / f64::from(total);
        assert!(
            (0.27..=0.33).contains(&fraction),
            "reversed fraction {fraction} outside tolerance band"
        );
    }

    #[test]
    fn orientation_label() {
        let up = DrawnCard {
            name: "The Sun".to_string(),
            reversed: false,
            position: 1,
        };
        assert_eq!(up.orientation().to_string(), "upright");
        let down = DrawnCard {
            reversed: true,
            ..up
        };
        assert_eq!(down.orientation().to_string(), "reversed");
    }

    #[test]
    fn drawn_card_serde_roundtrip() {
        let card = DrawnCard {
            name: "Justice".to_string(),
            reversed: true,
            position: 2,
        };
        let json = serde_json::to_string(&card).unwrap();
        let back: DrawnCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
