use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::errors::{DeckQuizError, Result};
use crate::utilities::constants::{DECK_SIZE, DECK_THUMBNAIL_PATH};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub code: String,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck and checks that it holds exactly `DECK_SIZE` cards.
    pub fn new(code: String, cards: Vec<Card>) -> Result<Self> {
        let deck = Deck { code, cards };
        if !deck.validate() {
            let total = deck.total_count();
            return Err(DeckQuizError::InvalidDeck {
                code: deck.code,
                total,
                expected: DECK_SIZE,
            });
        }
        Ok(deck)
    }

    /// Sum of all known card counts. Cards without a count are skipped.
    pub fn total_count(&self) -> u64 {
        self.cards
            .iter()
            .filter_map(|card| card.count)
            .map(u64::from)
            .sum()
    }

    pub fn validate(&self) -> bool {
        self.total_count() == u64::from(DECK_SIZE)
    }

    /// Number of distinct entries, not the number of cards.
    pub fn kind_count(&self) -> usize {
        self.cards.len()
    }

    pub fn thumbnail_url(&self, base_url: &str) -> String {
        format!(
            "{}{}",
            base_url,
            DECK_THUMBNAIL_PATH.replace("{deck_code}", &urlencoding::encode(&self.code))
        )
    }
}
