use std::collections::HashMap;

use log::{debug, info, warn};
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use tokio_util::sync::CancellationToken;

use crate::cards::{card::Card, card_category::CardCategory, deck::Deck};
use crate::errors::{DeckQuizError, Result};
use crate::http_client::fetch_text;
use crate::utilities::constants::{
    CARD_NAME_MARKER, CARD_PICT_MARKER, DECK_CONFIRM_PATH, DECK_SIZE,
};
use crate::utilities::string_manipulators::clean_script_value;

lazy_static::lazy_static! {
    static ref SCRIPT_SELECTOR: Selector = Selector::parse("script").unwrap();
    static ref INPUT_SELECTOR: Selector = Selector::parse("input").unwrap();
    static ref NAME_PATTERN: Regex = marker_pattern(CARD_NAME_MARKER);
    static ref PICT_PATTERN: Regex = marker_pattern(CARD_PICT_MARKER);
}

fn marker_pattern(marker: &str) -> Regex {
    Regex::new(&format!(r"{}\[([^\]]+)\]", regex::escape(marker))).unwrap()
}

/// Picks the script text that carries the card name and image tables.
pub trait CorpusLocator: Send + Sync {
    fn locate(&self, document: &Html) -> Option<String>;
}

/// The card tables live in by far the largest inline script of the page.
pub struct LongestScript;

impl CorpusLocator for LongestScript {
    fn locate(&self, document: &Html) -> Option<String> {
        let mut longest: Option<(usize, String)> = None;
        for script in document.select(&SCRIPT_SELECTOR) {
            let text = script.text().collect::<String>();
            let length = text.chars().count();
            if longest.as_ref().map_or(true, |(best, _)| length > *best) {
                longest = Some((length, text));
            }
        }
        longest.map(|(_, text)| text)
    }
}

/// Uses the first script containing `marker`.
pub struct ScriptContaining {
    pub marker: String,
}

impl CorpusLocator for ScriptContaining {
    fn locate(&self, document: &Html) -> Option<String> {
        document
            .select(&SCRIPT_SELECTOR)
            .map(|script| script.text().collect::<String>())
            .find(|text| text.contains(&self.marker))
    }
}

/// One `{card_id}_{count}_{extra}` entry of a category line.
#[derive(Debug, PartialEq, Clone)]
pub struct CardLineEntry {
    pub card_id: String,
    pub count: u32,
    /// Third field of the entry. Its meaning is unknown so it is kept but never read.
    pub extra: String,
}

/// Parses a hyphen separated category line like `"1_4_0-2_2_1-"`.
pub fn parse_card_line(card_line: &str) -> Result<Vec<CardLineEntry>> {
    card_line
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let parts: Vec<&str> = segment.split('_').collect();
            let [card_id, count, extra] = parts.as_slice() else {
                return Err(DeckQuizError::source_format(format!(
                    "Card entry '{}' does not have three '_' separated parts",
                    segment
                )));
            };
            let count = count.parse::<u32>().map_err(|e| {
                DeckQuizError::source_format(format!(
                    "Failed to parse count '{}' of card entry '{}': {}",
                    count, segment, e
                ))
            })?;
            if count == 0 || count > DECK_SIZE {
                return Err(DeckQuizError::source_format(format!(
                    "Card entry '{}' has count {}, expected 1 to {}",
                    segment, count, DECK_SIZE
                )));
            }
            Ok(CardLineEntry {
                card_id: card_id.to_string(),
                count,
                extra: extra.to_string(),
            })
        })
        .collect()
}

/// Card id to name and image path, built with a single pass over the corpus.
/// The first line mentioning an id wins.
#[derive(Debug, Default)]
pub struct CardInfoIndex {
    names: HashMap<String, String>,
    image_paths: HashMap<String, String>,
}

impl CardInfoIndex {
    pub fn from_corpus(corpus: &str) -> Self {
        let mut index = CardInfoIndex::default();
        for line in corpus.split('\n') {
            Self::insert_first(&mut index.names, &NAME_PATTERN, line);
            Self::insert_first(&mut index.image_paths, &PICT_PATTERN, line);
        }
        debug!(
            "Indexed {} card names and {} card images",
            index.names.len(),
            index.image_paths.len()
        );
        index
    }

    fn insert_first(map: &mut HashMap<String, String>, pattern: &Regex, line: &str) {
        let Some(captures) = pattern.captures(line) else {
            return;
        };
        let (Some(marker), Some(card_id)) = (captures.get(0), captures.get(1)) else {
            return;
        };
        map.entry(card_id.as_str().to_string())
            .or_insert_with(|| clean_script_value(line, marker.as_str()));
    }

    pub fn name(&self, card_id: &str) -> Result<&str> {
        self.names.get(card_id).map(String::as_str).ok_or_else(|| {
            DeckQuizError::source_format(format!("No name found for card {}", card_id))
        })
    }

    pub fn image_path(&self, card_id: &str) -> Result<&str> {
        self.image_paths
            .get(card_id)
            .map(String::as_str)
            .ok_or_else(|| {
                DeckQuizError::source_format(format!("No image found for card {}", card_id))
            })
    }
}

pub struct DeckScraper {
    base_url: String,
    client: Client,
    locator: Box<dyn CorpusLocator>,
}

impl DeckScraper {
    pub fn new(base_url: &str, client: Client) -> Self {
        DeckScraper {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            locator: Box::new(LongestScript),
        }
    }

    pub fn with_locator(mut self, locator: impl CorpusLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn deck_url(&self, deck_code: &str) -> String {
        format!(
            "{}{}",
            self.base_url,
            DECK_CONFIRM_PATH.replace("{deck_code}", &urlencoding::encode(deck_code))
        )
    }

    /// Fetches the deck page of `deck_code` and returns the validated deck.
    pub async fn extract_deck(&self, deck_code: &str, cancel: &CancellationToken) -> Result<Deck> {
        let url = self.deck_url(deck_code);
        info!("Fetching deck {} from {}", deck_code, url);
        let html = fetch_text(&self.client, &url, cancel).await?;
        self.parse_deck(deck_code, &html)
    }

    pub fn parse_deck(&self, deck_code: &str, html: &str) -> Result<Deck> {
        let document = Html::parse_document(html);
        let corpus = self
            .locator
            .locate(&document)
            .ok_or_else(|| DeckQuizError::source_format("No script block found on deck page"))?;
        debug!("Card info corpus is {} characters", corpus.chars().count());
        let index = CardInfoIndex::from_corpus(&corpus);

        let mut cards = Vec::new();
        for category in CardCategory::ALL {
            let card_line = Self::hidden_field_value(&document, category.field_name())?;
            let entries = parse_card_line(card_line)?;
            debug!("{} line has {} entries", category, entries.len());
            for entry in entries {
                cards.push(self.create_card(&index, category, entry)?);
            }
        }

        Deck::new(deck_code.to_string(), cards).inspect_err(|e| warn!("{}", e))
    }

    fn hidden_field_value<'a>(document: &'a Html, field_name: &str) -> Result<&'a str> {
        let input = document
            .select(&INPUT_SELECTOR)
            .find(|element| element.value().attr("name") == Some(field_name))
            .ok_or_else(|| {
                DeckQuizError::source_format(format!("No input named {} on deck page", field_name))
            })?;
        input.value().attr("value").ok_or_else(|| {
            DeckQuizError::source_format(format!("Input {} has no value", field_name))
        })
    }

    fn create_card(
        &self,
        index: &CardInfoIndex,
        category: CardCategory,
        entry: CardLineEntry,
    ) -> Result<Card> {
        let name = index.name(&entry.card_id)?.to_string();
        let image_url = format!("{}{}", self.base_url, index.image_path(&entry.card_id)?);
        Ok(Card::new(
            name,
            category,
            entry.card_id,
            image_url,
            Some(entry.count),
        ))
    }
}
