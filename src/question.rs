use log::info;
use tokio_util::sync::CancellationToken;

use crate::cards::deck::Deck;
use crate::deck_list_image::{encode_png, CountFont, DeckListImageGenerator, HttpArtworkFetcher};
use crate::deck_scraper::DeckScraper;
use crate::errors::Result;
use crate::http_client::build_client;
use crate::utilities::config::Config;
use crate::utilities::constants::{ANSWER_FILE_PREFIX, QUESTION_FILE_PREFIX};
use crate::utilities::file_management::{save_to_file, write_bytes_to_file};
use crate::utilities::string_manipulators::date_time_as_string;

/// A deck together with its rendered count grid.
pub struct Question {
    pub deck: Deck,
    pub png: Vec<u8>,
}

pub struct QuestionMaker {
    scraper: DeckScraper,
    generator: DeckListImageGenerator,
    with_image: bool,
}

impl QuestionMaker {
    pub fn new(scraper: DeckScraper, generator: DeckListImageGenerator, with_image: bool) -> Self {
        QuestionMaker {
            scraper,
            generator,
            with_image,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_client(config.request_timeout_secs)?;
        let font = CountFont::load(config.font_path.as_deref())?;
        Ok(QuestionMaker::new(
            DeckScraper::new(&config.base_url, client.clone()),
            DeckListImageGenerator::new(HttpArtworkFetcher::new(client), font),
            config.with_image,
        ))
    }

    pub async fn make_question(
        &self,
        deck_code: &str,
        cancel: &CancellationToken,
    ) -> Result<Question> {
        let deck = self.scraper.extract_deck(deck_code, cancel).await?;
        info!(
            "Deck {} has {} different cards",
            deck.code,
            deck.kind_count()
        );
        let image = self
            .generator
            .generate_card_list_image(&deck.cards, self.with_image, cancel)
            .await?;
        let png = encode_png(&image)?;
        Ok(Question { deck, png })
    }
}

/// Writes the question image and the deck list answer, returns both paths.
pub fn save_question(question: &Question, output_dir: &str) -> Result<(String, String)> {
    let timestamp = date_time_as_string(None, None);
    let image_path = format!(
        "{}/{}{}_{}.png",
        output_dir, QUESTION_FILE_PREFIX, question.deck.code, timestamp
    );
    let answer_path = format!(
        "{}/{}{}_{}.json",
        output_dir, ANSWER_FILE_PREFIX, question.deck.code, timestamp
    );
    write_bytes_to_file(&image_path, &question.png)?;
    save_to_file(&answer_path, &question.deck)?;
    info!("Saved question to {} and answer to {}", image_path, answer_path);
    Ok((image_path, answer_path))
}
