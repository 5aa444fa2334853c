use serde::{Deserialize, Serialize};
use url::Url;

use super::card_category::CardCategory;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub category: CardCategory,
    pub id: String,
    pub image_url: String,
    pub count: Option<u32>,
}

impl Card {
    pub fn new(
        name: String,
        category: CardCategory,
        id: String,
        image_url: String,
        count: Option<u32>,
    ) -> Self {
        Card {
            name,
            category,
            id,
            image_url,
            count,
        }
    }

    /// The same card can be printed in several expansions under different ids.
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.name == other.name
    }

    /// Second to last path segment of the image url, e.g. `SV4a` for
    /// `/assets/images/card_images/large/SV4a/044419_P_PIKACHU.jpg`.
    pub fn expansion(&self) -> Option<String> {
        let path = match Url::parse(&self.image_url) {
            Ok(url) => url.path().to_string(),
            Err(_) => self.image_url.clone(),
        };
        let mut segments = path.rsplit('/');
        segments.next()?;
        segments
            .next()
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
    }
}
