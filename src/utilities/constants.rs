pub const DEFAULT_BASE_URL: &str = "https://www.pokemon-card.com";
pub const DECK_CONFIRM_PATH: &str = "/deck/confirm.html/deckID/{deck_code}";
pub const DECK_THUMBNAIL_PATH: &str = "/deck/deckView.php/deckID/{deck_code}.png";

pub const DECK_SIZE: u32 = 60;

pub const CARD_NAME_MARKER: &str = "PCGDECK.searchItemNameAlt";
pub const CARD_PICT_MARKER: &str = "PCGDECK.searchItemCardPict";

pub const CARD_WIDTH: u32 = 420;
pub const CARD_HEIGHT: u32 = 560;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const QUESTION_FILE_PREFIX: &str = "question_";
pub const ANSWER_FILE_PREFIX: &str = "answer_";
