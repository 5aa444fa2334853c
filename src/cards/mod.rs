pub mod card;
pub mod card_category;
pub mod deck;
