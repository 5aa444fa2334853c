pub mod cards;
pub mod deck_list_image;
pub mod deck_scraper;
pub mod errors;
pub mod http_client;
pub mod question;
mod test;
pub mod utilities;
