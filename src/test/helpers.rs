use crate::cards::{card::Card, card_category::CardCategory};

pub static SAMPLE_DECK_CODE: &str = "gnLLgg-abc123-Ln9LQn";

pub static SAMPLE_DECK_LINES: [&str; 6] = [
    "44419_4_1-44420_3_1-44421_2_1-",
    "41000_4_1-40100_4_1-",
    "40500_2_1-",
    "40200_4_1-40300_4_1-",
    "40400_2_1-",
    "40001_31_1-",
];

/// Deck confirmation page with the given `deck_pke`, `deck_gds`, `deck_tool`,
/// `deck_sup`, `deck_sta` and `deck_ene` values.
pub fn deck_page_with_lines(lines: [&str; 6]) -> String {
    let template = include_str!("deck_confirm_page.html");
    CardCategory::ALL
        .iter()
        .zip(lines)
        .fold(template.to_string(), |page, (category, line)| {
            page.replace(&format!("{{{{{}}}}}", category.field_name()), line)
        })
}

pub fn deck_page() -> String {
    deck_page_with_lines(SAMPLE_DECK_LINES)
}

pub fn pikachu() -> Card {
    Card::new(
        "ピカチュウex".to_string(),
        CardCategory::Pokemon,
        "44419".to_string(),
        "https://www.pokemon-card.com/assets/images/card_images/large/SV4a/044419_P_PIKACHUEX.jpg"
            .to_string(),
        Some(4),
    )
}

pub fn pikachu_other_print() -> Card {
    Card::new(
        "ピカチュウex".to_string(),
        CardCategory::Pokemon,
        "45001".to_string(),
        "https://www.pokemon-card.com/assets/images/card_images/large/SV8/045001_P_PIKACHUEX.jpg"
            .to_string(),
        Some(2),
    )
}

pub fn card_with_count(name: &str, count: Option<u32>) -> Card {
    Card::new(
        name.to_string(),
        CardCategory::Goods,
        name.to_string(),
        format!("https://cards.test/images/TEST/{}.jpg", name),
        count,
    )
}

/// Ten entries adding up to exactly 60 cards.
pub fn sixty_card_list() -> Vec<Card> {
    [4, 3, 2, 4, 4, 2, 4, 4, 2, 31]
        .iter()
        .enumerate()
        .map(|(i, count)| card_with_count(&format!("card{}", i), Some(*count)))
        .collect()
}

pub fn card_list(kind: usize) -> Vec<Card> {
    (0..kind)
        .map(|i| card_with_count(&format!("card{}", i), Some((i % 4 + 1) as u32)))
        .collect()
}
