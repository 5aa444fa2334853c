use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Pokemon,
    Goods,
    Tool,
    Supporter,
    Stadium,
    Energy,
}

impl CardCategory {
    /// The order the categories appear in on a deck page, and in a `Deck`.
    pub const ALL: [CardCategory; 6] = [
        CardCategory::Pokemon,
        CardCategory::Goods,
        CardCategory::Tool,
        CardCategory::Supporter,
        CardCategory::Stadium,
        CardCategory::Energy,
    ];

    /// Label used by the deck site.
    pub fn label(&self) -> &'static str {
        match self {
            CardCategory::Pokemon => "ポケモン",
            CardCategory::Goods => "グッズ",
            CardCategory::Tool => "持ち物",
            CardCategory::Supporter => "サポート",
            CardCategory::Stadium => "スタジアム",
            CardCategory::Energy => "エネルギー",
        }
    }

    /// Name of the hidden input holding this category's card line.
    pub fn field_name(&self) -> &'static str {
        match self {
            CardCategory::Pokemon => "deck_pke",
            CardCategory::Goods => "deck_gds",
            CardCategory::Tool => "deck_tool",
            CardCategory::Supporter => "deck_sup",
            CardCategory::Stadium => "deck_sta",
            CardCategory::Energy => "deck_ene",
        }
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardCategory::Pokemon => write!(f, "Pokemon"),
            CardCategory::Goods => write!(f, "Goods"),
            CardCategory::Tool => write!(f, "Tool"),
            CardCategory::Supporter => write!(f, "Supporter"),
            CardCategory::Stadium => write!(f, "Stadium"),
            CardCategory::Energy => write!(f, "Energy"),
        }
    }
}
