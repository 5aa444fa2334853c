use std::fs;
use std::io::Cursor;

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use async_trait::async_trait;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use log::{debug, info, warn};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::cards::card::Card;
use crate::errors::{DeckQuizError, Result};
use crate::http_client::fetch_bytes;
use crate::utilities::constants::{CARD_HEIGHT, CARD_WIDTH};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const COUNT_BOX: Rgb<u8> = Rgb([0, 0, 0]);
const COUNT_TEXT: Rgb<u8> = Rgb([255, 255, 255]);

/// Smallest multiple of `multiple` that holds `value`, but never below `minimum`.
pub fn nearest_multiple(value: u32, multiple: u32, minimum: u32) -> u32 {
    (value.div_ceil(multiple) * multiple).max(minimum)
}

/// Rows and columns of the grid for `kind` distinct cards.
pub fn calc_row_column(kind: usize) -> (u32, u32) {
    let kind = kind as u32;
    if kind <= 6 {
        (1, kind)
    } else if kind <= 16 {
        (2, nearest_multiple(kind, 2, 6))
    } else if kind <= 27 {
        (3, nearest_multiple(kind, 3, 8))
    } else {
        (4, nearest_multiple(kind, 4, 9))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtworkFetcher: Send + Sync {
    /// Raw bytes of the artwork at `url`.
    async fn fetch_artwork(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<u8>>;
}

pub struct HttpArtworkFetcher {
    client: Client,
}

impl HttpArtworkFetcher {
    pub fn new(client: Client) -> Self {
        HttpArtworkFetcher { client }
    }
}

#[async_trait]
impl ArtworkFetcher for HttpArtworkFetcher {
    async fn fetch_artwork(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<u8>> {
        fetch_bytes(&self.client, url, cancel).await
    }
}

/// How the card counts are written on the tiles.
#[derive(Clone)]
pub enum CountFont {
    /// Seven segment digits drawn with rectangles, needs no font file.
    Segments,
    TrueType(FontArc),
}

impl CountFont {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(CountFont::Segments);
        };
        let bytes = fs::read(path)?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| DeckQuizError::Font {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        debug!("Loaded count font from {}", path);
        Ok(CountFont::TrueType(font))
    }
}

// Segments a to g, clockwise from the top with g in the middle.
const DIGIT_SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],
    [false, true, true, false, false, false, false],
    [true, true, false, true, true, false, true],
    [true, true, true, true, false, false, true],
    [false, true, true, false, false, true, true],
    [true, false, true, true, false, true, true],
    [true, false, true, true, true, true, true],
    [true, true, true, false, false, false, false],
    [true, true, true, true, true, true, true],
    [true, true, true, true, false, true, true],
];

fn draw_segment_digits(image: &mut RgbImage, text: &str, center: (i32, i32), height: u32) {
    let height = height.max(5) as i32;
    let width = height / 2;
    let thickness = (height / 10).max(1);
    let gap = thickness * 2;
    let digits: Vec<usize> = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    if digits.is_empty() {
        return;
    }
    let total_width = digits.len() as i32 * (width + gap) - gap;
    let top = center.1 - height / 2;
    let half = height / 2;

    for (i, digit) in digits.into_iter().enumerate() {
        let x = center.0 - total_width / 2 + i as i32 * (width + gap);
        let segments = [
            (x, top, width, thickness),
            (x + width - thickness, top, thickness, half),
            (x + width - thickness, top + half, thickness, height - half),
            (x, top + height - thickness, width, thickness),
            (x, top + half, thickness, height - half),
            (x, top, thickness, half),
            (x, top + half - thickness / 2, width, thickness),
        ];
        for (lit, (sx, sy, sw, sh)) in DIGIT_SEGMENTS[digit].iter().zip(segments) {
            if *lit {
                draw_filled_rect_mut(image, Rect::at(sx, sy).of_size(sw as u32, sh as u32), COUNT_TEXT);
            }
        }
    }
}

/// Top and bottom pixel rows of the inked glyphs, relative to the `y` given
/// to `draw_text_mut`, which puts the baseline one ascent below `y`.
fn ink_rows(font: &FontArc, scale: PxScale, text: &str) -> Option<(f32, f32)> {
    let scaled = font.as_scaled(scale);
    text.chars()
        .filter_map(|c| {
            let glyph = scaled
                .glyph_id(c)
                .with_scale_and_position(scale, point(0.0, scaled.ascent()));
            scaled.outline_glyph(glyph)
        })
        .map(|outlined| {
            let bounds = outlined.px_bounds();
            (bounds.min.y, bounds.max.y)
        })
        .reduce(|(top, bottom), (t, b)| (top.min(t), bottom.max(b)))
}

/// Artwork wider than it is tall comes in sideways and is turned upright.
pub fn orient_artwork(artwork: RgbImage) -> RgbImage {
    if artwork.width() > artwork.height() {
        imageops::rotate270(&artwork)
    } else {
        artwork
    }
}

pub fn concat_horizontally(left: Option<RgbImage>, right: RgbImage) -> RgbImage {
    let Some(left) = left else {
        return right;
    };
    let mut canvas = RgbImage::from_pixel(
        left.width() + right.width(),
        left.height().max(right.height()),
        BACKGROUND,
    );
    imageops::replace(&mut canvas, &left, 0, 0);
    imageops::replace(&mut canvas, &right, left.width() as i64, 0);
    canvas
}

pub fn concat_vertically(top: Option<RgbImage>, bottom: RgbImage) -> RgbImage {
    let Some(top) = top else {
        return bottom;
    };
    let mut canvas = RgbImage::from_pixel(
        top.width().max(bottom.width()),
        top.height() + bottom.height(),
        BACKGROUND,
    );
    imageops::replace(&mut canvas, &top, 0, 0);
    imageops::replace(&mut canvas, &bottom, 0, top.height() as i64);
    canvas
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub struct DeckListImageGenerator {
    fetcher: Box<dyn ArtworkFetcher>,
    font: CountFont,
    card_width: u32,
    card_height: u32,
}

impl DeckListImageGenerator {
    pub fn new(fetcher: impl ArtworkFetcher + 'static, font: CountFont) -> Self {
        DeckListImageGenerator {
            fetcher: Box::new(fetcher),
            font,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
        }
    }

    fn blank_tile(&self) -> RgbImage {
        RgbImage::from_pixel(self.card_width, self.card_height, BACKGROUND)
    }

    /// Writes `count` in a black box at the bottom centre of the tile.
    pub fn draw_count(&self, image: &mut RgbImage, count: Option<u32>) {
        let (width, height) = image.dimensions();
        let count_width = (width / 4).max(1);
        let count_height = (height / 8).max(1);
        let center = (
            (width / 2) as i32,
            (height - count_height / 2) as i32,
        );

        draw_filled_rect_mut(
            image,
            Rect::at(
                center.0 - (count_width / 2) as i32,
                center.1 - (count_height / 2) as i32,
            )
            .of_size(count_width, count_height),
            COUNT_BOX,
        );

        let Some(count) = count else {
            warn!("Card without a count, leaving the count box empty");
            return;
        };
        let text = count.to_string();
        match &self.font {
            CountFont::Segments => {
                draw_segment_digits(image, &text, center, count_height * 7 / 10);
            }
            CountFont::TrueType(font) => {
                let scale = PxScale::from(count_height as f32);
                let (text_width, _) = text_size(scale, font, &text);
                let Some((top, bottom)) = ink_rows(font, scale, &text) else {
                    return;
                };
                draw_text_mut(
                    image,
                    COUNT_TEXT,
                    center.0 - (text_width / 2) as i32,
                    center.1 - ((top + bottom) / 2.0).round() as i32,
                    scale,
                    font,
                    &text,
                );
            }
        }
    }

    async fn artwork_tile(&self, card: &Card, cancel: &CancellationToken) -> Result<RgbImage> {
        let bytes = self.fetcher.fetch_artwork(&card.image_url, cancel).await?;
        let artwork = orient_artwork(image::load_from_memory(&bytes)?.to_rgb8());
        Ok(imageops::resize(
            &artwork,
            self.card_width,
            self.card_height,
            FilterType::Lanczos3,
        ))
    }

    /// One grid cell. `None` is a blank filler tile.
    pub async fn generate_card_image(
        &self,
        card: Option<&Card>,
        with_image: bool,
        cancel: &CancellationToken,
    ) -> Result<RgbImage> {
        let Some(card) = card else {
            return Ok(self.blank_tile());
        };
        let mut tile = if with_image {
            self.artwork_tile(card, cancel).await?
        } else {
            self.blank_tile()
        };
        self.draw_count(&mut tile, card.count);
        Ok(tile)
    }

    /// Lays the cards out row by row. An empty list gives one blank tile.
    pub async fn generate_card_list_image(
        &self,
        cards: &[Card],
        with_image: bool,
        cancel: &CancellationToken,
    ) -> Result<RgbImage> {
        let (row_count, column_count) = calc_row_column(cards.len());
        let column_count = column_count.max(1);
        info!(
            "Generating {} x {} grid for {} cards",
            row_count,
            column_count,
            cards.len()
        );

        let mut card_list_image = None;
        let mut card_row_image = None;
        for i in 0..(row_count * column_count) as usize {
            let card_image = self
                .generate_card_image(cards.get(i), with_image, cancel)
                .await?;
            card_row_image = Some(concat_horizontally(card_row_image.take(), card_image));

            if (i + 1) % column_count as usize == 0 {
                if let Some(row) = card_row_image.take() {
                    card_list_image = Some(concat_vertically(card_list_image.take(), row));
                }
            }
        }

        Ok(card_list_image
            .or(card_row_image)
            .unwrap_or_else(|| self.blank_tile()))
    }
}
