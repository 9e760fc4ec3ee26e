//! Open Graph preview cards: a 1200x630 PNG with a coloured frame and the
//! title drawn in a 5x7 bitmap font.

use crate::error::ServerError;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use strum_macros::{Display, EnumString};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

const MARGIN: u32 = 80;
const TITLE_SCALE: u32 = 8;
const BRAND_SCALE: u32 = 4;
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const DEFAULT_TITLE: &str = "ScamCheck";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum OgVariant {
    Scam,
    Safe,
    Neutral,
}

impl OgVariant {
    /// Unknown or missing variants fall back to the neutral palette.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().to_ascii_lowercase().parse().ok())
            .unwrap_or(OgVariant::Neutral)
    }

    fn palette(self) -> (Rgb<u8>, Rgb<u8>) {
        match self {
            OgVariant::Scam => (Rgb([127, 29, 29]), Rgb([248, 113, 113])),
            OgVariant::Safe => (Rgb([20, 83, 45]), Rgb([74, 222, 128])),
            OgVariant::Neutral => (Rgb([30, 41, 59]), Rgb([96, 165, 250])),
        }
    }
}

fn glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        ' ' => [0x00; 7],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}

fn advance(scale: u32) -> u32 {
    (GLYPH_WIDTH + 1) * scale
}

/// Characters that fit on one title line.
pub fn max_title_chars() -> usize {
    ((WIDTH - 2 * MARGIN) / advance(TITLE_SCALE)) as usize
}

/// Blank titles become the brand name; long ones are cut with an ellipsis.
pub fn fit_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    let max = max_title_chars();
    if title.chars().count() <= max {
        return title.to_string();
    }
    let head: String = title.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", head.trim_end())
}

fn draw_text(img: &mut RgbImage, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    for (index, ch) in text.chars().enumerate() {
        let origin_x = x + index as u32 * advance(scale);
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                fill_rect(
                    img,
                    origin_x + col * scale,
                    y + row as u32 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    for py in y..(y + height).min(img.height()) {
        for px in x..(x + width).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

pub fn render(title: &str, variant: OgVariant) -> Result<Vec<u8>, ServerError> {
    let (background, accent) = variant.palette();
    let white = Rgb([255, 255, 255]);
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, background);

    fill_rect(&mut img, 0, 0, WIDTH, 24, accent);
    fill_rect(&mut img, MARGIN, 200, 120, 12, accent);

    let title = fit_title(title);
    let title_y = (HEIGHT - GLYPH_HEIGHT * TITLE_SCALE) / 2;
    draw_text(&mut img, &title, MARGIN, title_y, TITLE_SCALE, white);

    let brand_y = HEIGHT - MARGIN - GLYPH_HEIGHT * BRAND_SCALE;
    draw_text(&mut img, "SCAMCHECK", MARGIN, brand_y, BRAND_SCALE, accent);

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parsing_falls_back_to_neutral() {
        assert_eq!(OgVariant::parse(Some("scam")), OgVariant::Scam);
        assert_eq!(OgVariant::parse(Some(" SAFE ")), OgVariant::Safe);
        assert_eq!(OgVariant::parse(Some("purple")), OgVariant::Neutral);
        assert_eq!(OgVariant::parse(None), OgVariant::Neutral);
    }

    #[test]
    fn titles_are_fitted() {
        assert_eq!(fit_title("   "), "ScamCheck");
        assert_eq!(fit_title("Risk 85%"), "Risk 85%");

        let long = "x".repeat(100);
        let fitted = fit_title(&long);
        assert_eq!(fitted.chars().count(), max_title_chars());
        assert!(fitted.ends_with("..."));
    }

    #[test]
    fn renders_png_at_card_size() {
        let bytes = render("Risk 85%", OgVariant::Scam).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (WIDTH, HEIGHT));

        let rgb = decoded.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0), &OgVariant::Scam.palette().1);
        assert_eq!(rgb.get_pixel(WIDTH - 1, HEIGHT - 1), &OgVariant::Scam.palette().0);
    }

    #[test]
    fn non_ascii_titles_still_render() {
        assert!(render("ระวัง! ความเสี่ยงสูง", OgVariant::Neutral).is_ok());
    }
}
