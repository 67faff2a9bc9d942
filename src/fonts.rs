/*
 *  fonts.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Font identifiers, metrics and glyph rasterization
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::prelude::Point;
use serde::{Deserialize, Serialize};

use crate::font_data::{FIRST_CHAR, FONT_3X5, FONT_5X7, LAST_CHAR, PROP_BITMAPS, PROP_GLYPHS};

/// Distance from the top of a text line to the proportional font baseline.
pub const PROP_BASELINE: i32 = 5;

/// The three embedded fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontId {
    /// 3x5 fixed cell
    Small3x5,
    /// 5x7 fixed cell
    #[default]
    Fixed5x7,
    /// Variable width, baseline aligned ("awtrix")
    Proportional,
}

impl From<String> for FontId {
    fn from(name: String) -> Self {
        FontId::from_name(&name)
    }
}

impl From<FontId> for String {
    fn from(font: FontId) -> Self {
        font.name().to_string()
    }
}

impl FontId {
    /// Unknown names fall back to the 5x7 font.
    pub fn from_name(name: &str) -> Self {
        match name {
            "3x5" => FontId::Small3x5,
            "awtrix" => FontId::Proportional,
            _ => FontId::Fixed5x7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontId::Small3x5 => "3x5",
            FontId::Fixed5x7 => "5x7",
            FontId::Proportional => "awtrix",
        }
    }

    /// Advance used for characters the font cannot draw.
    pub fn default_advance(&self) -> u32 {
        match self {
            FontId::Small3x5 => 3,
            FontId::Fixed5x7 => 5,
            FontId::Proportional => 4,
        }
    }

    /// Gap inserted between two characters for a requested spacing.
    ///
    /// Proportional advances already reserve a trailing column, so one pixel
    /// of the requested spacing is absorbed there.
    pub fn spacing_adjust(&self, spacing: i32) -> i32 {
        match self {
            FontId::Proportional => spacing - 1,
            _ => spacing,
        }
    }

    /// Line pitch used when sliding between wrapped lines.
    pub fn line_height(&self) -> i32 {
        match self {
            FontId::Small3x5 => 6,
            _ => 8,
        }
    }

    fn cell(&self) -> Option<(&'static [u8], u32, u32)> {
        match self {
            FontId::Small3x5 => Some((&FONT_3X5, 3, 5)),
            FontId::Fixed5x7 => Some((&FONT_5X7, 5, 7)),
            FontId::Proportional => None,
        }
    }
}

/// 1-bit glyph bitmap, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl GlyphMask {
    fn new(width: u32, height: u32) -> Self {
        Self { width, height, bits: vec![false; (width * height) as usize] }
    }

    fn set(&mut self, x: u32, y: u32) {
        let i = (y * self.width + x) as usize;
        self.bits[i] = true;
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    /// Coordinates of every lit pixel, relative to the glyph origin.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| Point::new((i % w) as i32, (i / w) as i32))
    }
}

/// A rasterized character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// `None` when the character draws as blank space
    pub mask: Option<GlyphMask>,
    pub advance: u32,
    /// Where the mask is placed relative to the text cursor
    pub offset: Point,
}

/// Rasterize one character. Pure; never fails.
pub fn rasterize(font: FontId, ch: char) -> Glyph {
    let code = ch as u32;
    let mask = match font.cell() {
        Some((table, w, h)) => fixed_mask(table, w, h, code),
        None => prop_mask(code),
    };

    match mask {
        Some((mask, advance, offset)) => Glyph { mask: Some(mask), advance, offset },
        None => Glyph {
            mask: None,
            advance: font.default_advance(),
            offset: Point::zero(),
        },
    }
}

fn fixed_mask(table: &[u8], w: u32, h: u32, code: u32) -> Option<(GlyphMask, u32, Point)> {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&code) {
        return None;
    }
    let base = ((code - FIRST_CHAR) * w) as usize;
    let columns = table.get(base..base + w as usize)?;

    let mut mask = GlyphMask::new(w, h);
    for (x, byte) in columns.iter().enumerate() {
        for y in 0..h {
            if (byte >> y) & 1 == 1 {
                mask.set(x as u32, y);
            }
        }
    }
    Some((mask, w, Point::zero()))
}

fn prop_mask(code: u32) -> Option<(GlyphMask, u32, Point)> {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&code) {
        return None;
    }
    let g = PROP_GLYPHS.get((code - FIRST_CHAR) as usize)?;
    if g.width == 0 || g.height == 0 {
        return None;
    }

    let (w, h) = (g.width as u32, g.height as u32);
    let mut mask = GlyphMask::new(w, h);
    let mut byte_idx = g.bitmap_offset as usize;
    let mut bits = 0u8;
    let mut bit_counter = 0u32;
    for y in 0..h {
        for x in 0..w {
            if bit_counter & 7 == 0 {
                bits = PROP_BITMAPS.get(byte_idx).copied().unwrap_or(0);
                byte_idx += 1;
            }
            bit_counter += 1;
            if bits & 0x80 != 0 {
                mask.set(x, y);
            }
            bits <<= 1;
        }
    }

    let offset = Point::new(g.x_offset as i32, PROP_BASELINE + g.y_offset as i32);
    Some((mask, g.advance as u32, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_names() {
        assert_eq!(FontId::from_name("3x5"), FontId::Small3x5);
        assert_eq!(FontId::from_name("5x7"), FontId::Fixed5x7);
        assert_eq!(FontId::from_name("awtrix"), FontId::Proportional);
        assert_eq!(FontId::from_name("comic-sans"), FontId::Fixed5x7);
        assert_eq!(FontId::default(), FontId::Fixed5x7);
    }

    #[test]
    fn test_fixed_glyph_shape() {
        let g = rasterize(FontId::Fixed5x7, 'I');
        let mask = g.mask.unwrap();
        assert_eq!((mask.width(), mask.height()), (5, 7));
        assert_eq!(g.advance, 5);
        // vertical stroke down the middle column
        assert!((0..7).all(|y| mask.get(2, y)));
        assert!(!mask.get(0, 3));
    }

    #[test]
    fn test_space_has_blank_mask_in_fixed_fonts() {
        let g = rasterize(FontId::Small3x5, ' ');
        assert_eq!(g.advance, 3);
        assert_eq!(g.mask.unwrap().points().count(), 0);
    }

    #[test]
    fn test_unsupported_chars_are_blank() {
        for font in [FontId::Small3x5, FontId::Fixed5x7, FontId::Proportional] {
            let g = rasterize(font, '€');
            assert!(g.mask.is_none());
            assert_eq!(g.advance, font.default_advance());
        }
    }

    #[test]
    fn test_proportional_widths_vary() {
        let i = rasterize(FontId::Proportional, 'i');
        let m = rasterize(FontId::Proportional, 'M');
        assert!(i.advance < m.advance);
        assert_eq!(m.advance, m.mask.as_ref().unwrap().width() + 1);
        // capital letters start at the top of the line
        assert_eq!(m.offset, Point::new(0, 0));
        // lowercase x-height sits lower
        assert!(rasterize(FontId::Proportional, 'a').offset.y > 0);
    }

    #[test]
    fn test_proportional_space_uses_default_advance() {
        let g = rasterize(FontId::Proportional, ' ');
        assert!(g.mask.is_none());
        assert_eq!(g.advance, 4);
    }

    #[test]
    fn test_every_printable_char_rasterizes() {
        for code in FIRST_CHAR..=LAST_CHAR {
            let ch = char::from_u32(code).unwrap();
            for font in [FontId::Small3x5, FontId::Fixed5x7] {
                assert!(rasterize(font, ch).mask.is_some(), "{:?} {:?}", font, ch);
            }
        }
    }
}
