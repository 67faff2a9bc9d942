/*
 *  font_data.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Embedded bitmap font tables, printable ASCII (0x20..=0x7E)
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

//! Fixed fonts are column-major: one byte per column, bit 0 is the top row.
//! The proportional font uses the GFX layout: a row-major, MSB-first bit
//! stream per glyph (each glyph starts on a byte boundary) plus a metrics table.

/// First code point stored in every table.
pub const FIRST_CHAR: u32 = 0x20;
/// Last code point stored in every table.
pub const LAST_CHAR: u32 = 0x7E;

/// Metrics for one glyph of the proportional font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropGlyph {
    /// Byte offset of the glyph in `PROP_BITMAPS`
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// Cursor advance, includes one trailing blank column
    pub advance: u8,
    pub x_offset: i8,
    /// Offset from the baseline to the top row (negative is up)
    pub y_offset: i8,
}

impl PropGlyph {
    const fn new(bitmap_offset: u16, width: u8, height: u8, advance: u8, x_offset: i8, y_offset: i8) -> Self {
        Self { bitmap_offset, width, height, advance, x_offset, y_offset }
    }
}

pub const FONT_5X7: [u8; 95 * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '\''
    0x00, 0x1C, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // ')'
    0x08, 0x2A, 0x1C, 0x2A, 0x08, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x01, 0x01, // 'F'
    0x3E, 0x41, 0x41, 0x51, 0x32, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x04, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x7F, 0x20, 0x18, 0x20, 0x7F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x03, 0x04, 0x78, 0x04, 0x03, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x00, 0x7F, 0x41, 0x41, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    0x41, 0x41, 0x7F, 0x00, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x08, 0x14, 0x54, 0x54, 0x3C, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 'j'
    0x00, 0x7F, 0x10, 0x28, 0x44, // 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7F, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x10, 0x08, 0x08, 0x10, 0x08, // '~'
];

pub const FONT_3X5: [u8; 95 * 3] = [
    0x00, 0x00, 0x00, // ' '
    0x00, 0x17, 0x00, // '!'
    0x03, 0x00, 0x03, // '"'
    0x1F, 0x0A, 0x1F, // '#'
    0x12, 0x1F, 0x09, // '$'
    0x19, 0x04, 0x13, // '%'
    0x0A, 0x15, 0x1A, // '&'
    0x00, 0x03, 0x00, // '\''
    0x00, 0x0E, 0x11, // '('
    0x11, 0x0E, 0x00, // ')'
    0x0A, 0x04, 0x0A, // '*'
    0x04, 0x0E, 0x04, // '+'
    0x10, 0x08, 0x00, // ','
    0x04, 0x04, 0x04, // '-'
    0x00, 0x10, 0x00, // '.'
    0x18, 0x04, 0x03, // '/'
    0x1F, 0x11, 0x1F, // '0'
    0x12, 0x1F, 0x10, // '1'
    0x1D, 0x15, 0x17, // '2'
    0x11, 0x15, 0x1F, // '3'
    0x07, 0x04, 0x1F, // '4'
    0x17, 0x15, 0x1D, // '5'
    0x1F, 0x15, 0x1D, // '6'
    0x01, 0x1D, 0x03, // '7'
    0x1F, 0x15, 0x1F, // '8'
    0x17, 0x15, 0x1F, // '9'
    0x00, 0x0A, 0x00, // ':'
    0x10, 0x0A, 0x00, // ';'
    0x04, 0x0A, 0x11, // '<'
    0x0A, 0x0A, 0x0A, // '='
    0x11, 0x0A, 0x04, // '>'
    0x01, 0x15, 0x07, // '?'
    0x0E, 0x15, 0x16, // '@'
    0x1E, 0x05, 0x1E, // 'A'
    0x1F, 0x15, 0x0A, // 'B'
    0x0E, 0x11, 0x11, // 'C'
    0x1F, 0x11, 0x0E, // 'D'
    0x1F, 0x15, 0x11, // 'E'
    0x1F, 0x05, 0x01, // 'F'
    0x0E, 0x11, 0x1D, // 'G'
    0x1F, 0x04, 0x1F, // 'H'
    0x11, 0x1F, 0x11, // 'I'
    0x08, 0x10, 0x0F, // 'J'
    0x1F, 0x04, 0x1B, // 'K'
    0x1F, 0x10, 0x10, // 'L'
    0x1F, 0x06, 0x1F, // 'M'
    0x1F, 0x01, 0x1E, // 'N'
    0x0E, 0x11, 0x0E, // 'O'
    0x1F, 0x05, 0x02, // 'P'
    0x0E, 0x19, 0x16, // 'Q'
    0x1F, 0x05, 0x1A, // 'R'
    0x12, 0x15, 0x09, // 'S'
    0x01, 0x1F, 0x01, // 'T'
    0x0F, 0x10, 0x1F, // 'U'
    0x07, 0x18, 0x07, // 'V'
    0x1F, 0x0C, 0x1F, // 'W'
    0x1B, 0x04, 0x1B, // 'X'
    0x03, 0x1C, 0x03, // 'Y'
    0x19, 0x15, 0x13, // 'Z'
    0x1F, 0x11, 0x00, // '['
    0x03, 0x04, 0x18, // '\\'
    0x00, 0x11, 0x1F, // ']'
    0x02, 0x01, 0x02, // '^'
    0x10, 0x10, 0x10, // '_'
    0x01, 0x02, 0x00, // '`'
    0x0C, 0x12, 0x1E, // 'a'
    0x1F, 0x12, 0x0C, // 'b'
    0x0C, 0x12, 0x12, // 'c'
    0x0C, 0x12, 0x1F, // 'd'
    0x0C, 0x1A, 0x16, // 'e'
    0x04, 0x1E, 0x05, // 'f'
    0x12, 0x15, 0x0F, // 'g'
    0x1F, 0x02, 0x1C, // 'h'
    0x00, 0x1D, 0x00, // 'i'
    0x08, 0x10, 0x0D, // 'j'
    0x1F, 0x0C, 0x12, // 'k'
    0x11, 0x1F, 0x10, // 'l'
    0x1E, 0x0E, 0x1E, // 'm'
    0x1E, 0x02, 0x1C, // 'n'
    0x0C, 0x12, 0x0C, // 'o'
    0x1E, 0x0A, 0x04, // 'p'
    0x04, 0x0A, 0x1E, // 'q'
    0x1C, 0x02, 0x02, // 'r'
    0x14, 0x16, 0x0A, // 's'
    0x02, 0x0F, 0x12, // 't'
    0x0E, 0x10, 0x1E, // 'u'
    0x0E, 0x10, 0x0E, // 'v'
    0x1E, 0x1C, 0x1E, // 'w'
    0x12, 0x0C, 0x12, // 'x'
    0x12, 0x14, 0x0E, // 'y'
    0x1A, 0x1E, 0x16, // 'z'
    0x04, 0x1F, 0x11, // '{'
    0x00, 0x1F, 0x00, // '|'
    0x11, 0x1F, 0x04, // '}'
    0x0C, 0x04, 0x06, // '~'
];

pub const PROP_BITMAPS: [u8; 376] = [
    0xFA, 0xB6, 0x80, 0x52, 0xBE, 0xAF, 0xA9, 0x40, 0x23, 0xE8, 0xE2, 0xF8,
    0x80, 0xC6, 0x44, 0x44, 0x4C, 0x60, 0x64, 0xA8, 0x8A, 0xC9, 0xA0, 0xD8,
    0x2A, 0x48, 0x88, 0x88, 0x92, 0xA0, 0x51, 0x3E, 0x45, 0x00, 0x21, 0x3E,
    0x42, 0x00, 0xD8, 0xF8, 0xF0, 0x08, 0x88, 0x88, 0x00, 0x74, 0x67, 0x5C,
    0xC5, 0xC0, 0x59, 0x24, 0xB8, 0x74, 0x42, 0x22, 0x23, 0xE0, 0xF8, 0x88,
    0x20, 0xC5, 0xC0, 0x11, 0x95, 0x2F, 0x88, 0x40, 0xFC, 0x3C, 0x10, 0xC5,
    0xC0, 0x32, 0x21, 0xE8, 0xC5, 0xC0, 0xF8, 0x44, 0x44, 0x21, 0x00, 0x74,
    0x62, 0xE8, 0xC5, 0xC0, 0x74, 0x62, 0xF0, 0x89, 0x80, 0xF3, 0xC0, 0xF3,
    0x60, 0x12, 0x48, 0x42, 0x10, 0xF8, 0x3E, 0x84, 0x21, 0x24, 0x80, 0x74,
    0x42, 0x22, 0x00, 0x80, 0x74, 0x42, 0xDA, 0xD5, 0xC0, 0x74, 0x63, 0x1F,
    0xC6, 0x20, 0xF4, 0x63, 0xE8, 0xC7, 0xC0, 0x74, 0x61, 0x08, 0x45, 0xC0,
    0xE4, 0xA3, 0x18, 0xCB, 0x80, 0xFC, 0x21, 0xE8, 0x43, 0xE0, 0xFC, 0x21,
    0xC8, 0x42, 0x00, 0x74, 0x61, 0x09, 0xC5, 0xC0, 0x8C, 0x63, 0xF8, 0xC6,
    0x20, 0xE9, 0x24, 0xB8, 0x38, 0x84, 0x21, 0x49, 0x80, 0x8C, 0xA9, 0x8A,
    0x4A, 0x20, 0x84, 0x21, 0x08, 0x43, 0xE0, 0x8E, 0xEB, 0x18, 0xC6, 0x20,
    0x8C, 0x73, 0x59, 0xC6, 0x20, 0x74, 0x63, 0x18, 0xC5, 0xC0, 0xF4, 0x63,
    0xE8, 0x42, 0x00, 0x74, 0x63, 0x1A, 0xC9, 0xA0, 0xF4, 0x63, 0xEA, 0x4A,
    0x20, 0x7C, 0x20, 0xE0, 0x87, 0xC0, 0xF9, 0x08, 0x42, 0x10, 0x80, 0x8C,
    0x63, 0x18, 0xC5, 0xC0, 0x8C, 0x63, 0x18, 0xA8, 0x80, 0x8C, 0x63, 0x5A,
    0xEE, 0x20, 0x8C, 0x54, 0x45, 0x46, 0x20, 0x8C, 0x54, 0x42, 0x10, 0x80,
    0xF8, 0x44, 0x44, 0x43, 0xE0, 0xF2, 0x49, 0x38, 0x82, 0x08, 0x20, 0x80,
    0xE4, 0x92, 0x78, 0x22, 0xA2, 0xF8, 0x88, 0x80, 0x70, 0x5F, 0x17, 0x80,
    0x84, 0x2D, 0x98, 0xC7, 0xC0, 0x74, 0x21, 0x17, 0x00, 0x08, 0x5B, 0x38,
    0xC5, 0xE0, 0x74, 0x7F, 0x07, 0x00, 0x32, 0x51, 0xC4, 0x21, 0x00, 0x7C,
    0x5E, 0x13, 0x00, 0x84, 0x2D, 0x98, 0xC6, 0x20, 0x43, 0x24, 0xB8, 0x10,
    0x31, 0x19, 0x60, 0x88, 0x9A, 0xCA, 0x90, 0xC9, 0x24, 0xB8, 0xD5, 0x6B,
    0x18, 0x80, 0xB6, 0x63, 0x18, 0x80, 0x74, 0x63, 0x17, 0x00, 0xF4, 0x7D,
    0x08, 0x00, 0x6C, 0xDE, 0x10, 0x80, 0xB6, 0x61, 0x08, 0x00, 0x74, 0x1C,
    0x1F, 0x00, 0x42, 0x38, 0x84, 0x24, 0xC0, 0x8C, 0x63, 0x36, 0x80, 0x8C,
    0x62, 0xA2, 0x00, 0x8C, 0x6B, 0x55, 0x00, 0x8A, 0x88, 0xA8, 0x80, 0x8C,
    0x5E, 0x17, 0x00, 0xF8, 0x88, 0x8F, 0x80, 0x29, 0x44, 0x88, 0xFE, 0x89,
    0x14, 0xA0, 0x6C, 0x80,
];

pub const PROP_GLYPHS: [PropGlyph; 95] = [
    PropGlyph::new(0, 0, 0, 4, 0, 0), // ' '
    PropGlyph::new(0, 1, 7, 2, 0, -5), // '!'
    PropGlyph::new(1, 3, 3, 4, 0, -5), // '"'
    PropGlyph::new(3, 5, 7, 6, 0, -5), // '#'
    PropGlyph::new(8, 5, 7, 6, 0, -5), // '$'
    PropGlyph::new(13, 5, 7, 6, 0, -5), // '%'
    PropGlyph::new(18, 5, 7, 6, 0, -5), // '&'
    PropGlyph::new(23, 2, 3, 3, 0, -5), // '\''
    PropGlyph::new(24, 3, 7, 4, 0, -5), // '('
    PropGlyph::new(27, 3, 7, 4, 0, -5), // ')'
    PropGlyph::new(30, 5, 5, 6, 0, -4), // '*'
    PropGlyph::new(34, 5, 5, 6, 0, -4), // '+'
    PropGlyph::new(38, 2, 3, 3, 0, -1), // ','
    PropGlyph::new(39, 5, 1, 6, 0, -2), // '-'
    PropGlyph::new(40, 2, 2, 3, 0, 0), // '.'
    PropGlyph::new(41, 5, 5, 6, 0, -4), // '/'
    PropGlyph::new(45, 5, 7, 6, 0, -5), // '0'
    PropGlyph::new(50, 3, 7, 4, 0, -5), // '1'
    PropGlyph::new(53, 5, 7, 6, 0, -5), // '2'
    PropGlyph::new(58, 5, 7, 6, 0, -5), // '3'
    PropGlyph::new(63, 5, 7, 6, 0, -5), // '4'
    PropGlyph::new(68, 5, 7, 6, 0, -5), // '5'
    PropGlyph::new(73, 5, 7, 6, 0, -5), // '6'
    PropGlyph::new(78, 5, 7, 6, 0, -5), // '7'
    PropGlyph::new(83, 5, 7, 6, 0, -5), // '8'
    PropGlyph::new(88, 5, 7, 6, 0, -5), // '9'
    PropGlyph::new(93, 2, 5, 3, 0, -4), // ':'
    PropGlyph::new(95, 2, 6, 3, 0, -4), // ';'
    PropGlyph::new(97, 4, 7, 5, 0, -5), // '<'
    PropGlyph::new(101, 5, 3, 6, 0, -3), // '='
    PropGlyph::new(103, 4, 7, 5, 0, -5), // '>'
    PropGlyph::new(107, 5, 7, 6, 0, -5), // '?'
    PropGlyph::new(112, 5, 7, 6, 0, -5), // '@'
    PropGlyph::new(117, 5, 7, 6, 0, -5), // 'A'
    PropGlyph::new(122, 5, 7, 6, 0, -5), // 'B'
    PropGlyph::new(127, 5, 7, 6, 0, -5), // 'C'
    PropGlyph::new(132, 5, 7, 6, 0, -5), // 'D'
    PropGlyph::new(137, 5, 7, 6, 0, -5), // 'E'
    PropGlyph::new(142, 5, 7, 6, 0, -5), // 'F'
    PropGlyph::new(147, 5, 7, 6, 0, -5), // 'G'
    PropGlyph::new(152, 5, 7, 6, 0, -5), // 'H'
    PropGlyph::new(157, 3, 7, 4, 0, -5), // 'I'
    PropGlyph::new(160, 5, 7, 6, 0, -5), // 'J'
    PropGlyph::new(165, 5, 7, 6, 0, -5), // 'K'
    PropGlyph::new(170, 5, 7, 6, 0, -5), // 'L'
    PropGlyph::new(175, 5, 7, 6, 0, -5), // 'M'
    PropGlyph::new(180, 5, 7, 6, 0, -5), // 'N'
    PropGlyph::new(185, 5, 7, 6, 0, -5), // 'O'
    PropGlyph::new(190, 5, 7, 6, 0, -5), // 'P'
    PropGlyph::new(195, 5, 7, 6, 0, -5), // 'Q'
    PropGlyph::new(200, 5, 7, 6, 0, -5), // 'R'
    PropGlyph::new(205, 5, 7, 6, 0, -5), // 'S'
    PropGlyph::new(210, 5, 7, 6, 0, -5), // 'T'
    PropGlyph::new(215, 5, 7, 6, 0, -5), // 'U'
    PropGlyph::new(220, 5, 7, 6, 0, -5), // 'V'
    PropGlyph::new(225, 5, 7, 6, 0, -5), // 'W'
    PropGlyph::new(230, 5, 7, 6, 0, -5), // 'X'
    PropGlyph::new(235, 5, 7, 6, 0, -5), // 'Y'
    PropGlyph::new(240, 5, 7, 6, 0, -5), // 'Z'
    PropGlyph::new(245, 3, 7, 4, 0, -5), // '['
    PropGlyph::new(248, 5, 5, 6, 0, -4), // '\\'
    PropGlyph::new(252, 3, 7, 4, 0, -5), // ']'
    PropGlyph::new(255, 5, 3, 6, 0, -5), // '^'
    PropGlyph::new(257, 5, 1, 6, 0, 1), // '_'
    PropGlyph::new(258, 3, 3, 4, 0, -5), // '`'
    PropGlyph::new(260, 5, 5, 6, 0, -3), // 'a'
    PropGlyph::new(264, 5, 7, 6, 0, -5), // 'b'
    PropGlyph::new(269, 5, 5, 6, 0, -3), // 'c'
    PropGlyph::new(273, 5, 7, 6, 0, -5), // 'd'
    PropGlyph::new(278, 5, 5, 6, 0, -3), // 'e'
    PropGlyph::new(282, 5, 7, 6, 0, -5), // 'f'
    PropGlyph::new(287, 5, 5, 6, 0, -3), // 'g'
    PropGlyph::new(291, 5, 7, 6, 0, -5), // 'h'
    PropGlyph::new(296, 3, 7, 4, 0, -5), // 'i'
    PropGlyph::new(299, 4, 7, 5, 0, -5), // 'j'
    PropGlyph::new(303, 4, 7, 5, 0, -5), // 'k'
    PropGlyph::new(307, 3, 7, 4, 0, -5), // 'l'
    PropGlyph::new(310, 5, 5, 6, 0, -3), // 'm'
    PropGlyph::new(314, 5, 5, 6, 0, -3), // 'n'
    PropGlyph::new(318, 5, 5, 6, 0, -3), // 'o'
    PropGlyph::new(322, 5, 5, 6, 0, -3), // 'p'
    PropGlyph::new(326, 5, 5, 6, 0, -3), // 'q'
    PropGlyph::new(330, 5, 5, 6, 0, -3), // 'r'
    PropGlyph::new(334, 5, 5, 6, 0, -3), // 's'
    PropGlyph::new(338, 5, 7, 6, 0, -5), // 't'
    PropGlyph::new(343, 5, 5, 6, 0, -3), // 'u'
    PropGlyph::new(347, 5, 5, 6, 0, -3), // 'v'
    PropGlyph::new(351, 5, 5, 6, 0, -3), // 'w'
    PropGlyph::new(355, 5, 5, 6, 0, -3), // 'x'
    PropGlyph::new(359, 5, 5, 6, 0, -3), // 'y'
    PropGlyph::new(363, 5, 5, 6, 0, -3), // 'z'
    PropGlyph::new(367, 3, 7, 4, 0, -5), // '{'
    PropGlyph::new(370, 1, 7, 2, 0, -5), // '|'
    PropGlyph::new(371, 3, 7, 4, 0, -5), // '}'
    PropGlyph::new(374, 5, 2, 6, 0, -2), // '~'
];
