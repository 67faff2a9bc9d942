/*
 *  textlayout.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Text measurement, diacritic folding and greedy word wrap
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

use crate::fonts::FontId;
use crate::glyph_cache::GlyphCache;

/// Accented letters the device fonts cannot draw, with their ASCII stand-ins.
const FOLDED_CHARS: [(char, char); 18] = [
    ('ą', 'a'), ('ć', 'c'), ('ę', 'e'), ('ł', 'l'), ('ń', 'n'),
    ('ó', 'o'), ('ś', 's'), ('ź', 'z'), ('ż', 'z'),
    ('Ą', 'A'), ('Ć', 'C'), ('Ę', 'E'), ('Ł', 'L'), ('Ń', 'N'),
    ('Ó', 'O'), ('Ś', 'S'), ('Ź', 'Z'), ('Ż', 'Z'),
];

/// Fold accented letters to plain ASCII.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            FOLDED_CHARS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

/// Width in pixels of `text`: advances plus the gaps between characters.
pub fn measure(glyphs: &GlyphCache, text: &str, font: FontId, spacing: i32) -> i32 {
    let mut width = 0i32;
    let mut count = 0i32;
    for ch in text.chars() {
        width += glyphs.advance(font, ch) as i32;
        count += 1;
    }
    if count > 1 {
        width += (count - 1) * font.spacing_adjust(spacing);
    }
    width
}

/// Width of `left` followed directly by `right`, given their own widths.
fn joined_width(left: (i32, bool), right: (i32, bool), gap: i32) -> i32 {
    match (left, right) {
        ((_, true), (w, _)) => w,
        ((w, _), (_, true)) => w,
        ((l, _), (r, _)) => l + gap + r,
    }
}

/// Greedy word wrap on single spaces.
///
/// Words are never split; a word wider than `max_width` gets a line of its own.
/// Joining the result with single spaces gives back the input.
pub fn wrap(glyphs: &GlyphCache, text: &str, font: FontId, spacing: i32, max_width: i32) -> Vec<String> {
    let gap = font.spacing_adjust(spacing);
    let space = (glyphs.advance(font, ' ') as i32, false);

    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let word_width = measure(glyphs, word, font, spacing);
        if current.is_empty() {
            current.push(word);
            current_width = word_width;
            continue;
        }
        // the space costs its advance plus a gap on each side
        let line_empty = current.len() == 1 && current[0].is_empty();
        let with_space = joined_width((current_width, line_empty), space, gap);
        let candidate = joined_width((with_space, false), (word_width, word.is_empty()), gap);
        if candidate <= max_width {
            current.push(word);
            current_width = candidate;
        } else {
            lines.push(current.join(" "));
            current = vec![word];
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}
