/*
 *  display/components/text.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Static text drawing with the embedded bitmap fonts
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

use crate::display::canvas::Canvas;
use crate::display::element::{TextElement, TextStyle};
use crate::glyph_cache::GlyphCache;
use crate::textlayout::sanitize;

/// Draw one line of already sanitized text with its top-left at `origin`.
pub fn draw_line(canvas: &mut Canvas, glyphs: &GlyphCache, text: &str, origin: Point, style: TextStyle) {
    let color = style.color.rgba();
    let gap = style.font.spacing_adjust(style.spacing);
    let mut cursor_x = origin.x;

    for ch in text.chars() {
        let glyph = glyphs.glyph(style.font, ch);
        if let Some(mask) = glyph.mask.as_ref() {
            let at = Point::new(cursor_x, origin.y) + glyph.offset;
            canvas.stamp(mask, at, color);
        }
        cursor_x += glyph.advance as i32 + gap;
    }
}

pub fn draw(canvas: &mut Canvas, glyphs: &GlyphCache, el: &TextElement, origin: Point) {
    draw_line(canvas, glyphs, &sanitize(&el.content), origin, el.style());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::color::{Color, Rgba};
    use crate::fonts::FontId;

    fn style(font: FontId) -> TextStyle {
        TextStyle { font, spacing: 1, color: Color(Rgba::opaque(255, 0, 0)) }
    }

    fn lit_columns(canvas: &Canvas) -> Vec<i32> {
        (0..canvas.width() as i32)
            .filter(|x| (0..canvas.height() as i32).any(|y| canvas.pixel(Point::new(*x, y)) != Some(Rgba::BLACK)))
            .collect()
    }

    #[test]
    fn test_text_advances_by_cell_plus_spacing() {
        let glyphs = GlyphCache::new();
        let mut canvas = Canvas::new(16, 8, Rgba::BLACK);
        draw_line(&mut canvas, &glyphs, "II", Point::zero(), style(FontId::Fixed5x7));
        // I strokes sit in the middle of each 5px cell, cells 6px apart
        let cols = lit_columns(&canvas);
        assert!(cols.contains(&2));
        assert!(cols.contains(&8));
        assert!(!cols.contains(&12));
    }

    #[test]
    fn test_text_clips_off_canvas() {
        let glyphs = GlyphCache::new();
        let mut canvas = Canvas::new(4, 4, Rgba::BLACK);
        draw_line(&mut canvas, &glyphs, "WIDE TEXT", Point::new(-3, -2), style(FontId::Fixed5x7));
        draw_line(&mut canvas, &glyphs, "X", Point::new(100, 100), style(FontId::Small3x5));
    }

    #[test]
    fn test_element_is_sanitized() {
        let glyphs = GlyphCache::new();
        let mut a = Canvas::new(12, 8, Rgba::BLACK);
        let mut b = Canvas::new(12, 8, Rgba::BLACK);
        draw(&mut a, &glyphs, &TextElement::new("ół", style(FontId::Fixed5x7)), Point::zero());
        draw(&mut b, &glyphs, &TextElement::new("ol", style(FontId::Fixed5x7)), Point::zero());
        assert_eq!(a.flatten(), b.flatten());
    }

    #[test]
    fn test_proportional_glyphs_are_baseline_aligned() {
        let glyphs = GlyphCache::new();
        let mut canvas = Canvas::new(8, 8, Rgba::BLACK);
        draw_line(&mut canvas, &glyphs, ".", Point::zero(), style(FontId::Proportional));
        // the full stop hangs on the baseline, nothing in the top rows
        let top_lit = (0..8).any(|x| canvas.pixel(Point::new(x, 0)) != Some(Rgba::BLACK));
        assert!(!top_lit);
    }
}
