/*
 *  display/components/scrollers.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Continuous right-to-left marquee driven purely by wall time
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
use crate::display::components::text::draw_line;
use crate::display::element::ScrollElement;
use crate::display::error::{finite, RenderError};
use crate::glyph_cache::GlyphCache;
use crate::textlayout::{measure, sanitize};

/// Left edge of the marquee at `now` seconds.
///
/// The text enters at the right edge and wraps once it has fully left on
/// the left, so the loop length is `canvas_width + text_width` pixels.
/// `None` when there is nothing to scroll.
pub fn scroll_x(now: f64, speed: f64, canvas_width: u32, text_width: i32) -> Option<i32> {
    if text_width < 1 {
        return None;
    }
    let width = canvas_width as f64;
    let total = width + text_width as f64;
    let offset = (now * speed).rem_euclid(total);
    if !offset.is_finite() {
        return None;
    }
    Some((width - offset).trunc() as i32)
}

/// The element's own `x` is ignored; the marquee always spans the canvas.
pub fn draw(
    canvas: &mut Canvas,
    glyphs: &GlyphCache,
    el: &ScrollElement,
    y: i32,
    now: f64,
) -> Result<(), RenderError> {
    let speed = finite("speed", el.speed)?;
    let content = sanitize(&el.content);
    if content.is_empty() {
        return Ok(());
    }
    let text_width = measure(glyphs, &content, el.font, el.spacing);
    if let Some(x) = scroll_x(now, speed, canvas.width(), text_width) {
        draw_line(canvas, glyphs, &content, Point::new(x, y), el.style());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_enters_from_right_edge() {
        assert_eq!(scroll_x(0.0, 10.0, 64, 40), Some(64));
        assert_eq!(scroll_x(1.0, 10.0, 64, 40), Some(54));
        assert_eq!(scroll_x(5.2, 10.0, 64, 40), Some(12));
    }

    #[test]
    fn test_scroll_wraps_after_full_cycle() {
        // 64 + 40 = 104px at 10px/s
        assert_eq!(scroll_x(10.4, 10.0, 64, 40), Some(64));
        assert_eq!(scroll_x(10.5, 10.0, 64, 40), Some(63));
    }

    #[test]
    fn test_scroll_never_jumps_more_than_one_tick() {
        let fps = 30.0;
        let speed = 10.0;
        let mut prev = scroll_x(0.0, speed, 64, 40).unwrap();
        for tick in 1..(30 * 25) {
            let x = scroll_x(tick as f64 / fps, speed, 64, 40).unwrap();
            let step = prev - x;
            // either a small leftward step or the wrap back to the start
            assert!((0..=1).contains(&step) || x >= 63, "jump {} -> {}", prev, x);
            assert!((-40..=64).contains(&x));
            prev = x;
        }
    }

    #[test]
    fn test_empty_text_does_not_scroll() {
        assert_eq!(scroll_x(3.0, 10.0, 64, 0), None);
    }

    #[test]
    fn test_overflowing_offset_draws_nothing() {
        assert_eq!(scroll_x(12.0, 1e308, 64, 40), None);
    }

    #[test]
    fn test_non_finite_speed_is_an_error() {
        use crate::display::color::Rgba;
        use crate::fonts::FontId;
        let glyphs = GlyphCache::new();
        let mut canvas = Canvas::new(8, 8, Rgba::BLACK);
        let el = ScrollElement {
            content: "x".into(),
            font: FontId::Fixed5x7,
            spacing: 1,
            color: Default::default(),
            speed: f64::NAN,
        };
        assert!(draw(&mut canvas, &glyphs, &el, 0, 1.0).is_err());
    }
}
