/*
 *  display/components/pager.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Paged long text: hold a line, slide to the next, repeat
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
use crate::display::element::{Direction, LongTextElement};
use crate::display::error::{finite, RenderError};
use crate::glyph_cache::GlyphCache;

/// Where the pager is at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagePhase {
    /// Line `index` shown still
    Hold { index: usize },
    /// Line `from` leaving while `to` arrives, `progress` in 0..=1
    Slide { from: usize, to: usize, progress: f64 },
}

/// Phase of an `lines`-line pager at `now`, holding `hold` seconds and
/// sliding for `transition` seconds per line.
pub fn phase_at(now: f64, hold: f64, transition: f64, lines: usize) -> Result<PagePhase, RenderError> {
    let hold = finite("speed", hold)?.max(0.0);
    let transition = finite("scroll_duration", transition)?.max(0.0);
    let cycle = hold + transition;
    if cycle <= 0.0 {
        return Err(RenderError::InvalidParameter { field: "cycle", value: cycle });
    }
    if lines < 2 {
        return Ok(PagePhase::Hold { index: 0 });
    }

    let total = cycle * lines as f64;
    let in_total = now.rem_euclid(total);
    let index = ((in_total / cycle) as usize).min(lines - 1);
    let in_phase = in_total - index as f64 * cycle;

    if in_phase < hold || transition == 0.0 {
        return Ok(PagePhase::Hold { index });
    }
    let progress = ((in_phase - hold) / transition).clamp(0.0, 1.0);
    Ok(PagePhase::Slide { from: index, to: (index + 1) % lines, progress })
}

/// Offsets of the leaving and arriving line relative to the element origin.
pub fn slide_offsets(direction: Direction, progress: f64, line_height: i32, canvas_width: i32) -> (Point, Point) {
    match direction {
        Direction::Up => {
            let d = (progress * line_height as f64) as i32;
            (Point::new(0, -d), Point::new(0, line_height - d))
        }
        Direction::Down => {
            let d = (progress * line_height as f64) as i32;
            (Point::new(0, d), Point::new(0, d - line_height))
        }
        Direction::Left => {
            let d = (progress * canvas_width as f64) as i32;
            (Point::new(-d, 0), Point::new(canvas_width - d, 0))
        }
        Direction::Right => {
            let d = (progress * canvas_width as f64) as i32;
            (Point::new(d, 0), Point::new(d - canvas_width, 0))
        }
    }
}

/// `lines` is the pre-wrapped content; an empty list draws nothing.
pub fn draw(
    canvas: &mut Canvas,
    glyphs: &GlyphCache,
    el: &LongTextElement,
    lines: &[String],
    origin: Point,
    now: f64,
) -> Result<(), RenderError> {
    let style = el.style();
    match lines {
        [] => Ok(()),
        [only] => {
            draw_line(canvas, glyphs, only, origin, style);
            Ok(())
        }
        _ => {
            match phase_at(now, el.speed, el.scroll_duration, lines.len())? {
                PagePhase::Hold { index } => {
                    draw_line(canvas, glyphs, &lines[index], origin, style);
                }
                PagePhase::Slide { from, to, progress } => {
                    let line_height = style.font.line_height();
                    let (out, inn) = slide_offsets(el.direction, progress, line_height, canvas.width() as i32);
                    draw_line(canvas, glyphs, &lines[from], origin + out, style);
                    draw_line(canvas, glyphs, &lines[to], origin + inn, style);
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_then_slide_then_next_line() {
        // hold 2s, slide 0.5s, three lines: 7.5s total
        assert_eq!(phase_at(0.0, 2.0, 0.5, 3).unwrap(), PagePhase::Hold { index: 0 });
        assert_eq!(phase_at(1.9, 2.0, 0.5, 3).unwrap(), PagePhase::Hold { index: 0 });
        match phase_at(2.25, 2.0, 0.5, 3).unwrap() {
            PagePhase::Slide { from, to, progress } => {
                assert_eq!((from, to), (0, 1));
                assert!((progress - 0.5).abs() < 1e-9);
            }
            other => panic!("expected slide, got {:?}", other),
        }
        assert_eq!(phase_at(2.6, 2.0, 0.5, 3).unwrap(), PagePhase::Hold { index: 1 });
    }

    #[test]
    fn test_last_line_slides_back_to_first() {
        match phase_at(7.4, 2.0, 0.5, 3).unwrap() {
            PagePhase::Slide { from, to, .. } => assert_eq!((from, to), (2, 0)),
            other => panic!("expected slide, got {:?}", other),
        }
        assert_eq!(phase_at(7.5, 2.0, 0.5, 3).unwrap(), PagePhase::Hold { index: 0 });
    }

    #[test]
    fn test_degenerate_timing() {
        assert!(phase_at(1.0, 0.0, 0.0, 3).is_err());
        assert!(phase_at(1.0, f64::INFINITY, 0.5, 3).is_err());
        // no transition: lines just swap
        assert_eq!(phase_at(2.5, 2.0, 0.0, 2).unwrap(), PagePhase::Hold { index: 1 });
    }

    #[test]
    fn test_offsets_are_complementary() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (out0, in0) = slide_offsets(dir, 0.0, 8, 32);
            assert_eq!(out0, Point::zero());
            let (out1, in1) = slide_offsets(dir, 1.0, 8, 32);
            assert_eq!(in1, Point::zero());
            // the arriving line keeps a fixed distance from the leaving one
            assert_eq!(in0 - out0, in1 - out1);
        }
        assert_eq!(slide_offsets(Direction::Up, 0.5, 6, 32), (Point::new(0, -3), Point::new(0, 3)));
        assert_eq!(slide_offsets(Direction::Right, 0.25, 8, 32), (Point::new(8, 0), Point::new(-24, 0)));
    }
}
