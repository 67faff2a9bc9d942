/*
 *  display/components/pixels.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Sparse pixel lists, drawn on a transparent layer and composited
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

use embedded_graphics::prelude::*;
use serde_json::Value;

use crate::display::canvas::Canvas;
use crate::display::color::Rgba;
use crate::display::element::PixelsElement;

fn component(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}

fn channel(v: &Value) -> Option<u8> {
    component(v).map(|c| c.clamp(0, 255) as u8)
}

/// `[x, y, r, g, b]` or `[x, y, r, g, b, a]`; anything else is `None`.
pub fn parse_pixel(entry: &Value) -> Option<Pixel<Rgba>> {
    let items = entry.as_array()?;
    if items.len() != 5 && items.len() != 6 {
        return None;
    }
    let x = i32::try_from(component(&items[0])?).ok()?;
    let y = i32::try_from(component(&items[1])?).ok()?;
    let alpha = match items.get(5) {
        Some(a) => channel(a)?,
        None => 255,
    };
    let color = Rgba::new(channel(&items[2])?, channel(&items[3])?, channel(&items[4])?, alpha);
    Some(Pixel(Point::new(x, y), color))
}

/// Malformed or off-canvas entries are skipped one by one.
pub fn draw(canvas: &mut Canvas, el: &PixelsElement) {
    if el.pixels.is_empty() {
        return;
    }
    let mut layer = canvas.overlay();
    for entry in &el.pixels {
        if let Some(Pixel(p, c)) = parse_pixel(entry) {
            layer.set(p, c);
        }
    }
    canvas.composite(&layer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pixel_shapes() {
        assert_eq!(
            parse_pixel(&json!([1, 2, 3, 4, 5])),
            Some(Pixel(Point::new(1, 2), Rgba::opaque(3, 4, 5)))
        );
        assert_eq!(
            parse_pixel(&json!([1, 2, 3, 4, 5, 6])),
            Some(Pixel(Point::new(1, 2), Rgba::new(3, 4, 5, 6)))
        );
        assert_eq!(parse_pixel(&json!([1, 2, 3, 4])), None);
        assert_eq!(parse_pixel(&json!([1, 2, 3, 4, 5, 6, 7])), None);
        assert_eq!(parse_pixel(&json!([1, "a", 3, 4, 5])), None);
        assert_eq!(parse_pixel(&json!("1,2,3,4,5")), None);
    }

    #[test]
    fn test_bad_entries_do_not_stop_good_ones() {
        let mut canvas = Canvas::new(4, 4, Rgba::BLACK);
        let el = PixelsElement {
            pixels: vec![json!([0, 0, 255, 0, 0]), json!([9]), json!([99, 99, 0, 255, 0]), json!([3, 3, 0, 0, 255])],
        };
        draw(&mut canvas, &el);
        let frame = canvas.flatten();
        assert_eq!(frame.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(frame.pixel(3, 3), Some([0, 0, 255]));
        assert_eq!(frame.pixel(1, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_translucent_pixel_blends_with_background() {
        let mut canvas = Canvas::new(1, 1, Rgba::opaque(0, 0, 200));
        draw(&mut canvas, &PixelsElement { pixels: vec![json!([0, 0, 200, 0, 0, 0])] });
        assert_eq!(canvas.flatten().pixel(0, 0), Some([0, 0, 200]));
    }
}
