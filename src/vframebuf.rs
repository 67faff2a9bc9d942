/*
 *  vframebuf.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Runtime-sized framebuffer usable as an embedded-graphics draw target
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

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A runtime-sized framebuffer for embedded-graphics.
#[derive(Debug, Clone, PartialEq)]
pub struct VarFrameBuf<C: PixelColor> {
    buf: Vec<C>,
    w: usize,
    h: usize,
}

impl<C: PixelColor> VarFrameBuf<C> {
    pub fn new(width: u32, height: u32, fill: C) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![fill; w * h], w, h }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    pub fn as_mut_slice(&mut self) -> &mut [C] { &mut self.buf }

    pub fn as_slice(&self) -> &[C] { &self.buf }

    /// Clear to a color
    pub fn clear_color(&mut self, color: C) {
        self.buf.fill(color);
    }

    /// Pixel at `p`, `None` when outside the buffer
    pub fn get(&self, p: Point) -> Option<C> {
        self.idx(p).map(|i| self.buf[i])
    }

    /// Write one pixel; out of bounds writes are dropped
    pub fn set(&mut self, p: Point, color: C) {
        if let Some(i) = self.idx(p) {
            self.buf[i] = color;
        }
    }

    /// Combine `color` with the existing pixel through `f(new, old)`.
    pub fn blend(&mut self, p: Point, color: C, f: impl Fn(C, C) -> C) {
        if let Some(i) = self.idx(p) {
            self.buf[i] = f(color, self.buf[i]);
        }
    }

    /// Map (x,y) to linear index; returns None if out of bounds
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl<C: PixelColor> OriginDimensions for VarFrameBuf<C> {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl<C: PixelColor> DrawTarget for VarFrameBuf<C> {
    type Color = C;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            self.set(p, c);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clear_color(color);
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // areas may hang off any edge, so clip per pixel
        let mut it = colors.into_iter();
        for p in area.points() {
            match it.next() {
                Some(c) => self.set(p, c),
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut fb = VarFrameBuf::new(4, 3, Rgb888::BLACK);
        fb.set(Point::new(-1, 0), Rgb888::RED);
        fb.set(Point::new(4, 0), Rgb888::RED);
        fb.set(Point::new(0, 3), Rgb888::RED);
        assert!(fb.as_slice().iter().all(|c| *c == Rgb888::BLACK));
        assert_eq!(fb.get(Point::new(9, 9)), None);
    }

    #[test]
    fn test_fill_clips_partially_visible_rectangle() {
        let mut fb = VarFrameBuf::new(4, 4, Rgb888::BLACK);
        Rectangle::new(Point::new(-2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.get(Point::new(0, 2)), Some(Rgb888::GREEN));
        assert_eq!(fb.get(Point::new(1, 3)), Some(Rgb888::GREEN));
        assert_eq!(fb.get(Point::new(2, 2)), Some(Rgb888::BLACK));
        assert_eq!(fb.get(Point::new(0, 1)), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_blend_combines_with_existing() {
        let mut fb = VarFrameBuf::new(2, 2, Rgb888::new(10, 10, 10));
        fb.blend(Point::new(1, 1), Rgb888::new(5, 5, 5), |n, o| {
            Rgb888::new(n.r() + o.r(), n.g() + o.g(), n.b() + o.b())
        });
        assert_eq!(fb.get(Point::new(1, 1)), Some(Rgb888::new(15, 15, 15)));
    }
}
