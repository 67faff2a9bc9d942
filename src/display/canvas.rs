/*
 *  display/canvas.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  RGBA working canvas, compositing and the flattened output frame
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
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbImage, RgbaImage};

use crate::display::color::Rgba;
use crate::fonts::GlyphMask;
use crate::vframebuf::VarFrameBuf;

/// Working surface for one render pass.
pub struct Canvas {
    fb: VarFrameBuf<Rgba>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self { fb: VarFrameBuf::new(width, height, background) }
    }

    pub fn width(&self) -> u32 { self.fb.width() as u32 }
    pub fn height(&self) -> u32 { self.fb.height() as u32 }

    pub fn pixel(&self, p: Point) -> Option<Rgba> {
        self.fb.get(p)
    }

    /// A fully transparent layer of the same size, for drawing then compositing.
    pub fn overlay(&self) -> VarFrameBuf<Rgba> {
        VarFrameBuf::new(self.width(), self.height(), Rgba::TRANSPARENT)
    }

    /// Source-over composite a same-sized layer onto the canvas.
    pub fn composite(&mut self, layer: &VarFrameBuf<Rgba>) {
        for (dst, src) in self.fb.as_mut_slice().iter_mut().zip(layer.as_slice()) {
            *dst = src.over(*dst);
        }
    }

    /// Stamp a 1-bit mask with `top_left` at the origin; lit pixels take `color` outright.
    pub fn stamp(&mut self, mask: &GlyphMask, top_left: Point, color: Rgba) {
        for p in mask.points() {
            self.fb.set(top_left + p, color);
        }
    }

    /// Blend `color` through an 8-bit coverage mask (row-major, `width` wide).
    pub fn blend_coverage(&mut self, coverage: &[u8], width: u32, top_left: Point, color: Rgba) {
        if width == 0 {
            return;
        }
        for (i, cov) in coverage.iter().enumerate() {
            if *cov == 0 {
                continue;
            }
            let p = top_left + Point::new((i as u32 % width) as i32, (i as u32 / width) as i32);
            let a = (color.a as u32 * *cov as u32 + 127) / 255;
            self.fb.blend(p, color.with_alpha(a as u8), Rgba::over);
        }
    }

    /// Paste a raster using its own alpha channel as the paste mask.
    pub fn paste_image(&mut self, image: &RgbaImage, top_left: Point) {
        for (x, y, px) in image.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            let p = top_left + Point::new(x as i32, y as i32);
            self.fb.blend(p, Rgba::new(r, g, b, a), |src, dst| src.lerp_over(dst, src.a));
        }
    }

    /// Composite whatever transparency remains onto black.
    pub fn flatten(&self) -> Frame {
        let (w, h) = (self.width(), self.height());
        let mut raw = Vec::with_capacity((w * h * 3) as usize);
        for px in self.fb.as_slice() {
            raw.extend_from_slice(&px.flatten());
        }
        Frame::from_raw(w, h, raw).unwrap_or_else(|| Frame::blank(w, h))
    }
}

/// A finished, opaque RGB888 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn blank(width: u32, height: u32) -> Self {
        Self { image: RgbImage::new(width, height) }
    }

    pub fn from_raw(width: u32, height: u32, raw: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, raw).map(|image| Self { image })
    }

    pub fn width(&self) -> u32 { self.image.width() }
    pub fn height(&self) -> u32 { self.image.height() }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Row-major RGB bytes, the basis for change detection.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Nearest-neighbour resize; a no-op clone when the size already matches.
    pub fn resized(&self, width: u32, height: u32) -> Frame {
        if self.width() == width && self.height() == height {
            return self.clone();
        }
        Frame { image: imageops::resize(&self.image, width, height, FilterType::Nearest) }
    }

    /// Lossless PNG encoding.
    pub fn to_png(&self) -> Result<Vec<u8>, ImageError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(out)
    }

    pub fn from_png(data: &[u8]) -> Result<Frame, ImageError> {
        let image = image::load_from_memory(data)?.to_rgb8();
        Ok(Frame { image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{rasterize, FontId};

    #[test]
    fn test_background_fills_canvas() {
        let canvas = Canvas::new(4, 2, Rgba::opaque(10, 20, 30));
        let frame = canvas.flatten();
        assert!(frame.as_bytes().chunks(3).all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn test_translucent_background_flattens_onto_black() {
        let canvas = Canvas::new(1, 1, Rgba::new(200, 100, 50, 0));
        assert_eq!(canvas.flatten().pixel(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_stamp_replaces_pixels() {
        let mut canvas = Canvas::new(8, 8, Rgba::BLACK);
        let glyph = rasterize(FontId::Fixed5x7, 'I');
        let mask = glyph.mask.unwrap();
        canvas.stamp(&mask, Point::new(1, 0), Rgba::new(0, 255, 0, 128));
        // middle column of the I lands on x = 3
        assert_eq!(canvas.pixel(Point::new(3, 3)), Some(Rgba::new(0, 255, 0, 128)));
        assert_eq!(canvas.pixel(Point::new(0, 3)), Some(Rgba::BLACK));
    }

    #[test]
    fn test_composite_transparent_layer_is_noop() {
        let mut canvas = Canvas::new(3, 3, Rgba::opaque(1, 2, 3));
        let layer = canvas.overlay();
        canvas.composite(&layer);
        assert!(canvas.flatten().as_bytes().chunks(3).all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn test_paste_image_uses_alpha_as_mask() {
        let mut canvas = Canvas::new(2, 1, Rgba::opaque(0, 0, 200));
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([255, 0, 0, 0]));
        canvas.paste_image(&img, Point::zero());
        let frame = canvas.flatten();
        assert_eq!(frame.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(frame.pixel(1, 0), Some([0, 0, 200]));
    }

    #[test]
    fn test_png_roundtrip_and_resize() {
        let mut canvas = Canvas::new(2, 2, Rgba::BLACK);
        canvas.blend_coverage(&[255], 1, Point::new(1, 1), Rgba::WHITE);
        let frame = canvas.flatten();
        let png = frame.to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(Frame::from_png(&png).unwrap(), frame);

        let big = frame.resized(4, 4);
        assert_eq!(big.pixel(3, 3), Some([255, 255, 255]));
        assert_eq!(big.pixel(1, 1), Some([0, 0, 0]));
    }
}
