/*
 *  display/color.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  RGBA pixel color and user supplied color values
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

use embedded_graphics::pixelcolor::raw::RawU32;
use embedded_graphics::pixelcolor::PixelColor;
use serde::{Deserialize, Serialize};

/// Straight (non premultiplied) RGBA pixel used on the working canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelColor for Rgba {
    type Raw = RawU32;
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Source-over composite of `self` on top of `dst`.
    pub fn over(self, dst: Rgba) -> Rgba {
        let sa = self.a as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }
        let da = dst.a as u32;
        // alpha and color terms scaled by 255*255
        let dst_weight = da * (255 - sa);
        let out_a = sa * 255 + dst_weight;
        let blend = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa * 255 + d as u32 * dst_weight + out_a / 2) / out_a) as u8
        };
        Rgba {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a: ((out_a + 127) / 255) as u8,
        }
    }

    /// Linear interpolation of every channel towards `self` by `weight`/255.
    pub fn lerp_over(self, dst: Rgba, weight: u8) -> Rgba {
        let w = weight as u32;
        let mix = |s: u8, d: u8| -> u8 { ((s as u32 * w + d as u32 * (255 - w) + 127) / 255) as u8 };
        Rgba {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: mix(self.a, dst.a),
        }
    }

    /// Flatten onto opaque black.
    pub fn flatten(self) -> [u8; 3] {
        let a = self.a as u32;
        let scale = |c: u8| ((c as u32 * a + 127) / 255) as u8;
        [scale(self.r), scale(self.g), scale(self.b)]
    }
}

/// A color as written in a scene: `[r, g, b]` or `[r, g, b, a]`.
///
/// Components are clamped into 0..=255; a missing alpha means opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Color(pub Rgba);

impl Color {
    pub const WHITE: Color = Color(Rgba::WHITE);
    pub const BLACK: Color = Color(Rgba::BLACK);

    pub fn rgba(&self) -> Rgba {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

fn channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

impl TryFrom<Vec<i64>> for Color {
    type Error = String;

    fn try_from(v: Vec<i64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [r, g, b] => Ok(Color(Rgba::opaque(channel(*r), channel(*g), channel(*b)))),
            [r, g, b, a] => Ok(Color(Rgba::new(channel(*r), channel(*g), channel(*b), channel(*a)))),
            _ => Err(format!("color needs 3 or 4 components, got {}", v.len())),
        }
    }
}

impl From<Color> for Vec<i64> {
    fn from(c: Color) -> Self {
        let Rgba { r, g, b, a } = c.0;
        vec![r as i64, g as i64, b as i64, a as i64]
    }
}
