/*
 *  display/components/image.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Pre-fetched raster images
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
use image::RgbaImage;

use crate::display::canvas::Canvas;
use crate::display::error::RenderError;

/// Paste the fetched raster; elements whose fetch failed report `MissingImage`.
pub fn draw(canvas: &mut Canvas, image: Option<&RgbaImage>, origin: Point) -> Result<(), RenderError> {
    let image = image.ok_or(RenderError::MissingImage)?;
    canvas.paste_image(image, origin);
    Ok(())
}
