/*
 *  display/components/icon.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Tinted icon font glyphs
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
use crate::display::element::IconElement;
use crate::display::error::RenderError;
use crate::icons::IconSet;

/// Unknown names and a disabled icon set draw nothing.
pub fn draw(canvas: &mut Canvas, icons: &IconSet, el: &IconElement, origin: Point) -> Result<(), RenderError> {
    let mask = icons
        .mask(&el.name, el.size)
        .map_err(|e| RenderError::Icon(e.to_string()))?;
    if let Some(mask) = mask {
        canvas.blend_coverage(&mask.coverage, mask.width, origin, el.color.rgba());
    }
    Ok(())
}
