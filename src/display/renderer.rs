/*
 *  display/renderer.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Scene rendering: background, elements in order, flatten to RGB
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

use chrono::Utc;
use embedded_graphics::prelude::Point;
use log::debug;
use std::sync::Arc;

use crate::display::canvas::{Canvas, Frame};
use crate::display::components::{icon, image, pager, pixels, scrollers, text};
use crate::display::element::ElementKind;
use crate::display::error::RenderError;
use crate::display::scene::{PreparedElement, PreparedScene};
use crate::glyph_cache::GlyphCache;
use crate::icons::IconSet;

/// Shared, injectable state a render pass draws with.
#[derive(Clone)]
pub struct RenderContext {
    pub width: u32,
    pub height: u32,
    pub glyphs: GlyphCache,
    pub icons: Arc<IconSet>,
}

impl RenderContext {
    /// Icons start disabled; see [`RenderContext::with_icons`].
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, glyphs: GlyphCache::new(), icons: Arc::new(IconSet::disabled()) }
    }

    pub fn with_icons(mut self, icons: Arc<IconSet>) -> Self {
        self.icons = icons;
        self
    }
}

/// Wall clock in fractional seconds, the time base of every animation.
pub fn now_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Render `scene` as it looks at `now`. Never fails: a broken element is
/// logged and left out.
pub fn render(ctx: &RenderContext, scene: &PreparedScene, now: f64) -> Frame {
    let mut canvas = Canvas::new(ctx.width, ctx.height, scene.background);
    for prepared in &scene.elements {
        if let Err(e) = draw_element(&mut canvas, ctx, prepared, now) {
            debug!("error rendering {} element: {}", prepared.element.type_name(), e);
        }
    }
    canvas.flatten()
}

fn draw_element(canvas: &mut Canvas, ctx: &RenderContext, prepared: &PreparedElement, now: f64) -> Result<(), RenderError> {
    let el = &prepared.element;
    let origin = Point::new(el.x, el.y);
    match &el.kind {
        ElementKind::Text(t) => text::draw(canvas, &ctx.glyphs, t, origin),
        ElementKind::TextScroll(s) => scrollers::draw(canvas, &ctx.glyphs, s, el.y, now)?,
        ElementKind::TextLong(l) => pager::draw(canvas, &ctx.glyphs, l, &prepared.lines, origin, now)?,
        ElementKind::Pixels(p) => pixels::draw(canvas, p),
        ElementKind::Icon(i) => icon::draw(canvas, &ctx.icons, i, origin)?,
        ElementKind::Image(_) => image::draw(canvas, prepared.image.as_deref(), origin)?,
        ElementKind::Unknown => {}
    }
    Ok(())
}
