/*
 *  display/scene.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Scene requests and their prepared (pre-wrapped, pre-fetched) form
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

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{DEFAULT_FPS, MAX_FPS, MIN_FPS};
use crate::display::color::{Color, Rgba};
use crate::display::element::{Element, ElementKind};
use crate::display::renderer::RenderContext;
use crate::media::ImageSource;
use crate::textlayout::{sanitize, wrap};

fn default_background() -> Color { Color::BLACK }
fn default_fps() -> i64 { DEFAULT_FPS as i64 }

/// A scene as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRequest {
    #[serde(default, deserialize_with = "crate::display::element::lenient_elements")]
    pub elements: Vec<Element>,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_fps")]
    pub fps: i64,
}

impl Default for SceneRequest {
    fn default() -> Self {
        Self { elements: Vec::new(), background: default_background(), fps: default_fps() }
    }
}

impl SceneRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An element plus whatever was derived for it before rendering.
#[derive(Debug, Clone)]
pub struct PreparedElement {
    pub element: Element,
    /// wrapped lines of a `textlong` element
    pub lines: Vec<String>,
    /// fetched raster of an `image` element
    pub image: Option<Arc<RgbaImage>>,
}

impl PreparedElement {
    pub fn new(element: Element) -> Self {
        Self { element, lines: Vec::new(), image: None }
    }

    /// Whether this element changes with time.
    pub fn is_animated(&self) -> bool {
        match self.element.kind {
            ElementKind::TextScroll(_) => true,
            ElementKind::TextLong(_) => self.lines.len() > 1,
            _ => false,
        }
    }
}

/// Ready to render: layout done, images fetched, rate clamped.
#[derive(Debug, Clone)]
pub struct PreparedScene {
    pub elements: Vec<PreparedElement>,
    pub background: Rgba,
    pub fps: u32,
}

impl PreparedScene {
    /// Wrap paged text against the canvas width. Images are left unfetched.
    pub fn layout(request: SceneRequest, ctx: &RenderContext) -> Self {
        let elements = request
            .elements
            .into_iter()
            .map(|element| {
                let mut prepared = PreparedElement::new(element);
                if let ElementKind::TextLong(el) = &prepared.element.kind {
                    prepared.lines = wrap(
                        &ctx.glyphs,
                        &sanitize(&el.content),
                        el.font,
                        el.spacing,
                        ctx.width as i32,
                    );
                }
                prepared
            })
            .collect();

        Self {
            elements,
            background: request.background.rgba().with_alpha(255),
            fps: request.fps.clamp(MIN_FPS as i64, MAX_FPS as i64) as u32,
        }
    }

    /// Layout plus image fetching, everything that can fail before a send.
    pub async fn prepare(request: SceneRequest, ctx: &RenderContext, images: &dyn ImageSource) -> Self {
        let mut scene = Self::layout(request, ctx);
        for prepared in scene.elements.iter_mut() {
            if let ElementKind::Image(source) = &prepared.element.kind {
                prepared.image = images.fetch(source).await.map(Arc::new);
            }
        }
        scene
    }

    /// A scene needs the animation loop when any element moves.
    pub fn needs_animation(&self) -> bool {
        self.elements.iter().any(PreparedElement::is_animated)
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// An empty black scene, used for clearing.
    pub fn blank() -> Self {
        Self { elements: Vec::new(), background: Rgba::BLACK, fps: DEFAULT_FPS }
    }
}
