/*
 *  display/mod.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem - scene model, renderer and animation
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

// Pixels and colors
pub mod color;
pub mod canvas;
pub mod error;

// Scene model
pub mod element;
pub mod scene;

// Element drawers
pub mod components;

// Rendering and animation
pub mod renderer;
pub mod animator;

// Display manager
pub mod manager;

// Re-exports for convenience
pub use animator::AnimationState;
pub use canvas::{Canvas, Frame};
pub use color::{Color, Rgba};
pub use element::{Direction, Element, ElementKind};
pub use error::RenderError;
pub use manager::DisplayManager;
pub use renderer::{render, RenderContext};
pub use scene::{PreparedScene, SceneRequest};
