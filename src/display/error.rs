/*
 *  display/error.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Per-element drawing errors
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

use std::error::Error;
use std::fmt;

/// Raised by a single element drawer. The renderer logs it and carries on
/// with the rest of the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A numeric parameter that cannot produce a picture (NaN, zero duration)
    InvalidParameter { field: &'static str, value: f64 },

    /// Icon rasterization failed
    Icon(String),

    /// Image element reached the renderer without a fetched raster
    MissingImage,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidParameter { field, value } =>
                write!(f, "invalid {}: {}", field, value),
            RenderError::Icon(msg) =>
                write!(f, "icon rendering failed: {}", msg),
            RenderError::MissingImage =>
                write!(f, "image was not fetched"),
        }
    }
}

impl Error for RenderError {}

/// Reject values that would make timing maths meaningless.
pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, RenderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RenderError::InvalidParameter { field, value })
    }
}
