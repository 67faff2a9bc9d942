/*
 *  media.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Image sources for image elements: allow-listed local files and
 *  remote URLs, decoded to RGBA and optionally resized
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

use async_trait::async_trait;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, warn};
use reqwest::{header, Client, StatusCode};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::display::element::ImageElement;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("path is outside the allowed directories: {0}")]
    NotAllowed(PathBuf),
    #[error("image element has neither path nor url")]
    NoSource,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Something that can turn an image element into pixels ahead of rendering.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// `None` means the element draws nothing; failures are not fatal.
    async fn fetch(&self, el: &ImageElement) -> Option<RgbaImage>;
}

/// Source that never yields an image.
pub struct NoImages;

#[async_trait]
impl ImageSource for NoImages {
    async fn fetch(&self, _el: &ImageElement) -> Option<RgbaImage> {
        None
    }
}

/// Loads images from disk (inside allow-listed roots) or over HTTP.
pub struct MediaLoader {
    client: Client,
    allowlist: Vec<PathBuf>,
}

impl MediaLoader {
    pub fn new(allowlist: &[PathBuf], fetch_timeout: Duration) -> Result<Self, MediaError> {
        const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

        let mut headers = header::HeaderMap::new();
        headers.insert("User-Agent", header::HeaderValue::from_static(VERSION));
        headers.insert("Accept", header::HeaderValue::from_static("image/*"));

        let client = Client::builder()
            .connect_timeout(fetch_timeout)
            .default_headers(headers)
            .timeout(fetch_timeout)
            .build()?;

        // roots that do not exist can never contain anything
        let allowlist = allowlist
            .iter()
            .filter_map(|root| match root.canonicalize() {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!("ignoring allowlist entry {}: {}", root.display(), e);
                    None
                }
            })
            .collect();

        Ok(Self { client, allowlist })
    }

    /// True when `path` resolves inside one of the allowed roots.
    pub fn is_allowed_path(&self, path: &Path) -> bool {
        match path.canonicalize() {
            Ok(real) => self.allowlist.iter().any(|root| real.starts_with(root)),
            Err(_) => false,
        }
    }

    pub async fn read_path(&self, path: &Path) -> Result<Vec<u8>, MediaError> {
        if !self.is_allowed_path(path) {
            return Err(MediaError::NotAllowed(path.to_path_buf()));
        }
        Ok(tokio::fs::read(path).await?)
    }

    pub async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(MediaError::Status(response.status()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch and decode; `path` wins when both are present.
    pub async fn load(&self, el: &ImageElement) -> Result<RgbaImage, MediaError> {
        let data = match (&el.path, &el.url) {
            (Some(path), _) => self.read_path(Path::new(path)).await?,
            (None, Some(url)) => self.fetch_url(url).await?,
            (None, None) => return Err(MediaError::NoSource),
        };
        decode(&data, el.width, el.height)
    }
}

#[async_trait]
impl ImageSource for MediaLoader {
    async fn fetch(&self, el: &ImageElement) -> Option<RgbaImage> {
        match self.load(el).await {
            Ok(img) => Some(img),
            Err(e) => {
                debug!("image element dropped: {}", e);
                None
            }
        }
    }
}

/// Decode any supported format to RGBA; resize only when both sides are given.
pub fn decode(data: &[u8], width: Option<u32>, height: Option<u32>) -> Result<RgbaImage, MediaError> {
    let img = image::load_from_memory(data)?.to_rgba8();
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok(imageops::resize(&img, w, h, FilterType::Nearest)),
        _ => Ok(img),
    }
}
