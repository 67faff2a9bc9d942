/*
 *  glyph_cache.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Memoized glyph rasterization keyed by font and character
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

use mini_moka::sync::{Cache, ConcurrentCacheExt};
use std::sync::Arc;

use crate::fonts::{rasterize, FontId, Glyph};

// three fonts over printable ASCII plus whatever odd characters show up
const GLYPH_CACHE_CAPACITY: u64 = 1024;

/// Shared glyph cache. Cloning hands out another handle to the same entries.
#[derive(Clone)]
pub struct GlyphCache {
    cache: Cache<(FontId, char), Arc<Glyph>>,
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphCache {
    pub fn new() -> Self {
        Self { cache: Cache::new(GLYPH_CACHE_CAPACITY) }
    }

    /// Rasterized glyph for `ch`, computed once per key.
    pub fn glyph(&self, font: FontId, ch: char) -> Arc<Glyph> {
        let key = (font, ch);
        if let Some(glyph) = self.cache.get(&key) {
            return glyph;
        }
        let glyph = Arc::new(rasterize(font, ch));
        self.cache.insert(key, glyph.clone());
        glyph
    }

    pub fn advance(&self, font: FontId, ch: char) -> u32 {
        self.glyph(font, ch).advance
    }

    pub fn len(&self) -> u64 {
        self.cache.sync();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
