/*
 *  icons.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Icon font support: name to codepoint metadata and scalable glyph
 *  rasterization through resvg, cached per codepoint and pixel size
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

use log::{debug, info, warn};
use mini_moka::sync::{Cache, ConcurrentCacheExt};
use resvg::usvg::{fontdb, Options as UsvgOptions, Transform, Tree};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tiny_skia::Pixmap;

const ICON_PREFIX: &str = "mdi:";
const ICON_CACHE_CAPACITY: u64 = 256;
/// Anything larger than the biggest panel is pointless
pub const MAX_ICON_SIZE: u32 = 256;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("icon metadata error: {0}")]
    Meta(#[from] serde_json::Error),
    #[error("icon font error: {0}")]
    Font(String),
    #[error("icon render error: {0}")]
    Render(String),
}

#[derive(Debug, Deserialize)]
struct MetaEntry {
    name: String,
    codepoint: String,
}

/// Anti-aliased coverage of one icon, row-major, `width` wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

struct IconFont {
    db: Arc<fontdb::Database>,
    family: String,
}

/// Icon lookup and rasterization. A disabled set resolves nothing.
pub struct IconSet {
    names: HashMap<String, u32>,
    font: Option<IconFont>,
    masks: Cache<(u32, u32), Arc<IconMask>>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::disabled()
    }
}

impl IconSet {
    pub fn disabled() -> Self {
        Self { names: HashMap::new(), font: None, masks: Cache::new(ICON_CACHE_CAPACITY) }
    }

    /// Load font and metadata; a missing file leaves icons disabled.
    pub fn load_or_disabled(font_path: &Path, meta_path: &Path) -> Self {
        if !font_path.exists() || !meta_path.exists() {
            info!("icon font or metadata not found, icons disabled");
            return Self::disabled();
        }
        match Self::load(font_path, meta_path) {
            Ok(set) => set,
            Err(e) => {
                warn!("icons disabled: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn load(font_path: &Path, meta_path: &Path) -> Result<Self, IconError> {
        let font = std::fs::read(font_path)?;
        let meta = std::fs::read_to_string(meta_path)?;
        let names = parse_meta(&meta)?;
        let set = Self::from_parts(font, names)?;
        info!("loaded {} icon names from {}", set.names.len(), meta_path.display());
        Ok(set)
    }

    pub fn from_parts(font_data: Vec<u8>, names: HashMap<String, u32>) -> Result<Self, IconError> {
        let mut db = fontdb::Database::new();
        db.load_font_data(font_data);
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| IconError::Font("no usable face in icon font".into()))?;

        Ok(Self {
            names,
            font: Some(IconFont { db: Arc::new(db), family }),
            masks: Cache::new(ICON_CACHE_CAPACITY),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.font.is_some()
    }

    /// Codepoint for `name`, with or without the `mdi:` prefix.
    pub fn codepoint(&self, name: &str) -> Option<u32> {
        let bare = name.strip_prefix(ICON_PREFIX).unwrap_or(name);
        self.names.get(bare).copied()
    }

    /// Rasterized icon; `Ok(None)` when icons are disabled or the name is unknown.
    pub fn mask(&self, name: &str, size: u32) -> Result<Option<Arc<IconMask>>, IconError> {
        let Some(font) = self.font.as_ref() else {
            return Ok(None);
        };
        let Some(codepoint) = self.codepoint(name) else {
            debug!("unknown icon {}", name);
            return Ok(None);
        };
        let size = size.clamp(1, MAX_ICON_SIZE);
        let key = (codepoint, size);
        if let Some(mask) = self.masks.get(&key) {
            return Ok(Some(mask));
        }
        let mask = Arc::new(rasterize_icon(font, codepoint, size)?);
        self.masks.insert(key, mask.clone());
        Ok(Some(mask))
    }

    pub fn cached_masks(&self) -> u64 {
        self.masks.sync();
        self.masks.entry_count()
    }
}

/// Parse `[{"name": "...", "codepoint": "F0026"}, ...]`.
pub fn parse_meta(json: &str) -> Result<HashMap<String, u32>, IconError> {
    let entries: Vec<MetaEntry> = serde_json::from_str(json)?;
    let mut names = HashMap::with_capacity(entries.len());
    for entry in entries {
        match u32::from_str_radix(entry.codepoint.trim(), 16) {
            Ok(cp) => {
                names.insert(entry.name, cp);
            }
            Err(_) => debug!("skipping icon {} with bad codepoint {}", entry.name, entry.codepoint),
        }
    }
    Ok(names)
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('"', "&quot;")
}

fn rasterize_icon(font: &IconFont, codepoint: u32, size: u32) -> Result<IconMask, IconError> {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}"><text x="0" y="{s}" font-family="{f}" font-size="{s}" fill="white">&#x{cp:X};</text></svg>"#,
        s = size,
        f = xml_escape(&font.family),
        cp = codepoint,
    );
    let options = UsvgOptions { fontdb: font.db.clone(), ..UsvgOptions::default() };
    let tree = Tree::from_str(&svg, &options)
        .map_err(|e| IconError::Render(format!("failed to parse icon svg: {:?}", e)))?;
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| IconError::Render("failed to create pixmap".to_string()))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let coverage = pixmap.pixels().iter().map(|p| p.alpha()).collect();
    Ok(IconMask { width: size, height: size, coverage })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn test_parse_meta() {
        let names = parse_meta(
            r#"[{"name": "home", "codepoint": "F02DC"},
                {"name": "broken", "codepoint": "zz"},
                {"name": "help", "codepoint": "F02D6", "aliases": []}]"#,
        )
        .unwrap();
        assert_eq!(names.get("home"), Some(&0xF02DC));
        assert_eq!(names.get("help"), Some(&0xF02D6));
        assert!(!names.contains_key("broken"));
    }

    #[test]
    fn test_missing_files_disable_icons() {
        let dir = tempfile::tempdir().unwrap();
        let set = IconSet::load_or_disabled(&dir.path().join("none.ttf"), &dir.path().join("none.json"));
        assert!(!set.is_enabled());
        assert_eq!(set.mask("mdi:home", 16).unwrap(), None);
    }

    #[test]
    fn test_bad_font_disables_icons() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("icons.ttf");
        let meta = dir.path().join("icons.json");
        std::fs::write(&font, b"not a font").unwrap();
        std::fs::write(&meta, r#"[{"name": "home", "codepoint": "F02DC"}]"#).unwrap();
        assert!(matches!(IconSet::load(&font, &meta), Err(IconError::Font(_))));
        assert!(!IconSet::load_or_disabled(&font, &meta).is_enabled());
    }

    pub(crate) fn fixture_icons() -> IconSet {
        let font = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Tuffy.ttf")).unwrap();
        // any outline font will do, 'A' stands in for an icon glyph
        IconSet::from_parts(font, HashMap::from([("letter-a".to_string(), 0x41)])).unwrap()
    }

    #[test]
    fn test_mask_rendered_once_per_size() {
        let set = fixture_icons();
        assert!(set.is_enabled());
        let first = set.mask("mdi:letter-a", 16).unwrap().unwrap();
        assert_eq!((first.width, first.height), (16, 16));
        assert_eq!(first.coverage.len(), 256);
        assert!(first.coverage.iter().any(|c| *c > 0));

        let again = set.mask("letter-a", 16).unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(set.cached_masks(), 1);

        let bigger = set.mask("letter-a", 24).unwrap().unwrap();
        assert_eq!(bigger.width, 24);
        assert_eq!(set.cached_masks(), 2);
    }

    #[test]
    fn test_mask_size_is_clamped() {
        let set = fixture_icons();
        assert_eq!(set.mask("letter-a", 0).unwrap().unwrap().width, 1);
        assert_eq!(set.mask("letter-a", 4096).unwrap().unwrap().width, MAX_ICON_SIZE);
    }

    #[test]
    fn test_unknown_name_with_font_loaded() {
        let set = fixture_icons();
        assert_eq!(set.mask("mdi:nothing", 16).unwrap(), None);
        assert_eq!(set.cached_masks(), 0);
    }

    #[test]
    fn test_codepoint_prefix_is_optional() {
        let mut set = IconSet::disabled();
        set.names.insert("home".into(), 0xF02DC);
        assert_eq!(set.codepoint("mdi:home"), Some(0xF02DC));
        assert_eq!(set.codepoint("home"), Some(0xF02DC));
        assert_eq!(set.codepoint("mdi:nope"), None);
    }
}
