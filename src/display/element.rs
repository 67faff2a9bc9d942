/*
 *  display/element.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  Visual element model, one variant per element type
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

use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::display::color::Color;
use crate::fonts::FontId;

/// One entry of a scene. Position may be off canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, deserialize_with = "int_i32")]
    pub x: i32,
    #[serde(default, deserialize_with = "int_i32")]
    pub y: i32,
    #[serde(flatten)]
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text(TextElement),
    TextScroll(ScrollElement),
    TextLong(LongTextElement),
    Pixels(PixelsElement),
    Icon(IconElement),
    Image(ImageElement),
    /// Any type we do not know how to draw
    #[serde(other)]
    Unknown,
}

/// Font, spacing and color shared by the text family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    pub spacing: i32,
    pub color: Color,
}

// integer fields take any number, fractions are dropped
fn whole<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let v = f64::deserialize(d)?;
    if !v.is_finite() {
        return Err(D::Error::custom("number is not finite"));
    }
    Ok(v.trunc())
}

fn int_i32<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let v = whole(d)?;
    if v < i32::MIN as f64 || v > i32::MAX as f64 {
        return Err(D::Error::custom(format!("{} is out of range", v)));
    }
    Ok(v as i32)
}

fn int_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let v = whole(d)?;
    if v < 0.0 || v > u32::MAX as f64 {
        return Err(D::Error::custom(format!("{} is out of range", v)));
    }
    Ok(v as u32)
}

/// Scene element list, decoded one entry at a time.
pub(crate) fn lenient_elements<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Element>, D::Error> {
    match Value::deserialize(d)? {
        Value::Array(entries) => Ok(entries.into_iter().map(Element::from_value).collect()),
        Value::Null => Ok(Vec::new()),
        other => {
            debug!("elements is not a list: {}", other);
            Ok(Vec::new())
        }
    }
}

fn default_spacing() -> i32 { 1 }
fn default_scroll_speed() -> f64 { 10.0 }
fn default_hold() -> f64 { 2.0 }
fn default_transition() -> f64 { 0.5 }
fn default_icon_name() -> String { "mdi:help".into() }
fn default_icon_size() -> u32 { 16 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub font: FontId,
    #[serde(default = "default_spacing", deserialize_with = "int_i32")]
    pub spacing: i32,
    #[serde(default)]
    pub color: Color,
}

impl TextElement {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self { content: content.into(), font: style.font, spacing: style.spacing, color: style.color }
    }

    pub fn style(&self) -> TextStyle {
        TextStyle { font: self.font, spacing: self.spacing, color: self.color }
    }
}

/// Right-to-left marquee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollElement {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub font: FontId,
    #[serde(default = "default_spacing", deserialize_with = "int_i32")]
    pub spacing: i32,
    #[serde(default)]
    pub color: Color,
    /// pixels per second
    #[serde(default = "default_scroll_speed")]
    pub speed: f64,
}

impl ScrollElement {
    pub fn style(&self) -> TextStyle {
        TextStyle { font: self.font, spacing: self.spacing, color: self.color }
    }
}

/// Word wrapped text paged one line at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTextElement {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub font: FontId,
    #[serde(default = "default_spacing", deserialize_with = "int_i32")]
    pub spacing: i32,
    #[serde(default)]
    pub color: Color,
    /// seconds each line is held before sliding
    #[serde(default = "default_hold")]
    pub speed: f64,
    /// seconds the slide takes
    #[serde(default = "default_transition")]
    pub scroll_duration: f64,
    #[serde(default)]
    pub direction: Direction,
}

impl LongTextElement {
    pub fn style(&self) -> TextStyle {
        TextStyle { font: self.font, spacing: self.spacing, color: self.color }
    }
}

/// Raw `[x, y, r, g, b]` / `[x, y, r, g, b, a]` entries, validated when drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelsElement {
    #[serde(default)]
    pub pixels: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconElement {
    #[serde(default = "default_icon_name")]
    pub name: String,
    #[serde(default = "default_icon_size", deserialize_with = "int_u32")]
    pub size: u32,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Slide direction for paged text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            _ => Direction::Up,
        }
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
        .to_string()
    }
}

impl Element {
    pub fn new(x: i32, y: i32, kind: ElementKind) -> Self {
        Self { x, y, kind }
    }

    /// Decode one entry. Anything malformed becomes an inert `Unknown` element.
    pub fn from_value(value: Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or("untyped").to_string();
        serde_json::from_value(value).unwrap_or_else(|e| {
            debug!("ignoring malformed {} element: {}", kind, e);
            Element::new(0, 0, ElementKind::Unknown)
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ElementKind::Text(_) => "text",
            ElementKind::TextScroll(_) => "textscroll",
            ElementKind::TextLong(_) => "textlong",
            ElementKind::Pixels(_) => "pixels",
            ElementKind::Icon(_) => "icon",
            ElementKind::Image(_) => "image",
            ElementKind::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::color::Rgba;
    use serde_json::json;

    #[test]
    fn test_text_defaults() {
        let el: Element = serde_json::from_value(json!({"type": "text"})).unwrap();
        assert_eq!((el.x, el.y), (0, 0));
        match el.kind {
            ElementKind::Text(t) => {
                assert_eq!(t.content, "");
                assert_eq!(t.font, FontId::Fixed5x7);
                assert_eq!(t.spacing, 1);
                assert_eq!(t.color, Color::WHITE);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_textscroll_fields() {
        let el: Element = serde_json::from_value(json!({
            "type": "textscroll", "x": -3, "y": 4, "content": "Hi",
            "font": "3x5", "speed": 25, "color": [255, 0, 0]
        }))
        .unwrap();
        assert_eq!((el.x, el.y), (-3, 4));
        let ElementKind::TextScroll(s) = el.kind else { panic!("not a scroller") };
        assert_eq!(s.speed, 25.0);
        assert_eq!(s.font, FontId::Small3x5);
        assert_eq!(s.color.rgba(), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_textlong_defaults_and_direction() {
        let el: Element = serde_json::from_value(json!({
            "type": "textlong", "content": "a b", "direction": "sideways"
        }))
        .unwrap();
        let ElementKind::TextLong(l) = el.kind else { panic!("not paged text") };
        assert_eq!(l.speed, 2.0);
        assert_eq!(l.scroll_duration, 0.5);
        assert_eq!(l.direction, Direction::Up);

        let el: Element =
            serde_json::from_value(json!({"type": "textlong", "direction": "left"})).unwrap();
        let ElementKind::TextLong(l) = el.kind else { panic!("not paged text") };
        assert_eq!(l.direction, Direction::Left);
    }

    #[test]
    fn test_icon_and_image() {
        let el: Element = serde_json::from_value(json!({"type": "icon"})).unwrap();
        let ElementKind::Icon(i) = el.kind else { panic!("not an icon") };
        assert_eq!(i.name, "mdi:help");
        assert_eq!(i.size, 16);

        let el: Element =
            serde_json::from_value(json!({"type": "image", "url": "http://x/y.png", "width": 8})).unwrap();
        let ElementKind::Image(img) = el.kind else { panic!("not an image") };
        assert_eq!(img.url.as_deref(), Some("http://x/y.png"));
        assert_eq!((img.width, img.height), (Some(8), None));
    }

    #[test]
    fn test_unknown_type_is_inert() {
        let el: Element = serde_json::from_value(json!({"type": "sparkles", "x": 2})).unwrap();
        assert_eq!(el.kind, ElementKind::Unknown);
        assert_eq!(el.type_name(), "unknown");
    }

    #[test]
    fn test_fractional_numbers_truncate() {
        let el = Element::from_value(json!({
            "type": "text", "x": 1.5, "y": -2.7, "spacing": 2.9, "content": "ok"
        }));
        assert_eq!((el.x, el.y), (1, -2));
        let ElementKind::Text(t) = el.kind else { panic!("not text") };
        assert_eq!(t.spacing, 2);

        let el = Element::from_value(json!({"type": "icon", "size": 12.0}));
        let ElementKind::Icon(i) = el.kind else { panic!("not an icon") };
        assert_eq!(i.size, 12);
    }

    #[test]
    fn test_malformed_element_is_inert() {
        let bad = [
            json!({"type": "text", "spacing": "wide"}),
            json!({"type": "pixels", "pixels": "junk"}),
            json!({"type": "icon", "size": -4}),
            json!({"type": "text", "color": [1, 2]}),
            json!({"content": "no type"}),
            json!("not even an object"),
        ];
        for value in bad {
            assert_eq!(Element::from_value(value).kind, ElementKind::Unknown);
        }
    }

    #[test]
    fn test_pixels_keep_malformed_entries_for_later() {
        let el: Element = serde_json::from_value(json!({
            "type": "pixels", "pixels": [[0, 0, 255, 0, 0], [1, 2], "junk"]
        }))
        .unwrap();
        let ElementKind::Pixels(p) = el.kind else { panic!("not pixels") };
        assert_eq!(p.pixels.len(), 3);
    }
}
