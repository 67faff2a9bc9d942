/*
 *  tests/display_integration.rs
 *
 *  Integration tests for scene rendering
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 */

use serde_json::json;
use umpix::display::canvas::Frame;
use umpix::display::scene::{PreparedScene, SceneRequest};
use umpix::display::{render, RenderContext};
use umpix::fonts::FontId;
use umpix::glyph_cache::GlyphCache;
use umpix::media::NoImages;
use umpix::textlayout::{measure, wrap};

fn scene(ctx: &RenderContext, v: serde_json::Value) -> PreparedScene {
    PreparedScene::layout(serde_json::from_value::<SceneRequest>(v).unwrap(), ctx)
}

fn lit_columns(frame: &Frame) -> Vec<u32> {
    (0..frame.width())
        .filter(|&x| (0..frame.height()).any(|y| frame.pixel(x, y) != Some([0, 0, 0])))
        .collect()
}

#[test]
fn test_background_only_scene() {
    let ctx = RenderContext::new(32, 32);
    let s = scene(&ctx, json!({"elements": [], "background": [10, 20, 30]}));
    let frame = render(&ctx, &s, 0.0);
    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(frame.pixel(x, y), Some([10, 20, 30]));
        }
    }
}

#[test]
fn test_measure_hello() {
    let glyphs = GlyphCache::new();
    assert_eq!(measure(&glyphs, "HELLO", FontId::Fixed5x7, 1), 29);
}

#[test]
fn test_single_line_textlong_matches_text() {
    let ctx = RenderContext::new(64, 8);
    let paged = scene(&ctx, json!({"elements": [
        {"type": "textlong", "x": 2, "y": 1, "content": "HI THERE", "color": [0, 255, 0]}
    ]}));
    let plain = scene(&ctx, json!({"elements": [
        {"type": "text", "x": 2, "y": 1, "content": "HI THERE", "color": [0, 255, 0]}
    ]}));
    assert!(!paged.needs_animation());
    for now in [0.0, 1.3, 2.25, 99.0] {
        assert_eq!(render(&ctx, &paged, now), render(&ctx, &plain, now));
    }
}

#[test]
fn test_multi_line_textlong_animates() {
    let ctx = RenderContext::new(32, 8);
    let s = scene(&ctx, json!({"elements": [
        {"type": "textlong", "content": "the quick brown fox jumps over the lazy dog"}
    ]}));
    assert!(s.needs_animation());
    assert!(s.elements[0].lines.len() > 1);
    // held line and the next line differ
    assert_ne!(render(&ctx, &s, 0.0), render(&ctx, &s, 2.5));
}

#[test]
fn test_wrap_rejoins_to_input() {
    let glyphs = GlyphCache::new();
    let text = "pack my box with five dozen liquor jugs";
    for width in [8, 20, 32, 64] {
        let lines = wrap(&glyphs, text, FontId::Fixed5x7, 1, width);
        assert_eq!(lines.join(" "), text);
        for line in &lines {
            if line.contains(' ') {
                assert!(measure(&glyphs, line, FontId::Fixed5x7, 1) <= width);
            }
        }
    }
}

#[test]
fn test_scroll_enters_from_right() {
    let ctx = RenderContext::new(64, 8);
    let s = scene(&ctx, json!({"elements": [
        {"type": "textscroll", "x": 30, "content": "ABCDEFG", "speed": 10}
    ]}));

    // starts just past the right edge, own x ignored
    assert!(lit_columns(&render(&ctx, &s, 0.0)).is_empty());
    // a second later it has moved 10 px in
    let cols = lit_columns(&render(&ctx, &s, 1.0));
    assert!(!cols.is_empty());
    assert!(cols.iter().all(|&x| x >= 54));
}

#[test]
fn test_malformed_elements_do_not_abort() {
    let ctx = RenderContext::new(8, 8);
    let s = scene(&ctx, json!({"background": [0, 0, 40], "elements": [
        {"type": "pixels", "pixels": [[0, 0, 255, 0, 0], [1, 1], [99, 99, 1, 2, 3], "x", [2, 2, 0, 255, 0, 0]]},
        {"type": "icon", "name": "mdi:nothing"},
        {"type": "image"},
        {"type": "hologram"},
        {"type": "text", "x": 100, "content": "off canvas"}
    ]}));
    let frame = render(&ctx, &s, 0.0);
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0]));
    // zero alpha leaves the background
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 40]));
    assert_eq!(frame.pixel(5, 5), Some([0, 0, 40]));
}

#[test]
fn test_badly_typed_element_leaves_the_rest_drawn() {
    let ctx = RenderContext::new(32, 8);
    let good = json!({"type": "text", "x": 1, "content": "ok"});
    let alone = render(&ctx, &scene(&ctx, json!({"elements": [good.clone()]})), 0.0);
    assert!(!lit_columns(&alone).is_empty());

    let bad = [
        json!({"type": "text", "spacing": "wide"}),
        json!({"type": "pixels", "pixels": "junk"}),
        json!({"type": "icon", "size": -4}),
        json!({"type": "text", "color": [1, 2]}),
        json!({"content": "no type"}),
    ];
    for el in bad {
        let s = scene(&ctx, json!({"elements": [good.clone(), el]}));
        assert_eq!(s.elements.len(), 2);
        assert_eq!(render(&ctx, &s, 0.0), alone);
    }

    // fractional position is truncated, not rejected
    let s = scene(&ctx, json!({"elements": [{"type": "text", "x": 1.5, "content": "ok"}]}));
    assert_eq!(render(&ctx, &s, 0.0), alone);
}

#[tokio::test]
async fn test_prepare_without_images_draws_nothing_for_image() {
    let ctx = RenderContext::new(8, 8);
    let request: SceneRequest = serde_json::from_value(json!({"elements": [
        {"type": "image", "url": "http://example.invalid/x.png"}
    ]}))
    .unwrap();
    let s = PreparedScene::prepare(request, &ctx, &NoImages).await;
    assert!(s.elements[0].image.is_none());
    assert_eq!(render(&ctx, &s, 0.0), Frame::blank(8, 8));
}
