// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use picker_core::{InputEvent, TouchId};

fn geometry(dpr: f32) -> CanvasGeometry {
    CanvasGeometry {
        left: 10.0,
        top: 20.0,
        css_width: 400.0,
        css_height: 300.0,
        px_width: 400.0 * dpr,
        px_height: 300.0 * dpr,
    }
}

#[test]
fn client_coordinates_map_into_backing_pixels() {
    let geo = geometry(2.0);
    let p = client_to_canvas_px(Vec2::new(110.0, 70.0), &geo);
    assert_eq!(p, Vec2::new(200.0, 100.0));
    assert_eq!(geo.scale(), 2.0);

    let origin = client_to_canvas_px(Vec2::new(10.0, 20.0), &geo);
    assert_eq!(origin, Vec2::ZERO);
}

#[test]
fn degenerate_canvas_maps_to_origin() {
    let geo = CanvasGeometry {
        left: 0.0,
        top: 0.0,
        css_width: 0.0,
        css_height: 0.0,
        px_width: 1.0,
        px_height: 1.0,
    };
    assert_eq!(client_to_canvas_px(Vec2::new(5.0, 5.0), &geo), Vec2::ZERO);
    assert_eq!(geo.scale(), 1.0);
}

#[test]
fn touch_kinds_build_matching_events() {
    let id = TouchId(3);
    let pos = Vec2::new(1.0, 2.0);
    assert_eq!(TouchKind::Start.event(id, pos), InputEvent::Start(id, pos));
    assert_eq!(TouchKind::Move.event(id, pos), InputEvent::Move(id, pos));
    assert_eq!(TouchKind::End.event(id, pos), InputEvent::End(id));
    assert_eq!(TouchKind::Cancel.event(id, pos), InputEvent::Cancel(id));
    assert_eq!(TouchKind::Cancel.dom_event(), "touchcancel");
}

#[test]
fn only_primary_mouse_button_acts_as_touch() {
    assert!(is_primary_mouse("mouse", 0));
    assert!(!is_primary_mouse("mouse", 2));
    assert!(!is_primary_mouse("touch", 0));
    assert!(!is_primary_mouse("pen", 0));
}

#[test]
fn key_bindings() {
    assert_eq!(key_action("r"), Some(KeyAction::Clear));
    assert_eq!(key_action("R"), Some(KeyAction::Clear));
    assert_eq!(key_action("Enter"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(key_action("Escape"), Some(KeyAction::ExitFullscreen));
    assert_eq!(key_action("x"), None);
}

#[test]
fn css_colours_are_clamped_and_rounded() {
    assert_eq!(css_rgba([1.0, 0.843, 0.0, 0.5]), "rgba(255, 215, 0, 0.500)");
    assert_eq!(css_rgba([2.0, -1.0, 0.5, 3.0]), "rgba(255, 0, 128, 1.000)");
}
