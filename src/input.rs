// Pure input helpers: no web_sys types here so the host-side tests can
// include this file directly.

use glam::Vec2;
use picker_core::{InputEvent, TouchId};

/// Canvas placement as reported by `getBoundingClientRect`, plus the size of
/// its backing store in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub left: f32,
    pub top: f32,
    pub css_width: f32,
    pub css_height: f32,
    pub px_width: f32,
    pub px_height: f32,
}

impl CanvasGeometry {
    /// Device pixels per CSS pixel; 1.0 for a degenerate layout.
    #[inline]
    pub fn scale(&self) -> f32 {
        if self.css_width > 0.0 {
            self.px_width / self.css_width
        } else {
            1.0
        }
    }
}

/// Map a client (viewport) coordinate into the canvas backing store.
#[inline]
pub fn client_to_canvas_px(client: Vec2, geo: &CanvasGeometry) -> Vec2 {
    if geo.css_width <= 0.0 || geo.css_height <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = client.x - geo.left;
    let y_css = client.y - geo.top;
    Vec2::new(
        x_css / geo.css_width * geo.px_width,
        y_css / geo.css_height * geo.px_height,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchKind {
    /// DOM event name this kind is wired to.
    pub fn dom_event(self) -> &'static str {
        match self {
            TouchKind::Start => "touchstart",
            TouchKind::Move => "touchmove",
            TouchKind::End => "touchend",
            TouchKind::Cancel => "touchcancel",
        }
    }

    pub fn event(self, id: TouchId, pos: Vec2) -> InputEvent {
        match self {
            TouchKind::Start => InputEvent::Start(id, pos),
            TouchKind::Move => InputEvent::Move(id, pos),
            TouchKind::End => InputEvent::End(id),
            TouchKind::Cancel => InputEvent::Cancel(id),
        }
    }
}

/// Only the primary button of a real mouse stands in for a finger; pen and
/// touch pointers already arrive as touch events.
#[inline]
pub fn is_primary_mouse(pointer_type: &str, button: i16) -> bool {
    pointer_type == "mouse" && button == 0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Clear,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Clear),
        "Enter" | "f" | "F" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// CSS colour string for a linear 0..1 RGBA quadruple.
pub fn css_rgba(rgba: [f32; 4]) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        c(rgba[0]),
        c(rgba[1]),
        c(rgba[2]),
        rgba[3].clamp(0.0, 1.0)
    )
}
