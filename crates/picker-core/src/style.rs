//! Circle layers derived from a [`RenderState`].
//!
//! Both renderers draw the same picture; this turns touches and the selection
//! intensity into plain circles so neither has to know about phases.

use crate::constants::*;
use crate::state::RenderState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLayer {
    pub center: Vec2,
    pub radius: f32,
    pub rgba: [f32; 4],
    /// Line width for rings; `None` for filled disks.
    pub stroke: Option<f32>,
}

fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a.clamp(0.0, 1.0)]
}

/// Outer glow, inner glow and core disk for a selection at `intensity`.
pub fn selected_layers(center: Vec2, intensity: f32, scale: f32) -> [CircleLayer; 3] {
    let radii = [GLOW_OUTER_RADIUS, GLOW_INNER_RADIUS, TOUCH_RADIUS];
    let mut out = [CircleLayer {
        center,
        radius: 0.0,
        rgba: [0.0; 4],
        stroke: None,
    }; 3];
    for (i, layer) in out.iter_mut().enumerate() {
        layer.radius = radii[i] * scale;
        layer.rgba = rgba(SELECTED_RGB, GLOW_ALPHAS[i] * intensity);
    }
    out
}

/// Ring and faint halo drawn for every touch that is not highlighted.
pub fn idle_layers(center: Vec2, scale: f32) -> [CircleLayer; 2] {
    [
        CircleLayer {
            center,
            radius: TOUCH_RADIUS * scale,
            rgba: rgba(IDLE_RGB, RING_ALPHA),
            stroke: Some(2.0 * scale),
        },
        CircleLayer {
            center,
            radius: TOUCH_HALO_RADIUS * scale,
            rgba: rgba(IDLE_RGB, HALO_ALPHA),
            stroke: Some(scale),
        },
    ]
}

/// All layers for one frame, back to front. `scale` converts logical sizes
/// to the target's pixels (the device pixel ratio on the web).
pub fn frame_layers(state: &RenderState, scale: f32) -> Vec<CircleLayer> {
    let mut layers = Vec::with_capacity(state.touches.len() * 2 + 3);
    let mut selected = None;
    for t in &state.touches {
        match state.selection {
            Some(sel) if sel.id == t.id => selected = Some((t.position, sel.intensity)),
            _ => layers.extend(idle_layers(t.position, scale)),
        }
    }
    if let Some((center, intensity)) = selected {
        layers.extend(selected_layers(center, intensity, scale));
    }
    layers
}
