// Host-side tests for the circle layers both renderers draw.

use glam::Vec2;
use picker_core::*;

fn view(id: i64, x: f32) -> TouchView {
    TouchView {
        id: TouchId(id),
        position: Vec2::new(x, 0.0),
    }
}

#[test]
fn unselected_touches_get_ring_and_halo() {
    let state = RenderState {
        phase: Phase::Armed,
        touches: vec![view(1, 10.0), view(2, 20.0)],
        selection: None,
    };
    let layers = frame_layers(&state, 1.0);
    assert_eq!(layers.len(), 4);
    assert!(layers.iter().all(|l| l.stroke.is_some()));
    assert_eq!(layers[0].radius, TOUCH_RADIUS);
    assert_eq!(layers[1].radius, TOUCH_HALO_RADIUS);
}

#[test]
fn selection_is_drawn_last_with_scaled_alpha() {
    let state = RenderState {
        phase: Phase::Fading,
        touches: vec![view(1, 10.0), view(2, 20.0), view(3, 30.0)],
        selection: Some(SelectionView {
            id: TouchId(2),
            intensity: 0.5,
        }),
    };
    let layers = frame_layers(&state, 2.0);
    assert_eq!(layers.len(), 2 * 2 + 3);

    let glow = &layers[4..];
    assert!(glow.iter().all(|l| l.center == Vec2::new(20.0, 0.0)));
    assert!(glow.iter().all(|l| l.stroke.is_none()));
    assert_eq!(glow[0].radius, GLOW_OUTER_RADIUS * 2.0);
    assert_eq!(glow[2].radius, TOUCH_RADIUS * 2.0);
    assert!((glow[2].rgba[3] - GLOW_ALPHAS[2] * 0.5).abs() < 1e-6);
    assert_eq!(&glow[2].rgba[..3], &SELECTED_RGB[..]);
}

#[test]
fn zero_intensity_selection_is_invisible() {
    let layers = selected_layers(Vec2::ZERO, 0.0, 1.0);
    assert!(layers.iter().all(|l| l.rgba[3] == 0.0));
}

#[test]
fn render_state_reports_selected_id() {
    let state = RenderState {
        phase: Phase::Selected,
        touches: vec![view(5, 0.0)],
        selection: Some(SelectionView {
            id: TouchId(5),
            intensity: 1.0,
        }),
    };
    assert!(state.is_selected(TouchId(5)));
    assert!(!state.is_selected(TouchId(6)));
}
