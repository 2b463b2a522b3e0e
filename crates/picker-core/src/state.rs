//! Render-side state types shared with the front ends.
//!
//! These types avoid platform-specific APIs so both the web and native
//! renderers can consume them. The renderer never sees timers, only the
//! normalized `intensity` of the current selection.

use crate::registry::TouchId;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Armed,
    Cycling,
    Selected,
    Fading,
    Cooldown,
}

impl Phase {
    /// Phases in which a touch is highlighted.
    pub fn is_highlighted(self) -> bool {
        matches!(self, Phase::Cycling | Phase::Selected | Phase::Fading)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchView {
    pub id: TouchId,
    pub position: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionView {
    pub id: TouchId,
    /// Emphasis in \[0, 1\]; renderers scale glow alpha/size by it.
    pub intensity: f32,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderState {
    pub phase: Phase,
    pub touches: Vec<TouchView>,
    pub selection: Option<SelectionView>,
}

impl RenderState {
    pub fn is_selected(&self, id: TouchId) -> bool {
        self.selection.is_some_and(|s| s.id == id)
    }
}

/// The machine's phase plus its derived render parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub phase: Phase,
    pub selected_id: Option<TouchId>,
    pub intensity: f32,
}
