use glam::Vec2;
use picker_core::{
    frame_layers, InputEvent, InstantClock, Phase, PickerConfig, RenderState, SelectionEngine,
    TouchId, MOUSE_TOUCH_ID,
};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, Window, WindowBuilder},
};

mod gpu;

use gpu::{CircleInstance, GpuState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    Clear,
    ToggleFullscreen,
    Quit,
}

fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KeyAction::Quit),
        Key::Named(NamedKey::Enter) => Some(KeyAction::ToggleFullscreen),
        Key::Character(c) => match c.as_str() {
            "r" | "R" => Some(KeyAction::Clear),
            "f" | "F" => Some(KeyAction::ToggleFullscreen),
            _ => None,
        },
        _ => None,
    }
}

fn touch_event(touch: &Touch) -> InputEvent {
    let id = TouchId(touch.id as i64);
    let pos = Vec2::new(touch.location.x as f32, touch.location.y as f32);
    match touch.phase {
        TouchPhase::Started => InputEvent::Start(id, pos),
        TouchPhase::Moved => InputEvent::Move(id, pos),
        TouchPhase::Ended => InputEvent::End(id),
        TouchPhase::Cancelled => InputEvent::Cancel(id),
    }
}

/// `picker-native dwell=1500 cycle` reads like the web query `?dwell=1500&cycle`.
fn config_from_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<PickerConfig> {
    let query = args.into_iter().collect::<Vec<_>>().join("&");
    Ok(PickerConfig::from_query(&query)?)
}

struct App<'w> {
    gpu: GpuState<'w>,
    engine: SelectionEngine<InstantClock>,
    cursor: Vec2,
    last_phase: Phase,
    /// Cleared whenever the surface is reconfigured.
    last_drawn: Option<RenderState>,
}

impl<'w> App<'w> {
    fn window(&self) -> &'w Window {
        self.gpu.window
    }

    /// Returns false when the app should exit.
    fn on_key(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Clear => {
                self.engine.clear_all();
                log::info!("[keys] cleared all touches");
            }
            KeyAction::ToggleFullscreen => {
                let next = match self.window().fullscreen() {
                    Some(_) => None,
                    None => Some(Fullscreen::Borderless(None)),
                };
                self.window().set_fullscreen(next);
            }
            KeyAction::Quit => return false,
        }
        true
    }

    fn on_mouse_button(&mut self, state: ElementState) {
        let id = TouchId(MOUSE_TOUCH_ID);
        let ev = match state {
            ElementState::Pressed => InputEvent::Start(id, self.cursor),
            ElementState::Released => InputEvent::End(id),
        };
        self.engine.apply(ev);
    }

    fn on_cursor_moved(&mut self, pos: Vec2) {
        self.cursor = pos;
        // Ignored by the registry unless the button is held
        self.engine
            .apply(InputEvent::Move(TouchId(MOUSE_TOUCH_ID), pos));
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(size);
        self.last_drawn = None;
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.engine.tick();
        let state = self.engine.render_state();
        if state.phase != self.last_phase {
            if let (Phase::Selected, Some(sel)) = (state.phase, &state.selection) {
                log::info!("[frame] selected touch {}", sel.id.0);
            }
            self.last_phase = state.phase;
        }
        if !self.engine.is_animating() && self.last_drawn.as_ref() == Some(&state) {
            return Ok(());
        }
        let scale = self.window().scale_factor() as f32;
        let instances: Vec<CircleInstance> = frame_layers(&state, scale)
            .iter()
            .map(CircleInstance::from)
            .collect();
        self.gpu.render(&instances)?;
        self.last_drawn = Some(state);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config_from_args(std::env::args().skip(1))?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Touch Picker")
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App {
        gpu,
        engine: SelectionEngine::new(config, InstantClock::new()),
        cursor: Vec2::ZERO,
        last_phase: Phase::Idle,
        last_drawn: None,
    };
    {
        let config = app.engine.config();
        log::info!(
            "[engine] dwell={}ms hold={}ms fade_rate={} cycling={} cooldown={}ms",
            config.dwell_delay_ms,
            config.hold_duration_ms,
            config.fade_step_rate,
            config.cycling_active(),
            config.cooldown_ms
        );
    }

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Touch(touch) => app.engine.apply(touch_event(&touch)),
            WindowEvent::CursorMoved { position, .. } => {
                app.on_cursor_moved(Vec2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.on_mouse_button(state),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(action) = key_action(&event.logical_key) {
                    if !app.on_key(action) {
                        elwt.exit();
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => match app.frame() {
            Ok(_) => app.window().request_redraw(),
            Err(wgpu::SurfaceError::Lost) => app.resize(app.window().inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("surface error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::DeparturePolicy;

    #[test]
    fn cli_args_follow_query_syntax() {
        let args = ["dwell=1500", "cycle", "departure=keep"].map(String::from);
        let cfg = config_from_args(args).unwrap();
        assert_eq!(cfg.dwell_delay_ms, 1500);
        assert!(cfg.cycling_enabled);
        assert_eq!(cfg.departure_policy, DeparturePolicy::Keep);
    }

    #[test]
    fn no_args_means_defaults() {
        let cfg = config_from_args(Vec::new()).unwrap();
        assert_eq!(cfg, PickerConfig::default());
    }

    #[test]
    fn bad_args_are_rejected() {
        assert!(config_from_args(["bogus=1".to_string()]).is_err());
    }

    #[test]
    fn key_bindings() {
        assert_eq!(
            key_action(&Key::Character("r".into())),
            Some(KeyAction::Clear)
        );
        assert_eq!(
            key_action(&Key::Character("F".into())),
            Some(KeyAction::ToggleFullscreen)
        );
        assert_eq!(
            key_action(&Key::Named(NamedKey::Escape)),
            Some(KeyAction::Quit)
        );
        assert_eq!(key_action(&Key::Character("x".into())), None);
    }
}
