use crate::dom;
use crate::render::CanvasRenderer;
use crate::Engine;
use picker_core::{Phase, RenderState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: CanvasRenderer,
    pub last_phase: Phase,
    /// What the canvas currently shows, with the backing size it was drawn at.
    pub last_drawn: Option<(RenderState, u32, u32)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Timers fire here; the engine catches up if frames were skipped.
        let (state, animating) = {
            let mut engine = self.engine.borrow_mut();
            engine.tick();
            (engine.render_state(), engine.is_animating())
        };
        if state.phase != self.last_phase {
            if state.phase == Phase::Selected {
                if let Some(sel) = &state.selection {
                    log::info!("[frame] selected touch {}", sel.id.0);
                }
            }
            self.last_phase = state.phase;
        }
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let unchanged = self
            .last_drawn
            .as_ref()
            .is_some_and(|(s, lw, lh)| *s == state && *lw == w && *lh == h);
        if unchanged && !animating {
            return;
        }
        let scale = dom::device_pixel_ratio() as f32;
        self.renderer.draw(w, h, &state, scale);
        self.last_drawn = Some((state, w, h));
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
