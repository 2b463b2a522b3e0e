use crate::dom;
use crate::input::{self, TouchKind};
use crate::Engine;
use glam::Vec2;
use picker_core::{InputEvent, TouchId, MOUSE_TOUCH_ID};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<Engine>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    for kind in [
        TouchKind::Start,
        TouchKind::Move,
        TouchKind::End,
        TouchKind::Cancel,
    ] {
        wire_touch(&w, kind);
    }
    wire_mouse(&w, "pointerdown", TouchKind::Start);
    wire_mouse(&w, "pointermove", TouchKind::Move);
    wire_mouse(&w, "pointerup", TouchKind::End);
    wire_mouse(&w, "pointercancel", TouchKind::Cancel);
}

fn non_passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    opts
}

// All changed touches of one DOM event go to the engine as a single batch.
fn wire_touch(w: &InputWiring, kind: TouchKind) {
    let w_cl = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let geo = dom::canvas_geometry(&w_cl.canvas);
        let list = ev.changed_touches();
        let batch: Vec<InputEvent> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|t| {
                let client = Vec2::new(t.client_x() as f32, t.client_y() as f32);
                let pos = input::client_to_canvas_px(client, &geo);
                kind.event(TouchId(t.identifier() as i64), pos)
            })
            .collect();
        if !batch.is_empty() {
            w_cl.engine.borrow_mut().apply_batch(&batch);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind.dom_event(),
            closure.as_ref().unchecked_ref(),
            &non_passive(),
        );
    closure.forget();
}

// A held mouse button acts as one extra finger. Moves for a button that is
// not down are ignored by the registry.
fn wire_mouse(w: &InputWiring, event_name: &'static str, kind: TouchKind) {
    let w_cl = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer_type = ev.pointer_type();
        if pointer_type != "mouse" {
            return;
        }
        if matches!(kind, TouchKind::Start | TouchKind::End)
            && !input::is_primary_mouse(&pointer_type, ev.button())
        {
            return;
        }
        let geo = dom::canvas_geometry(&w_cl.canvas);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let pos = input::client_to_canvas_px(client, &geo);
        if kind == TouchKind::Start {
            _ = w_cl.canvas.set_pointer_capture(ev.pointer_id());
        }
        w_cl.engine
            .borrow_mut()
            .apply(kind.event(TouchId(MOUSE_TOUCH_ID), pos));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    closure.forget();
}
