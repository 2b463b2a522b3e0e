use crate::dom;
use crate::input::{key_action, KeyAction};
use crate::Engine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, engine: &Rc<RefCell<Engine>>) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::Clear => {
            engine.borrow_mut().clear_all();
            log::info!("[keys] cleared all touches");
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = dom::window_document() {
                dom::toggle_fullscreen(&doc);
            }
            ev.prevent_default();
        }
        KeyAction::ExitFullscreen => {
            if let Some(doc) = dom::window_document() {
                dom::exit_fullscreen(&doc);
            }
        }
    }
}

pub fn wire_global_keydown(engine: Rc<RefCell<Engine>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &engine);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
