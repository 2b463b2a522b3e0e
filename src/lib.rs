#![cfg(target_arch = "wasm32")]
use picker_core::{InstantClock, Phase, PickerConfig, SelectionEngine};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, FULLSCREEN_BUTTON_ID, REFRESH_BUTTON_ID};

pub(crate) type Engine = SelectionEngine<InstantClock>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_buttons(document: &web::Document, engine: &Rc<RefCell<Engine>>) {
    let fullscreen = dom::fullscreen_supported(document);
    overlay::set_visible(document, FULLSCREEN_BUTTON_ID, fullscreen);
    if fullscreen {
        dom::add_click_listener(document, FULLSCREEN_BUTTON_ID, move || {
            if let Some(doc) = dom::window_document() {
                dom::toggle_fullscreen(&doc);
            }
        });
    }

    let engine_refresh = engine.clone();
    dom::add_click_listener(document, REFRESH_BUTTON_ID, move || {
        engine_refresh.borrow_mut().clear_all();
        log::info!("[ui] refresh");
    });
}

fn load_config() -> PickerConfig {
    let query = dom::query_string();
    match PickerConfig::from_query(&query) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring query {:?}: {}", query, e);
            PickerConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("picker-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let engine = Rc::new(RefCell::new(Engine::new(load_config(), InstantClock::new())));
    {
        let e = engine.borrow();
        let config = e.config();
        log::info!(
            "[engine] dwell={}ms hold={}ms fade_rate={} cycling={} cooldown={}ms",
            config.dwell_delay_ms,
            config.hold_duration_ms,
            config.fade_step_rate,
            config.cycling_active(),
            config.cooldown_ms
        );
    }

    wire_buttons(&document, &engine);
    events::wire_global_keydown(engine.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        engine: engine.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas,
        renderer: render::CanvasRenderer::new(ctx),
        last_phase: Phase::Idle,
        last_drawn: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
