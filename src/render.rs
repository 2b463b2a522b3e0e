use crate::input::css_rgba;
use picker_core::{frame_layers, CircleLayer, RenderState, BACKGROUND_RGB};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D renderer for the shared circle layers.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    background: String,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        let [r, g, b] = BACKGROUND_RGB;
        Self {
            ctx,
            background: css_rgba([r, g, b, 1.0]),
        }
    }

    pub fn draw(&self, width: u32, height: u32, state: &RenderState, scale: f32) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&self.background);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
        for layer in frame_layers(state, scale) {
            self.draw_layer(&layer);
        }
    }

    fn draw_layer(&self, layer: &CircleLayer) {
        if layer.rgba[3] <= 0.0 {
            return;
        }
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(
            layer.center.x as f64,
            layer.center.y as f64,
            layer.radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        let style = css_rgba(layer.rgba);
        match layer.stroke {
            Some(width) => {
                ctx.set_stroke_style_str(&style);
                ctx.set_line_width(width as f64);
                ctx.stroke();
            }
            None => {
                ctx.set_fill_style_str(&style);
                ctx.fill();
            }
        }
    }
}
