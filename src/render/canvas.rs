//! Canvas 2D implementation of the render surface

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::Surface;

/// Draws onto a host-owned `<canvas>` and positions an optional
/// host-supplied sprite element for the player.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sprite: Option<HtmlElement>,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, sprite: Option<HtmlElement>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            sprite,
        })
    }

    /// Toggle the sprite element on session transitions.
    pub fn show_sprite(&self, visible: bool) {
        if let Some(sprite) = &self.sprite {
            let value = if visible { "block" } else { "none" };
            let _ = sprite.style().set_property("display", value);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn place_sprite(&mut self, x: f32, y: f32) -> bool {
        let Some(sprite) = &self.sprite else {
            return false;
        };
        let style = sprite.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
        true
    }
}
