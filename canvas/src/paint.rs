//! Painting: draws the primitives held by a [`MemorySurface`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Primitives are already in screen space, so painting is a straight walk in
//! stacking order. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Viewport;
use crate::consts::TEXT_LINE_PX;
use crate::geom::Rect;
use crate::surface::{MemorySurface, Shape};

/// Canvas background.
const BACKGROUND: &str = "#1e1e1e";

/// Label font; sized to match the surface's text hit box.
const LABEL_FONT: &str = "12px monospace";

/// Draw every primitive, bottom first.
///
/// `viewport` is in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
#[allow(clippy::cast_precision_loss)]
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    surface: &MemorySurface,
    viewport: Viewport,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

    for (_, shape) in surface.iter() {
        match shape {
            Shape::Rect { rect, fill, outline, width } => draw_rect(ctx, *rect, fill, outline, *width),
            Shape::Text { anchor, text, color } => {
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, anchor.x as f64, (anchor.y + TEXT_LINE_PX / 2) as f64)?;
            }
        }
    }
    Ok(())
}

/// Fill then stroke; inverted rects are normalized first.
#[allow(clippy::cast_precision_loss)]
fn draw_rect(ctx: &CanvasRenderingContext2d, rect: Rect, fill: &str, outline: &str, width: u32) {
    let x = rect.x0.min(rect.x1) as f64;
    let y = rect.y0.min(rect.y1) as f64;
    let w = rect.width().abs() as f64;
    let h = rect.height().abs() as f64;

    ctx.set_fill_style_str(fill);
    ctx.fill_rect(x, y, w, h);
    if width > 0 {
        ctx.set_line_width(f64::from(width));
        ctx.set_stroke_style_str(outline);
        ctx.stroke_rect(x, y, w, h);
    }
}
