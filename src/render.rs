//! Rendering: replays paint layers on a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only strokes and produces pixels; it does not mutate any
//! application state. The effect-specific decisions live in [`crate::paint`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::paint::{self, PaintLayer};
use crate::stroke::Stroke;

/// Draw the full scene: every stroke in order, oldest at the bottom.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw<'a>(
    ctx: &CanvasRenderingContext2d,
    strokes: impl IntoIterator<Item = &'a Stroke>,
    width_scale: f64,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for stroke in strokes {
        for layer in paint::layers(stroke.style(), width_scale) {
            draw_layer(ctx, stroke, &layer)?;
        }
    }
    Ok(())
}

fn draw_layer(ctx: &CanvasRenderingContext2d, stroke: &Stroke, layer: &PaintLayer) -> Result<(), JsValue> {
    let Some((first, rest)) = stroke.points().split_first() else {
        return Ok(());
    };
    let css = layer.color.to_css();

    ctx.save();
    ctx.set_global_alpha(layer.alpha);
    ctx.set_stroke_style_str(&css);
    ctx.set_line_width(layer.width);
    ctx.set_line_join("round");
    if let Some([dash, gap]) = layer.dash {
        ctx.set_line_cap("butt");
        ctx.set_line_dash(&Array::of2(&JsValue::from_f64(dash), &JsValue::from_f64(gap)))?;
    } else {
        ctx.set_line_cap("round");
    }
    if let Some(blur) = layer.blur {
        ctx.set_shadow_color(&css);
        ctx.set_shadow_blur(blur);
    }

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();

    ctx.restore();
    Ok(())
}
