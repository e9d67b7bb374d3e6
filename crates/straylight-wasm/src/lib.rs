//! WASM bindings for the Straylight highlighter.
//!
//! Exposes highlighting to the page script via wasm-bindgen. The page fetches
//! the source itself and passes `fallbackText()` in when the fetch fails.

use straylight_render::{RenderOptions, StyleMode};
use wasm_bindgen::prelude::*;

/// Highlight Lean source and return inline-styled HTML.
#[wasm_bindgen(js_name = highlightHtml)]
pub fn highlight_html(source: &str) -> String {
    straylight_render::render(source, &RenderOptions::default()).html
}

/// Render Lean source.
///
/// Returns a JS object `{ html, css, summary }`. With `classes` set, spans
/// carry category classes and `css` holds the matching stylesheet.
#[wasm_bindgen]
pub fn render(source: &str, classes: bool) -> Result<JsValue, JsError> {
    let options = RenderOptions {
        style: if classes {
            StyleMode::Classes
        } else {
            StyleMode::Inline
        },
    };
    let output = straylight_render::render(source, &options);

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"html".into(), &output.html.into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"css".into(), &output.css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;
    js_sys::Reflect::set(&js_obj, &"summary".into(), &output.stats.summary().into())
        .map_err(|_| JsError::new("Failed to set summary property"))?;

    Ok(js_obj.into())
}

/// Highlight Lean source and return the lines as plain JS objects:
/// `[{ index, text, kind, tokens: [{ text, category, span }] }]`.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    let lines = straylight_lexer::highlight(source);
    serde_wasm_bindgen::to_value(&lines).map_err(|e| JsError::new(&e.to_string()))
}

/// Text to highlight in place of a source that failed to load.
#[wasm_bindgen(js_name = fallbackText)]
pub fn fallback_text() -> String {
    straylight_lexer::FALLBACK_TEXT.to_string()
}

/// Get the highlighter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
