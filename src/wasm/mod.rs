use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::FractalConfig;
use crate::error::RenderError;

mod controls;
mod render;

#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Page entry point: finds the default canvas and starts the fractal.
#[wasm_bindgen(js_name = webGLStart)]
pub fn web_gl_start() -> Result<(), JsValue> {
    let config = FractalConfig::default();
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&config.canvas_id))
        .ok_or_else(|| RenderError::Initialization(format!("canvas #{} not found", config.canvas_id)))
        .and_then(|el| {
            el.dyn_into::<HtmlCanvasElement>()
                .map_err(|_| RenderError::Initialization(format!("#{} is not a canvas", config.canvas_id)))
        })
        .map_err(fail)?;

    start_with_config(canvas, config)
}

/// Embed entry point: starts the fractal on `canvas` with the default ids.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    start_with_config(canvas, FractalConfig::default())
}

pub fn start_with_config(canvas: HtmlCanvasElement, config: FractalConfig) -> Result<(), JsValue> {
    render::start(canvas, &config).map_err(fail)
}

/// Startup failures block on an alert before reaching the caller.
fn fail(err: RenderError) -> JsValue {
    let message = err.to_string();
    log::error!("{message}");
    if let Some(window) = web_sys::window() {
        window.alert_with_message(&message).ok();
    }
    JsValue::from_str(&message)
}
