use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::config::FractalConfig;
use crate::params::ParameterSource;

/// The speed and size `<input>` elements, looked up by id on every poll so
/// the page may swap them out between frames.
pub struct DomControls {
    document: Document,
    speed_id: String,
    size_id: String,
}

impl DomControls {
    pub fn new(document: Document, config: &FractalConfig) -> Self {
        Self {
            document,
            speed_id: config.speed_input_id.clone(),
            size_id: config.size_input_id.clone(),
        }
    }

    /// Shows the suggested starting values. Called once, before the loop.
    pub fn write_initial(&self, speed: f64, size: f64) {
        self.write(&self.speed_id, speed);
        self.write(&self.size_id, size);
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn write(&self, id: &str, value: f64) {
        match self.input(id) {
            Some(input) => input.set_value(&value.to_string()),
            None => log::warn!("control #{id} not found"),
        }
    }
}

impl ParameterSource for DomControls {
    fn speed_text(&self) -> Option<String> {
        self.input(&self.speed_id).map(|i| i.value())
    }

    fn size_text(&self) -> Option<String> {
        self.input(&self.size_id).map(|i| i.value())
    }
}
