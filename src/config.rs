use crate::gfx::CLEAR_COLOR;

/// Host page identifiers and startup constants.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalConfig {
    pub canvas_id: String,
    pub speed_input_id: String,
    pub size_input_id: String,
    /// Written into the controls once at startup, never again.
    pub initial_speed_display: f64,
    pub initial_size_display: f64,
    pub clear_color: [f32; 4],
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            canvas_id: "webglCanvas".into(),
            speed_input_id: "inputfractalSpeed".into(),
            size_input_id: "inputfractalSize".into(),
            initial_speed_display: 50.0,
            initial_size_display: 0.5,
            clear_color: CLEAR_COLOR,
        }
    }
}
