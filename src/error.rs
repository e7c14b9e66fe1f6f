use std::fmt;

use thiserror::Error;

/// Which programmable stage a shader source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Everything that can stop the fractal from reaching the screen.
///
/// All variants except `Scheduling` are raised during one-shot startup and
/// abort it; there is no retry path.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not initialize WebGL2: {0}")]
    Initialization(String),
    #[error("{stage} shader failed to compile:\n{log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("could not link shader program: {0}")]
    Link(String),
    #[error("shader program has no `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("GPU allocation failed: {0}")]
    Allocation(&'static str),
    #[error("could not schedule animation frame: {0}")]
    Scheduling(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
