#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Real-time Julia-set fractal drawn into a full-viewport quad with WebGL2.

pub mod clock;
pub mod config;
pub mod error;
pub mod gfx;
pub mod params;
pub mod render_loop;
pub mod shaders;

pub use config::FractalConfig;
pub use error::{RenderError, Result, ShaderStage};
pub use render_loop::{FrameScheduler, LoopPhase, RenderLoop, RenderState};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{start, start_with_config, web_gl_start};
