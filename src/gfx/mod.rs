//! Thin GL abstraction the render loop draws through.
//!
//! Method names track the WebGL2 calls they stand for, so the browser
//! implementation is a one-line forward per method.

mod geometry;
mod program;

pub use geometry::{GeometryBuffer, QUAD_ITEM_SIZE, QUAD_VERTEX_COUNT, QUAD_VERTICES};
pub use program::ShaderProgram;

use crate::error::{Result, ShaderStage};

/// Opaque clear colour, dark red.
pub const CLEAR_COLOR: [f32; 4] = [0.5, 0.0, 0.0, 1.0];

pub trait GraphicsBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    /// Compiles one stage, returning the info log as `RenderError::Compilation`.
    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader>;
    /// Links both stages, returning the info log as `RenderError::Link`.
    fn link_program(&self, vertex: &Self::Shader, fragment: &Self::Shader) -> Result<Self::Program>;
    fn use_program(&self, program: &Self::Program);
    /// `None` when the program has no active attribute of that name.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::UniformLocation>;

    /// Creates an `ARRAY_BUFFER` with `STATIC_DRAW` usage holding `data`.
    fn create_static_buffer(&self, data: &[f32]) -> Result<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: &Self::Buffer);
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Float components, not normalized, tightly packed from offset 0.
    fn vertex_attrib_pointer(&self, index: u32, size: i32);

    fn clear_color(&self, rgba: [f32; 4]);
    fn enable_depth_test(&self);
    fn viewport(&self, width: i32, height: i32);
    /// Clears colour and depth.
    fn clear(&self);

    fn uniform_matrix4(&self, location: Option<&Self::UniformLocation>, columns: &[f32; 16]);
    fn uniform1f(&self, location: Option<&Self::UniformLocation>, value: f32);
    fn draw_triangle_strip(&self, first: i32, count: i32);
}

/// The accelerated context bound to a drawable of fixed pixel size.
pub struct GraphicsContext<B: GraphicsBackend> {
    backend: B,
    width: i32,
    height: i32,
}

impl<B: GraphicsBackend> GraphicsContext<B> {
    /// Applies the one-time state: clear colour, depth test and viewport.
    pub fn new(backend: B, width: u32, height: u32, clear_color: [f32; 4]) -> Self {
        let ctx = Self {
            backend,
            width: width as i32,
            height: height as i32,
        };
        ctx.backend.clear_color(clear_color);
        ctx.backend.enable_depth_test();
        ctx.set_viewport();
        ctx
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Re-applies the startup viewport; the drawable is never resized.
    pub fn set_viewport(&self) {
        self.backend.viewport(self.width, self.height);
    }

    pub fn clear(&self) {
        self.backend.clear();
    }
}
