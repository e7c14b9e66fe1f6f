use glam::Mat4;

use super::GraphicsBackend;
use crate::error::{RenderError, Result, ShaderStage};
use crate::render_loop::RenderState;
use crate::shaders;

struct Uniforms<L> {
    projection: Option<L>,
    model_view: Option<L>,
    speed: Option<L>,
    size: Option<L>,
    time: Option<L>,
}

/// The linked fractal program with every location it needs resolved.
///
/// There is exactly one of these per context; it is made current once at
/// link time and never swapped.
pub struct ShaderProgram<B: GraphicsBackend> {
    handle: B::Program,
    vertex_position: u32,
    uniforms: Uniforms<B::UniformLocation>,
}

impl<B: GraphicsBackend> ShaderProgram<B> {
    /// Builds the embedded fractal program.
    pub fn fractal(backend: &B) -> Result<Self> {
        Self::build(backend, shaders::VERTEX_SHADER, shaders::FRAGMENT_SHADER)
    }

    pub fn build(backend: &B, vertex_source: &str, fragment_source: &str) -> Result<Self> {
        let vertex = backend.compile_shader(ShaderStage::Vertex, vertex_source)?;
        let fragment = backend.compile_shader(ShaderStage::Fragment, fragment_source)?;
        let handle = backend.link_program(&vertex, &fragment)?;
        backend.use_program(&handle);

        let vertex_position = backend
            .attrib_location(&handle, shaders::A_VERTEX_POSITION)
            .ok_or(RenderError::MissingAttribute(shaders::A_VERTEX_POSITION))?;
        backend.enable_vertex_attrib_array(vertex_position);

        let uniforms = Uniforms {
            projection: backend.uniform_location(&handle, shaders::U_P_MATRIX),
            model_view: backend.uniform_location(&handle, shaders::U_MV_MATRIX),
            speed: backend.uniform_location(&handle, shaders::U_SPEED),
            size: backend.uniform_location(&handle, shaders::U_SIZE),
            time: backend.uniform_location(&handle, shaders::U_TIME),
        };

        Ok(Self {
            handle,
            vertex_position,
            uniforms,
        })
    }

    pub fn handle(&self) -> &B::Program {
        &self.handle
    }

    pub fn vertex_position(&self) -> u32 {
        self.vertex_position
    }

    /// Uploads all five uniforms from the frame state.
    pub fn set_uniforms(&self, backend: &B, state: &RenderState) {
        let u = &self.uniforms;
        backend.uniform_matrix4(u.projection.as_ref(), &columns(&state.projection));
        backend.uniform_matrix4(u.model_view.as_ref(), &columns(&state.model_view));
        backend.uniform1f(u.speed.as_ref(), state.params.speed);
        backend.uniform1f(u.size.as_ref(), state.params.size);
        backend.uniform1f(u.time.as_ref(), state.clock.elapsed_seconds());
    }
}

fn columns(m: &Mat4) -> [f32; 16] {
    m.to_cols_array()
}
