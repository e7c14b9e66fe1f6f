use super::GraphicsBackend;
use crate::error::Result;

pub const QUAD_ITEM_SIZE: i32 = 3;
pub const QUAD_VERTEX_COUNT: i32 = 4;

/// Full-viewport quad as a triangle strip.
pub const QUAD_VERTICES: [f32; 12] = [
    1.0, 1.0, 0.0, //
    -1.0, 1.0, 0.0, //
    1.0, -1.0, 0.0, //
    -1.0, -1.0, 0.0, //
];

/// The static quad buffer. Uploaded once and never written again.
pub struct GeometryBuffer<B: GraphicsBackend> {
    buffer: B::Buffer,
    item_size: i32,
    vertex_count: i32,
}

impl<B: GraphicsBackend> GeometryBuffer<B> {
    pub fn upload(backend: &B) -> Result<Self> {
        let buffer = backend.create_static_buffer(&QUAD_VERTICES)?;
        Ok(Self {
            buffer,
            item_size: QUAD_ITEM_SIZE,
            vertex_count: QUAD_VERTEX_COUNT,
        })
    }

    /// Binds the buffer and points `attribute` at it.
    pub fn bind(&self, backend: &B, attribute: u32) {
        backend.bind_array_buffer(&self.buffer);
        backend.vertex_attrib_pointer(attribute, self.item_size);
    }

    pub fn draw(&self, backend: &B) {
        backend.draw_triangle_strip(0, self.vertex_count);
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}
