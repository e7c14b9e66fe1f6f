#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use julia_wasm::clock::Clock;
use julia_wasm::error::{RenderError, Result, ShaderStage};
use julia_wasm::gfx::GraphicsBackend;
use julia_wasm::params::ParameterSource;
use julia_wasm::render_loop::FrameScheduler;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Compile(ShaderStage),
    Link,
    UseProgram,
    CreateBuffer(Vec<f32>),
    BindBuffer,
    EnableAttrib(u32),
    AttribPointer(u32, i32),
    ClearColor([f32; 4]),
    DepthTest,
    Viewport(i32, i32),
    Clear,
    Matrix(String, [f32; 16]),
    Float(String, f32),
    Draw(i32, i32),
    RequestFrame,
}

/// Records every GL call; optionally fails one startup step.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub no_attribute: bool,
    pub next_buffer: Cell<u32>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GraphicsBackend for RecordingBackend {
    type Shader = ShaderStage;
    type Program = ();
    type Buffer = u32;
    type UniformLocation = String;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<ShaderStage> {
        self.push(Call::Compile(stage));
        if self.fail_compile == Some(stage) {
            return Err(RenderError::Compilation {
                stage,
                log: format!("ERROR: 0:1: syntax error ({} bytes)", source.len()),
            });
        }
        Ok(stage)
    }

    fn link_program(&self, _vertex: &ShaderStage, _fragment: &ShaderStage) -> Result<()> {
        self.push(Call::Link);
        if self.fail_link {
            return Err(RenderError::Link("varying mismatch".into()));
        }
        Ok(())
    }

    fn use_program(&self, _program: &()) {
        self.push(Call::UseProgram);
    }

    fn attrib_location(&self, _program: &(), _name: &str) -> Option<u32> {
        (!self.no_attribute).then_some(0)
    }

    fn uniform_location(&self, _program: &(), name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn create_static_buffer(&self, data: &[f32]) -> Result<u32> {
        self.push(Call::CreateBuffer(data.to_vec()));
        let id = self.next_buffer.get() + 1;
        self.next_buffer.set(id);
        Ok(id)
    }

    fn bind_array_buffer(&self, _buffer: &u32) {
        self.push(Call::BindBuffer);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(Call::EnableAttrib(index));
    }

    fn vertex_attrib_pointer(&self, index: u32, size: i32) {
        self.push(Call::AttribPointer(index, size));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.push(Call::ClearColor(rgba));
    }

    fn enable_depth_test(&self) {
        self.push(Call::DepthTest);
    }

    fn viewport(&self, width: i32, height: i32) {
        self.push(Call::Viewport(width, height));
    }

    fn clear(&self) {
        self.push(Call::Clear);
    }

    fn uniform_matrix4(&self, location: Option<&String>, columns: &[f32; 16]) {
        if let Some(name) = location {
            self.push(Call::Matrix(name.clone(), *columns));
        }
    }

    fn uniform1f(&self, location: Option<&String>, value: f32) {
        if let Some(name) = location {
            self.push(Call::Float(name.clone(), value));
        }
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.push(Call::Draw(first, count));
    }
}

/// Stand-in for the two `<input>` elements.
#[derive(Default)]
pub struct TextControls {
    pub speed: RefCell<Option<String>>,
    pub size: RefCell<Option<String>>,
}

impl TextControls {
    pub fn new(speed: &str, size: &str) -> Self {
        Self {
            speed: RefCell::new(Some(speed.into())),
            size: RefCell::new(Some(size.into())),
        }
    }

    pub fn set(&self, speed: &str, size: &str) {
        *self.speed.borrow_mut() = Some(speed.into());
        *self.size.borrow_mut() = Some(size.into());
    }
}

impl ParameterSource for TextControls {
    fn speed_text(&self) -> Option<String> {
        self.speed.borrow().clone()
    }

    fn size_text(&self) -> Option<String> {
        self.size.borrow().clone()
    }
}

/// Counts frame requests. With a shared call log it also records them next
/// to the GL calls so ordering can be checked.
#[derive(Default)]
pub struct CountingScheduler {
    pub requests: usize,
    pub log: Option<Rc<RefCell<Vec<Call>>>>,
    pub fail: bool,
}

impl CountingScheduler {
    pub fn sharing(backend: &RecordingBackend) -> Self {
        Self {
            log: Some(backend.calls.clone()),
            ..Self::default()
        }
    }
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) -> Result<()> {
        self.requests += 1;
        if let Some(log) = &self.log {
            log.borrow_mut().push(Call::RequestFrame);
        }
        if self.fail {
            return Err(RenderError::Scheduling("document hidden".into()));
        }
        Ok(())
    }
}

pub struct ManualClock(pub Cell<f64>);

impl ManualClock {
    pub fn at(ms: f64) -> Self {
        Self(Cell::new(ms))
    }

    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}

pub fn float(calls: &[Call], name: &str) -> Option<f32> {
    calls.iter().rev().find_map(|c| match c {
        Call::Float(n, v) if n == name => Some(*v),
        _ => None,
    })
}
