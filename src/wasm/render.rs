use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, HtmlCanvasElement, Performance, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation,
};

use super::controls::DomControls;
use crate::clock::Clock;
use crate::config::FractalConfig;
use crate::error::{RenderError, Result, ShaderStage};
use crate::gfx::{GraphicsBackend, GraphicsContext};
use crate::render_loop::{FrameScheduler, RenderLoop};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Set up the fractal on `canvas` and hand the loop to `requestAnimationFrame`.
pub fn start(canvas: HtmlCanvasElement, config: &FractalConfig) -> Result<()> {
    let window = window().ok_or_else(|| RenderError::Initialization("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| RenderError::Initialization("no document".into()))?;

    let controls = DomControls::new(document, config);
    controls.write_initial(config.initial_speed_display, config.initial_size_display);

    let gl = acquire(&canvas)?;
    let context = GraphicsContext::new(gl, canvas.width(), canvas.height(), config.clear_color);
    log::info!("WebGL2 context acquired ({}x{})", canvas.width(), canvas.height());
    let mut render_loop = RenderLoop::new(context)?;

    let clock = PerformanceClock(window.performance());

    // `f` holds the animation-frame closure so the scheduler can hand the same
    // callback back to `request_animation_frame` on every frame.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let mut scheduler = AnimationFrame {
        window: window.clone(),
        callback: f.clone(),
    };
    *f.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = render_loop.frame(&mut scheduler, &controls, &clock) {
            log::error!("frame {} failed: {e}", render_loop.frames());
        }
    }) as Box<dyn FnMut()>));

    AnimationFrame { window, callback: f }.request_frame()
}

fn acquire(canvas: &HtmlCanvasElement) -> Result<GL> {
    canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        .ok_or_else(|| RenderError::Initialization("WebGL2 not supported".into()))
}

struct AnimationFrame {
    window: web_sys::Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrame {
    fn request_frame(&mut self) -> Result<()> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| RenderError::Scheduling("frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(|_| ())
            .map_err(|e| RenderError::Scheduling(format!("{e:?}")))
    }
}

struct PerformanceClock(Option<Performance>);

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.0 {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

impl GraphicsBackend for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .create_shader(kind)
            .ok_or(RenderError::Allocation("shader"))?;
        self.shader_source(&shader, source);
        self.compile_shader(&shader);

        let ok = self
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(shader)
        } else {
            let log = self.get_shader_info_log(&shader).unwrap_or_default();
            self.delete_shader(Some(&shader));
            Err(RenderError::Compilation { stage, log })
        }
    }

    fn link_program(&self, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
        let program = self
            .create_program()
            .ok_or(RenderError::Allocation("program"))?;
        self.attach_shader(&program, vertex);
        self.attach_shader(&program, fragment);
        self.link_program(&program);

        let ok = self
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(program)
        } else {
            let log = self.get_program_info_log(&program).unwrap_or_default();
            self.delete_program(Some(&program));
            Err(RenderError::Link(log))
        }
    }

    fn use_program(&self, program: &WebGlProgram) {
        GL::use_program(self, Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn create_static_buffer(&self, data: &[f32]) -> Result<WebGlBuffer> {
        let buffer = self.create_buffer().ok_or(RenderError::Allocation("vertex buffer"))?;
        self.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let array = js_sys::Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Ok(buffer)
    }

    fn bind_array_buffer(&self, buffer: &WebGlBuffer) {
        self.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index);
    }

    fn vertex_attrib_pointer(&self, index: u32, size: i32) {
        self.vertex_attrib_pointer_with_i32(index, size, GL::FLOAT, false, 0, 0);
    }

    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        GL::clear_color(self, r, g, b, a);
    }

    fn enable_depth_test(&self) {
        self.enable(GL::DEPTH_TEST);
    }

    fn viewport(&self, width: i32, height: i32) {
        GL::viewport(self, 0, 0, width, height);
    }

    fn clear(&self) {
        GL::clear(self, GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn uniform_matrix4(&self, location: Option<&WebGlUniformLocation>, columns: &[f32; 16]) {
        self.uniform_matrix4fv_with_f32_array(location, false, columns);
    }

    fn uniform1f(&self, location: Option<&WebGlUniformLocation>, value: f32) {
        GL::uniform1f(self, location, value);
    }

    fn draw_triangle_strip(&self, first: i32, count: i32) {
        self.draw_arrays(GL::TRIANGLE_STRIP, first, count);
    }
}
