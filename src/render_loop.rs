//! The animation state machine: `Ready` after setup, `Running` from the first
//! frame until the surface goes away. There is no stop or pause.

use glam::Mat4;

use crate::clock::{AnimationClock, Clock};
use crate::error::Result;
use crate::gfx::{GeometryBuffer, GraphicsBackend, GraphicsContext, ShaderProgram};
use crate::params::{AnimationParameters, ParameterSource};

/// Requests the next invocation of the frame callback (vsync-driven in the
/// browser).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Ready,
    Running,
}

/// Everything a frame reads or writes, owned by the loop and handed to each
/// step by reference.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub params: AnimationParameters,
    pub clock: AnimationClock,
    pub model_view: Mat4,
    pub projection: Mat4,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            params: AnimationParameters::default(),
            clock: AnimationClock::default(),
            model_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

pub struct RenderLoop<B: GraphicsBackend> {
    context: GraphicsContext<B>,
    program: ShaderProgram<B>,
    geometry: GeometryBuffer<B>,
    state: RenderState,
    phase: LoopPhase,
    frames: u64,
}

impl<B: GraphicsBackend> RenderLoop<B> {
    /// One-shot setup: program, then quad. Any failure aborts startup.
    pub fn new(context: GraphicsContext<B>) -> Result<Self> {
        let program = ShaderProgram::fractal(context.backend())?;
        log::info!("fractal program linked");
        let geometry = GeometryBuffer::upload(context.backend())?;

        Ok(Self {
            context,
            program,
            geometry,
            state: RenderState::default(),
            phase: LoopPhase::Ready,
            frames: 0,
        })
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn context(&self) -> &GraphicsContext<B> {
        &self.context
    }

    /// Runs one frame. The next frame is requested before any drawing so the
    /// animation keeps going even if this body fails.
    ///
    /// The first call moves `Ready -> Running` and fixes the time origin.
    pub fn frame(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        source: &impl ParameterSource,
        clock: &impl Clock,
    ) -> Result<()> {
        let now = clock.now_ms();
        if self.phase == LoopPhase::Ready {
            self.state.clock.start(now);
            self.phase = LoopPhase::Running;
            log::info!("render loop running");
        }
        scheduler.request_frame()?;

        self.state.params.refresh(source);
        self.state.clock.sample(now);
        self.draw();
        self.frames += 1;
        Ok(())
    }

    fn draw(&mut self) {
        let backend = self.context.backend();
        self.context.set_viewport();
        self.context.clear();

        self.state.model_view = Mat4::IDENTITY;
        self.state.projection = Mat4::IDENTITY;

        self.geometry.bind(backend, self.program.vertex_position());
        self.program.set_uniforms(backend, &self.state);
        self.geometry.draw(backend);
    }
}
