//! The canvas context wrapper.

use crate::api::GlApi;
use crate::shader::{Program, Shader, ShaderKind};
use crate::state::GlState;
use crate::Context;
#[cfg(wasm)]
use crate::ContextError;

/// User-visible diagnostic channel for compile and link failures.
pub type Notify = Box<dyn Fn(&str)>;

const COMPILE_LOG_PREFIX: &str = "An error occurred compiling the shaders: ";
const LINK_LOG_PREFIX: &str = "Unable to initialize the shader program: ";

const OPAQUE_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A notifier that reports through the blocking browser alert dialog.
#[cfg(wasm)]
pub fn alert_notify() -> Notify {
    Box::new(|message| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    })
}

/// A notifier that reports through the `log` facade at error level.
pub fn log_notify() -> Notify {
    Box::new(|message| log::error!("{}", message))
}

/// Wrapper around one rendering context.
///
/// Holds the context for its whole lifetime and exposes compile and link helpers.
/// Compile and link failures are not returned as errors: the diagnostic log goes to
/// the notification callback and the helper returns `None`, which callers must check
/// for before passing a handle onward. Only context acquisition fails fatally, with
/// [`ContextError`](crate::ContextError).
pub struct GraphicsContext<A: GlApi> {
    state: GlState<A>,
    notify: Notify,
}

impl GraphicsContext<glow::Context> {
    /// Acquire a WebGL context from a canvas and wrap it.
    ///
    /// Diagnostics, including later compile and link logs, are reported through the
    /// browser alert dialog.
    #[cfg(wasm)]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, ContextError> {
        let ctx = Context::from_canvas(canvas)?;
        Ok(Self::from_context(ctx, alert_notify()))
    }

    /// Wrap an already-acquired [`Context`].
    pub fn from_context(ctx: Context, notify: Notify) -> Self {
        Self::new(ctx.glow_context, notify)
    }
}

impl<A: GlApi> GraphicsContext<A> {
    /// Wrap a rendering context.
    ///
    /// Sets the clear color to opaque black and clears the color buffer once before
    /// anything else runs.
    pub fn new(api: A, notify: Notify) -> Self {
        let mut state = GlState::new(api);

        state.set_clear_color(OPAQUE_BLACK);
        state.clear_color_buffer();

        GraphicsContext { state, notify }
    }

    /// Creates a shader of the given kind, uploads the source and compiles it.
    ///
    /// On compile failure the compiler log is surfaced through the notification
    /// callback, the failed shader object is deleted and `None` is returned.
    pub fn compile_shader(&self, kind: ShaderKind, source: &str) -> Option<Shader<A>> {
        let api = self.state.api();

        let handle = match api.create_shader(kind) {
            Ok(handle) => handle,
            Err(log) => {
                self.report(COMPILE_LOG_PREFIX, &log);
                return None;
            }
        };

        api.shader_source(handle, source);
        api.compile_shader(handle);

        if api.shader_compile_status(handle) {
            Some(Shader::new(handle, kind))
        } else {
            let log = api.shader_info_log(handle);
            api.delete_shader(handle);
            self.report(COMPILE_LOG_PREFIX, &log);
            None
        }
    }

    /// Creates a shader of the vertex kind, uploads the source and compiles it.
    pub fn compile_vertex_shader(&self, source: &str) -> Option<Shader<A>> {
        self.compile_shader(ShaderKind::Vertex, source)
    }

    /// Creates a shader of the fragment kind, uploads the source and compiles it.
    pub fn compile_fragment_shader(&self, source: &str) -> Option<Shader<A>> {
        self.compile_shader(ShaderKind::Fragment, source)
    }

    /// Creates a program, attaches the given shaders in order and links them.
    ///
    /// No minimum shader count or stage combination is enforced. On link failure the
    /// linker log is surfaced through the notification callback, the failed program
    /// object is deleted and `None` is returned.
    pub fn link_program(&self, shaders: &[Shader<A>]) -> Option<Program<A>> {
        let api = self.state.api();

        let handle = match api.create_program() {
            Ok(handle) => handle,
            Err(log) => {
                self.report(LINK_LOG_PREFIX, &log);
                return None;
            }
        };

        for shader in shaders {
            api.attach_shader(handle, shader.handle());
        }

        api.link_program(handle);

        if api.program_link_status(handle) {
            Some(Program::new(handle))
        } else {
            let log = api.program_info_log(handle);
            api.delete_program(handle);
            self.report(LINK_LOG_PREFIX, &log);
            None
        }
    }

    /// Delete a shader object previously returned by a compile call.
    pub fn delete_shader(&self, shader: Shader<A>) {
        self.state.api().delete_shader(shader.handle());
    }

    /// Delete a program object previously returned by [`GraphicsContext::link_program`].
    pub fn delete_program(&self, program: Program<A>) {
        self.state.api().delete_program(program.handle());
    }

    /// Set the clear color, skipping the host call when it is already current.
    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.state.set_clear_color(color);
    }

    /// Clear the color buffer with the current clear color.
    pub fn clear(&mut self) {
        self.state.clear_color_buffer();
    }

    fn report(&self, prefix: &str, log: &str) {
        (self.notify)(&format!("{}{}", prefix, log));
    }
}
