//! Canvas graphics context helper for [glow].
//!
//! This crate wraps a rendering context acquired from an HTML canvas (or a native GL
//! loader) and provides convenience methods to compile shader stages and link them
//! into shader programs. Compile and link diagnostics are surfaced through an
//! injected notification callback rather than a structured error; see
//! [`GraphicsContext`].
//!
//! [glow]: https://github.com/grovesNL/glow

use std::fmt;

mod api;
mod context;
mod shader;
mod state;

#[cfg(test)]
pub(crate) mod test_api;

use glow::Context as GlowContext;

pub use api::GlApi;
#[cfg(wasm)]
pub use context::alert_notify;
pub use context::{log_notify, GraphicsContext, Notify};
pub use shader::{Program, Shader, ShaderKind};

/// The context kind requested from a canvas. Fixed; there is no fallback kind.
#[cfg(wasm)]
const WEBGL_CONTEXT_KIND: &str = "webgl";

/// The graphics context which must be provided to create a [`GraphicsContext`]
pub struct Context {
    pub(crate) glow_context: GlowContext,
}

impl Context {
    /// Acquire a WebGL context from a canvas element.
    ///
    /// A canvas that yields no context fails with [`ContextError::Unavailable`];
    /// there is no retry and no fallback context kind.
    #[cfg(wasm)]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, ContextError> {
        use wasm_bindgen::JsCast;

        let webgl = canvas
            .get_context(WEBGL_CONTEXT_KIND)
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<web_sys::WebGlRenderingContext>().ok())
            .ok_or(ContextError::Unavailable)?;

        log::debug!("acquired {} context from canvas", WEBGL_CONTEXT_KIND);

        Ok(Self::from_webgl1_context(webgl))
    }

    /// Create a native context from a GL loader function
    #[cfg(not(wasm))]
    pub unsafe fn from_loader_function<F>(loader_function: F) -> Self
    where
        F: FnMut(&str) -> *const std::os::raw::c_void,
    {
        Self {
            glow_context: GlowContext::from_loader_function(loader_function),
        }
    }

    /// Create a WebGL 1 context
    #[cfg(wasm)]
    pub fn from_webgl1_context(context: web_sys::WebGlRenderingContext) -> Self {
        Self {
            glow_context: GlowContext::from_webgl1_context(context),
        }
    }

    /// Create a WebGL 2 context
    #[cfg(wasm)]
    pub fn from_webgl2_context(context: web_sys::WebGl2RenderingContext) -> Self {
        Self {
            glow_context: GlowContext::from_webgl2_context(context),
        }
    }
}

/// An error that might happen when acquiring a rendering context.
///
/// This is the fatal construction-time channel: acquisition either succeeds or the
/// instance is never created. Compile and link failures travel through the
/// notification callback instead.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContextError {
    /// The canvas did not yield a rendering context.
    Unavailable,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            ContextError::Unavailable => f.write_str(
                "unable to initialize WebGL; your browser or machine may not support it",
            ),
        }
    }
}

impl std::error::Error for ContextError {}
