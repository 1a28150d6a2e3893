//! Shader and program handles.

use std::fmt;

use crate::api::GlApi;

/// The kind of a shader stage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShaderKind {
    /// Vertex shader.
    Vertex,
    /// Fragment shader.
    Fragment,
}

/// A compiled shader object, tagged with the kind it was compiled as.
///
/// Ownership of the underlying object passes to whoever receives the handle; the
/// wrapper does not track it afterwards. Dispose of it through
/// `GraphicsContext::delete_shader` once it is no longer needed.
pub struct Shader<A: GlApi> {
    handle: A::Shader,
    kind: ShaderKind,
}

impl<A: GlApi> Shader<A> {
    pub(crate) fn new(handle: A::Shader, kind: ShaderKind) -> Self {
        Shader { handle, kind }
    }

    /// The raw host handle.
    pub fn handle(&self) -> A::Shader {
        self.handle
    }

    /// The kind this shader was compiled as.
    pub fn kind(&self) -> ShaderKind {
        self.kind
    }
}

impl<A: GlApi> Clone for Shader<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: GlApi> Copy for Shader<A> {}

impl<A: GlApi> PartialEq for Shader<A> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.kind == other.kind
    }
}

impl<A: GlApi> fmt::Debug for Shader<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Shader")
            .field("handle", &self.handle)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A linked shader program object.
///
/// Ownership passes to the caller on success; dispose of it through
/// `GraphicsContext::delete_program`.
pub struct Program<A: GlApi> {
    handle: A::Program,
}

impl<A: GlApi> Program<A> {
    pub(crate) fn new(handle: A::Program) -> Self {
        Program { handle }
    }

    /// The raw host handle.
    pub fn handle(&self) -> A::Program {
        self.handle
    }
}

impl<A: GlApi> Clone for Program<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: GlApi> Copy for Program<A> {}

impl<A: GlApi> PartialEq for Program<A> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<A: GlApi> fmt::Debug for Program<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Program")
            .field("handle", &self.handle)
            .finish()
    }
}
