//! The host graphics capability surface.

use std::fmt;

use glow::HasContext;

use crate::shader::ShaderKind;

/// The subset of the host graphics API this crate relies on.
///
/// Production code goes through the [`glow::Context`] implementation below, which
/// wraps the raw unsafe calls; a test double can implement the same trait and be
/// substituted without touching the wrapper's logic.
pub trait GlApi {
    /// Opaque shader object handle.
    type Shader: Copy + fmt::Debug + PartialEq;
    /// Opaque program object handle.
    type Program: Copy + fmt::Debug + PartialEq;

    fn set_clear_color(&self, color: [f32; 4]);
    fn clear_color_buffer(&self);

    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
}

// Several trait methods share their name with the `HasContext` method they forward
// to, so those calls are written in qualified form.
impl GlApi for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn set_clear_color(&self, color: [f32; 4]) {
        unsafe { self.clear_color(color[0], color[1], color[2], color[3]) }
    }

    fn clear_color_buffer(&self) {
        unsafe { self.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn create_shader(&self, kind: ShaderKind) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, glow_shader_kind(kind)) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }
}

fn glow_shader_kind(kind: ShaderKind) -> u32 {
    match kind {
        ShaderKind::Vertex => glow::VERTEX_SHADER,
        ShaderKind::Fragment => glow::FRAGMENT_SHADER,
    }
}
