//! A recording test double for the host graphics capability surface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::GlApi;
use crate::shader::ShaderKind;
use crate::Notify;

/// Every host call the double has observed, in order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    SetClearColor([f32; 4]),
    ClearColorBuffer,
    CreateShader(ShaderKind),
    ShaderSource(u32, String),
    CompileShader(u32),
    ShaderCompileStatus(u32),
    ShaderInfoLog(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader(u32, u32),
    LinkProgram(u32),
    ProgramLinkStatus(u32),
    ProgramInfoLog(u32),
    DeleteProgram(u32),
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    next_handle: u32,
    fail_compile: bool,
    fail_link: bool,
    compile_log: String,
    link_log: String,
}

/// Shared recording double. Clone one half into the wrapper under test and keep the
/// other for assertions; handles are fresh integers from a single counter.
#[derive(Clone, Default)]
pub(crate) struct RecordingApi {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent compile-status query fail with the given log.
    pub(crate) fn fail_compile_with(&self, log: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.fail_compile = true;
        inner.compile_log = log.to_owned();
    }

    /// Make every subsequent link-status query fail with the given log.
    pub(crate) fn fail_link_with(&self, log: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.fail_link = true;
        inner.link_log = log.to_owned();
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    /// Drain the recorded calls, so a test can scope assertions to what follows.
    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut self.inner.borrow_mut().calls)
    }

    fn record(&self, call: Call) {
        self.inner.borrow_mut().calls.push(call);
    }

    fn fresh_handle(&self) -> u32 {
        let mut inner = self.inner.borrow_mut();
        inner.next_handle += 1;
        inner.next_handle
    }
}

impl GlApi for RecordingApi {
    type Shader = u32;
    type Program = u32;

    fn set_clear_color(&self, color: [f32; 4]) {
        self.record(Call::SetClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.record(Call::ClearColorBuffer);
    }

    fn create_shader(&self, kind: ShaderKind) -> Result<u32, String> {
        self.record(Call::CreateShader(kind));
        Ok(self.fresh_handle())
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(Call::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.record(Call::ShaderCompileStatus(shader));
        !self.inner.borrow().fail_compile
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.record(Call::ShaderInfoLog(shader));
        self.inner.borrow().compile_log.clone()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        Ok(self.fresh_handle())
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.record(Call::ProgramLinkStatus(program));
        !self.inner.borrow().fail_link
    }

    fn program_info_log(&self, program: u32) -> String {
        self.record(Call::ProgramInfoLog(program));
        self.inner.borrow().link_log.clone()
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }
}

/// A notifier that appends every message to a shared buffer.
pub(crate) fn recording_notify() -> (Rc<RefCell<Vec<String>>>, Notify) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&messages);
    let notify: Notify = Box::new(move |message: &str| sink.borrow_mut().push(message.to_owned()));
    (messages, notify)
}
