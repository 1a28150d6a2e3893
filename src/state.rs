//! Graphics state.
//!
//! This type owns the host context and acts as a forward-gate to the few state
//! operations this crate issues, with a small cache layer over the clear color to
//! prevent issuing the same call with the same parameters.

use crate::api::GlApi;

pub(crate) struct GlState<A: GlApi> {
    api: A,
    // None until the first set; the first set always reaches the host.
    clear_color: Option<[f32; 4]>,
}

impl<A: GlApi> GlState<A> {
    pub(crate) fn new(api: A) -> Self {
        GlState {
            api,
            clear_color: None,
        }
    }

    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    pub(crate) fn set_clear_color(&mut self, color: [f32; 4]) {
        if self.clear_color != Some(color) {
            self.api.set_clear_color(color);
            self.clear_color = Some(color);
        }
    }

    pub(crate) fn clear_color_buffer(&mut self) {
        self.api.clear_color_buffer();
    }
}
