use tracing::debug;

use crate::controllers::engine::ports::uniform_sink::UniformSink;

/// Sink for headless sessions: every uniform write becomes a `debug!` event.
#[derive(Debug, Default)]
pub struct TracingUniformSink {
    writes: usize,
}

impl TracingUniformSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total uniform writes received so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl UniformSink for TracingUniformSink {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.writes += 1;
        debug!(uniform = name, value, "set bool");
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.writes += 1;
        debug!(uniform = name, value, "set int");
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.writes += 1;
        debug!(uniform = name, value, "set float");
    }

    fn set_ivec2(&mut self, name: &str, value: [i32; 2]) {
        self.writes += 1;
        debug!(uniform = name, x = value[0], y = value[1], "set ivec2");
    }

    fn set_dvec2(&mut self, name: &str, value: [f64; 2]) {
        self.writes += 1;
        debug!(uniform = name, x = value[0], y = value[1], "set dvec2");
    }

    fn set_vec3_array(&mut self, name: &str, values: &[[f32; 3]]) {
        self.writes += 1;
        debug!(uniform = name, len = values.len(), ?values, "set vec3 array");
    }
}
