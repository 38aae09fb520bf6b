use std::time::Instant;

/// Reports how long the enclosing scope took, at debug level, when dropped.
pub struct StopWatch {
    instant: Instant,
    name: &'static str
}

impl StopWatch {
    pub fn named(name: &'static str) -> Self {
        Self { name, instant: Instant::now() }
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.instant.elapsed().as_secs_f32() * 1000.0
    }
}

impl Drop for StopWatch {
    fn drop(&mut self) {
        tracing::debug!(scope = self.name, elapsed_ms = self.elapsed_ms(), "scope finished");
    }
}
