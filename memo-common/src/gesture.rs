//! Horizontal pan tracking
//!
//! Turns absolute pointer positions into translations relative to where the
//! gesture started. Each `begin` starts a fresh, finite sequence.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanTracker {
    origin: Option<f64>,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64) {
        self.origin = Some(x);
    }

    /// Translation since `begin`, or `None` outside a gesture
    pub fn translation(&self, x: f64) -> Option<f64> {
        self.origin.map(|origin| x - origin)
    }

    pub fn end(&mut self) -> bool {
        self.origin.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}
