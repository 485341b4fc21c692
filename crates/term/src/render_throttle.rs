//! Skips redraws when nothing visible has changed.
//!
//! The board only changes on clicks, countdown seconds and round transitions,
//! so most 16ms frames are identical. While confetti falls every frame differs
//! and the throttle steps aside.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    /// Upper bound between redraws of an unchanged frame.
    keepalive_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(keepalive_ms: u64) -> Self {
        Self {
            keepalive_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Forget the last frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders when animating, on the first frame, whenever the fingerprint
    /// changes, and otherwise at most once per keepalive interval.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = !self.has_rendered
            || animating
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.keepalive_ms;

        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}
