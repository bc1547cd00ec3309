//! Redraw gating for the terminal loop.
//!
//! A frame is drawn as soon as anything visible changes. With nothing changing
//! (paused, round over, idle menu) the loop still refreshes once per interval
//! so a terminal that dropped output recovers on its own.

/// Default idle refresh interval.
pub const IDLE_REFRESH_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(IDLE_REFRESH_MS)
    }
}

impl RenderThrottle {
    pub fn new(min_idle_interval_ms: u64) -> Self {
        Self {
            min_idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to draw a frame whose visible content hashes to `fingerprint`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_idle_interval_ms;
        if !changed && !stale {
            return false;
        }
        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Force the next call to render (terminal resize, mode switch).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_renders() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 42));
    }

    #[test]
    fn invalidate_forces_redraw() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
        assert!(!t.should_render(10, 1));
        t.invalidate();
        assert!(t.should_render(20, 1));
    }
}
