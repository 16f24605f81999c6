use serde::Serialize;

/// Cross-origin embedding refusal cannot be observed directly, so a fixed
/// delay without a load signal is used as a heuristic proxy for failure.
pub const PREVIEW_HINT_DELAY_MS: u64 = 1_200;

/// State of the inline preview panel. The generation counter invalidates
/// load and timeout callbacks left over from a previous link: reopening or
/// closing bumps it, and callbacks carrying a stale generation are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewViewer {
    visible: bool,
    url: Option<String>,
    loading: bool,
    hint_shown: bool,
    generation: u64,
}

impl PreviewViewer {
    /// Starts a new preview and returns the generation the caller must pass
    /// back from its load and timeout callbacks.
    pub fn open(&mut self, url: impl Into<String>) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.url = Some(url.into());
        self.loading = true;
        self.hint_shown = false;
        self.generation
    }

    /// Frame load signal. Returns false for stale generations. A late load
    /// after the hint deadline does not retract an already shown hint.
    pub fn frame_loaded(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.loading = false;
        true
    }

    /// Hint-deadline expiry. Returns true when the hint should be revealed:
    /// the generation is current and the frame has not signaled load yet.
    pub fn hint_deadline_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible || !self.loading {
            return false;
        }
        self.hint_shown = true;
        true
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.visible = false;
        self.url = None;
        self.loading = false;
        self.hint_shown = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
