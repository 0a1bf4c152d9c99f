// Chunk: docs/chunks/content_tab_bar - Deferred tab layout
//!
//! One-shot work deferred to the next animation frame.
//!
//! Measuring tabs is the expensive part of a layout, so requests made during
//! one event batch are coalesced into a single pass that runs when the host
//! delivers the next frame. `FrameTask` is the bookkeeping for that: the
//! owner schedules it, the frame callback fires it, and disposal cancels it
//! for good.

/// State of a [`FrameTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FrameState {
    #[default]
    Idle,
    Pending,
    Disposed,
}

/// A cancelable task that runs at most once per frame.
#[derive(Debug, Clone, Default)]
pub struct FrameTask {
    state: FrameState,
}

impl FrameTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a run on the next frame.
    ///
    /// Returns `true` if this call scheduled the task, `false` if it was
    /// already pending or the task has been disposed.
    pub fn schedule(&mut self) -> bool {
        match self.state {
            FrameState::Idle => {
                self.state = FrameState::Pending;
                true
            }
            FrameState::Pending | FrameState::Disposed => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == FrameState::Pending
    }

    pub fn is_disposed(&self) -> bool {
        self.state == FrameState::Disposed
    }

    /// Consumes a pending run. Call from the frame callback; returns `true`
    /// if the task should run now.
    pub fn fire(&mut self) -> bool {
        if self.state == FrameState::Pending {
            self.state = FrameState::Idle;
            true
        } else {
            false
        }
    }

    /// Drops a pending run without running it.
    pub fn cancel(&mut self) {
        if self.state == FrameState::Pending {
            self.state = FrameState::Idle;
        }
    }

    /// Cancels any pending run and refuses all future scheduling.
    pub fn dispose(&mut self) {
        self.state = FrameState::Disposed;
    }
}
