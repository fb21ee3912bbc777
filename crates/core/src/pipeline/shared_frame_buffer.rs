use std::sync::{Arc, Mutex};

use crate::shared::masked_frame::MaskedFrame;

/// Thread-safe holder of the last processed frame.
///
/// The critical section guards a single `Arc` swap, never a pixel
/// copy, so a reader always observes either the previous complete
/// frame or the next complete one.
#[derive(Clone, Default)]
pub struct SharedFrameBuffer {
    inner: Arc<Mutex<Option<Arc<MaskedFrame>>>>,
}

impl SharedFrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held frame, returning the shared handle so the
    /// caller can keep using it without re-reading the buffer.
    pub fn publish(&self, frame: MaskedFrame) -> Arc<MaskedFrame> {
        let shared = Arc::new(frame);
        let mut slot = self.inner.lock().expect("frame buffer lock poisoned");
        *slot = Some(shared.clone());
        shared
    }

    /// The most recently published frame, if any.
    pub fn current(&self) -> Option<Arc<MaskedFrame>> {
        self.inner.lock().expect("frame buffer lock poisoned").clone()
    }

    /// Drops the held frame. Used at pipeline shutdown.
    pub fn clear(&self) {
        let mut slot = self.inner.lock().expect("frame buffer lock poisoned");
        *slot = None;
    }
}
