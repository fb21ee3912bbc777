use crate::shared::frame::Frame;

/// Output surface for finished frames.
///
/// `present` is fire-and-forget: the pipeline calls it once per
/// completed iteration (freshly masked, reused from cache, or raw
/// passthrough when privacy is disabled) and does not wait on the
/// display.
pub trait DisplaySink: Send {
    fn present(&mut self, frame: &Frame);
}

/// Sink that discards every frame. Used where only the shared frame
/// buffer matters (readers poll it directly) and in tests.
pub struct NullDisplaySink;

impl DisplaySink for NullDisplaySink {
    fn present(&mut self, _frame: &Frame) {}
}
