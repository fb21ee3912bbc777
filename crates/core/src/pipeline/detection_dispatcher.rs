use crossbeam_channel::Receiver;

use crate::detection::domain::detected_item::DetectedItem;
use crate::shared::frame::Frame;

/// One detection pass, tagged with the scheduler generation active when
/// it was issued.
#[derive(Debug)]
pub struct DetectionJob {
    pub frame: Frame,
    pub generation: u64,
}

/// Result of a detection pass. Carries the original frame back so the
/// scheduler can render the mask against the exact pixels that were
/// analyzed.
#[derive(Debug)]
pub struct DetectionOutcome {
    pub frame: Frame,
    pub items: Vec<DetectedItem>,
    pub generation: u64,
}

/// Port through which the scheduler hands frames to the detection
/// worker context.
///
/// The scheduler's state machine guarantees at most one job is
/// outstanding; implementations may rely on that. Completions are
/// delivered over a channel so the event loop can select on them
/// alongside incoming frames, keeping all state transitions on one
/// thread.
pub trait DetectionDispatcher: Send {
    /// Hands a job to the worker. Called only while no job is in flight.
    fn submit(&mut self, job: DetectionJob) -> Result<(), Box<dyn std::error::Error>>;

    /// A handle to the completion channel (crossbeam receivers are
    /// cheaply cloneable).
    fn completions(&self) -> Receiver<DetectionOutcome>;
}
