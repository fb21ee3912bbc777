use crate::detection::domain::region_detector::sensitive_regions;
use crate::masking::domain::mask_renderer::MaskRenderer;
use crate::pipeline::detection_dispatcher::{DetectionDispatcher, DetectionJob, DetectionOutcome};
use crate::pipeline::display_sink::DisplaySink;
use crate::pipeline::shared_frame_buffer::SharedFrameBuffer;
use crate::shared::frame::Frame;
use crate::shared::masked_frame::MaskedFrame;

pub const DEFAULT_PROCESS_EVERY_N: usize = 3;

/// Scheduler configuration, validated at construction.
///
/// `process_every_n` is private so a zero interval (which would make
/// the Nth-frame modulo panic) cannot be built; it only enters through
/// the checked constructor.
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Run full detection on every Nth frame; other frames reuse the
    /// cached masked output.
    process_every_n: usize,
    /// When false, frames pass through unmasked.
    pub privacy_enabled: bool,
}

impl SchedulerConfig {
    pub fn new(process_every_n: usize) -> Result<Self, &'static str> {
        if process_every_n < 1 {
            return Err("process_every_n must be >= 1");
        }
        Ok(Self {
            process_every_n,
            privacy_enabled: true,
        })
    }

    pub fn process_every_n(&self) -> usize {
        self.process_every_n
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            process_every_n: DEFAULT_PROCESS_EVERY_N,
            privacy_enabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// No detection in flight.
    Idle,
    /// A detection pass is outstanding; incoming frames are dropped,
    /// never queued.
    Detecting,
}

/// Orchestration core of the pipeline.
///
/// Receives frames at arbitrary cadence, decides which go through full
/// detection versus cached reuse, enforces the
/// at-most-one-outstanding-detection invariant, and publishes the
/// latest finished frame. All methods are called from one event-loop
/// thread, so state transitions are serialized; the only concurrent
/// actor is the detection worker behind the dispatcher, reached purely
/// through channels.
///
/// Cancellation is cooperative: an in-flight detection cannot be
/// aborted, but its result is tagged with a generation counter and
/// discarded if the scheduler has moved on by the time it lands.
pub struct FrameScheduler {
    dispatcher: Box<dyn DetectionDispatcher>,
    renderer: Box<dyn MaskRenderer>,
    buffer: SharedFrameBuffer,
    sink: Box<dyn DisplaySink>,
    process_every_n: u64,
    privacy_enabled: bool,
    state: SchedulerState,
    frame_count: u64,
    generation: u64,
    last_published_generation: u64,
}

impl FrameScheduler {
    pub fn new(
        config: SchedulerConfig,
        dispatcher: Box<dyn DetectionDispatcher>,
        renderer: Box<dyn MaskRenderer>,
        buffer: SharedFrameBuffer,
        sink: Box<dyn DisplaySink>,
    ) -> Self {
        Self {
            dispatcher,
            renderer,
            buffer,
            sink,
            process_every_n: config.process_every_n as u64,
            privacy_enabled: config.privacy_enabled,
            state: SchedulerState::Idle,
            frame_count: 0,
            generation: 0,
            last_published_generation: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn buffer(&self) -> &SharedFrameBuffer {
        &self.buffer
    }

    /// Toggles masking. Disabled mode presents raw frames and issues no
    /// detections; the frame counter keeps running.
    pub fn set_privacy_enabled(&mut self, enabled: bool) {
        if self.privacy_enabled != enabled {
            log::info!("privacy masking {}", if enabled { "enabled" } else { "disabled" });
        }
        self.privacy_enabled = enabled;
    }

    /// Ingests one captured frame.
    ///
    /// The frame counter increments on every call, whatever happens
    /// next. Malformed (zero-area) frames are dropped. Every Nth frame
    /// starts a detection pass when none is outstanding; all other
    /// frames redisplay the cached masked output without re-rendering.
    pub fn on_frame(&mut self, frame: Frame) {
        self.frame_count += 1;

        if !frame.is_valid() {
            log::warn!("dropping invalid frame (sequence {})", frame.sequence());
            return;
        }

        if !self.privacy_enabled {
            self.sink.present(&frame);
            return;
        }

        let due = self.frame_count % self.process_every_n == 0;

        if due && self.state == SchedulerState::Idle {
            self.generation += 1;
            let job = DetectionJob {
                frame,
                generation: self.generation,
            };
            match self.dispatcher.submit(job) {
                Ok(()) => {
                    self.state = SchedulerState::Detecting;
                    return;
                }
                // Failed dispatch falls through to the cached frame so
                // the display does not skip a beat.
                Err(e) => log::warn!("detection dispatch failed: {e}"),
            }
        } else if due {
            // Still detecting: dropped, not queued. Bounded memory wins
            // over freshness here.
            log::debug!(
                "frame {} dropped: detection pass {} still in flight",
                frame.sequence(),
                self.generation
            );
        }
        self.republish_cached();
    }

    /// Handles a finished detection pass.
    ///
    /// Stale results (generation no longer current, or older than the
    /// frame already on display) are discarded unpublished.
    pub fn on_detection_complete(&mut self, outcome: DetectionOutcome) {
        self.state = SchedulerState::Idle;

        if outcome.generation != self.generation
            || outcome.generation <= self.last_published_generation
        {
            log::debug!(
                "discarding stale detection result (generation {} vs current {})",
                outcome.generation,
                self.generation
            );
            return;
        }

        if !self.privacy_enabled {
            // Display is already showing raw passthrough.
            log::debug!("discarding detection result: privacy disabled mid-flight");
            return;
        }

        let regions = sensitive_regions(&outcome.items, &outcome.frame);
        if !regions.is_empty() {
            log::debug!(
                "masking {} sensitive regions in frame {}",
                regions.len(),
                outcome.frame.sequence()
            );
        }

        // Empty region list still publishes: the renderer returns a
        // pixel-identical copy, which is the documented passthrough
        // behavior on total detection failure.
        let rendered = self.renderer.apply(&outcome.frame, &regions);
        let masked = MaskedFrame {
            frame: rendered,
            regions,
            source_sequence: outcome.frame.sequence(),
            generation: outcome.generation,
        };

        self.last_published_generation = outcome.generation;
        let published = self.buffer.publish(masked);
        self.sink.present(&published.frame);
    }

    /// Best-effort cancellation: advances the generation so any
    /// in-flight result is discarded on arrival, and drops the cached
    /// frame. The worker itself winds down when the dispatcher is
    /// dropped.
    pub fn shutdown(&mut self) {
        self.generation += 1;
        self.state = SchedulerState::Idle;
        self.buffer.clear();
        log::info!("frame scheduler shut down after {} frames", self.frame_count);
    }

    fn republish_cached(&mut self) {
        match self.buffer.current() {
            Some(masked) => self.sink.present(&masked.frame),
            // Nothing processed yet; skip rather than leak an unmasked frame.
            None => log::trace!("no cached frame to republish"),
        }
    }
}
