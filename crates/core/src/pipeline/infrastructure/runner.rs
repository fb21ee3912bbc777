use crate::pipeline::frame_scheduler::{FrameScheduler, SchedulerState};
use crate::shared::frame::Frame;
use crossbeam_channel::{never, select, Receiver};
use std::time::Duration;

/// How long to wait for an in-flight detection after the frame source
/// closes before abandoning its result.
const DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Single-threaded event loop driving a `FrameScheduler`.
///
/// Frames and detection completions are multiplexed onto one thread,
/// so every scheduler state transition is serialized. The loop exits
/// when the frame source disconnects, draining any detection still in
/// flight before shutting the scheduler down.
pub fn run_pipeline(
    frame_rx: Receiver<Frame>,
    completion_rx: Receiver<crate::pipeline::detection_dispatcher::DetectionOutcome>,
    mut scheduler: FrameScheduler,
) {
    let mut completion_rx = completion_rx;
    loop {
        select! {
            recv(frame_rx) -> msg => match msg {
                Ok(frame) => scheduler.on_frame(frame),
                Err(_) => break,
            },
            recv(completion_rx) -> msg => match msg {
                Ok(outcome) => scheduler.on_detection_complete(outcome),
                // Worker gone; stop polling a dead channel.
                Err(_) => completion_rx = never(),
            },
        }
    }

    if scheduler.state() == SchedulerState::Detecting {
        match completion_rx.recv_timeout(DRAIN_TIMEOUT) {
            Ok(outcome) => scheduler.on_detection_complete(outcome),
            Err(_) => log::warn!("abandoning in-flight detection at shutdown"),
        }
    }
    scheduler.shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::region_detector::RegionDetector;
    use crate::detection::infrastructure::cached_face_detector::CachedFaceDetector;
    use crate::detection::infrastructure::cached_text_recognizer::CachedTextRecognizer;
    use crate::masking::infrastructure::solid_fill_mask_renderer::SolidFillMaskRenderer;
    use crate::pipeline::detection_dispatcher::DetectionDispatcher;
    use crate::pipeline::display_sink::NullDisplaySink;
    use crate::pipeline::frame_scheduler::SchedulerConfig;
    use crate::pipeline::infrastructure::threaded_dispatcher::ThreadedDetectionDispatcher;
    use crate::pipeline::shared_frame_buffer::SharedFrameBuffer;
    use crate::shared::region::Region;
    use crossbeam_channel::bounded;
    use std::collections::HashMap;
    use std::thread;

    #[test]
    fn test_pipeline_runs_to_completion_and_publishes() {
        let mut faces = HashMap::new();
        for seq in 1..=9u64 {
            faces.insert(seq, vec![Region::new(2, 2, 6, 6)]);
        }
        let detector = RegionDetector::new(
            Box::new(CachedFaceDetector::new(faces)),
            Box::new(CachedTextRecognizer::new(HashMap::new())),
        );
        let dispatcher = ThreadedDetectionDispatcher::new(detector);
        let completions = dispatcher.completions();

        let buffer = SharedFrameBuffer::new();
        let scheduler = FrameScheduler::new(
            SchedulerConfig::new(3).unwrap(),
            Box::new(dispatcher),
            Box::new(SolidFillMaskRenderer::default()),
            buffer.clone(),
            Box::new(NullDisplaySink),
        );

        let (frame_tx, frame_rx) = bounded(4);
        let loop_thread = thread::spawn(move || run_pipeline(frame_rx, completions, scheduler));

        for seq in 1..=9u64 {
            frame_tx
                .send(Frame::new(vec![200u8; 32 * 32 * 3], 32, 32, 3, seq))
                .unwrap();
        }
        drop(frame_tx);
        loop_thread.join().unwrap();

        // Shutdown clears the buffer; the loop must have exited cleanly.
        assert!(buffer.current().is_none());
    }
}
