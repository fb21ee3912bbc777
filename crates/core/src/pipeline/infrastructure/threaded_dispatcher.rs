use crate::detection::domain::region_detector::RegionDetector;
use crate::pipeline::detection_dispatcher::{DetectionDispatcher, DetectionJob, DetectionOutcome};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Runs a `RegionDetector` on a dedicated worker thread.
///
/// Both channels are bounded to one slot; combined with the
/// scheduler's one-outstanding rule there is never more than a single
/// job or result in transit, so `submit` never blocks in practice.
pub struct ThreadedDetectionDispatcher {
    job_tx: Option<Sender<DetectionJob>>,
    completion_rx: Receiver<DetectionOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadedDetectionDispatcher {
    pub fn new(mut detector: RegionDetector) -> Self {
        let (job_tx, job_rx) = bounded::<DetectionJob>(1);
        let (completion_tx, completion_rx) = bounded::<DetectionOutcome>(1);

        let worker = thread::spawn(move || {
            for job in job_rx {
                let items = detector.detect_regions(&job.frame);
                let outcome = DetectionOutcome {
                    frame: job.frame,
                    items,
                    generation: job.generation,
                };
                if completion_tx.send(outcome).is_err() {
                    // Receiver side gone; nothing left to report to.
                    break;
                }
            }
            log::debug!("detection worker exiting");
        });

        Self {
            job_tx: Some(job_tx),
            completion_rx,
            worker: Some(worker),
        }
    }
}

impl DetectionDispatcher for ThreadedDetectionDispatcher {
    fn submit(&mut self, job: DetectionJob) -> Result<(), Box<dyn std::error::Error>> {
        match &self.job_tx {
            Some(tx) => {
                tx.send(job)?;
                Ok(())
            }
            None => Err("detection dispatcher already shut down".into()),
        }
    }

    fn completions(&self) -> Receiver<DetectionOutcome> {
        self.completion_rx.clone()
    }
}

impl Drop for ThreadedDetectionDispatcher {
    fn drop(&mut self) {
        // Closing the job channel ends the worker's receive loop.
        self.job_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("detection worker panicked during shutdown");
            }
        }
    }
}
