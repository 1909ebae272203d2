//! Deadline-bounded fan-out dispatch.
//!
//! The dispatcher owns the deadline signal and the completion tracker: it
//! arms a timer on a child of the root cancellation token, spawns one tracked
//! worker per payload, and blocks until the tracker drains. Worker-level
//! outcomes (cancelled, processed, unrecognized) are aggregated, never
//! escalated as dispatcher errors.

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use fanout_common::error::Result;

use crate::config::DispatchConfig;
use crate::payload::Payload;
use crate::worker::{ProcessedKind, WorkerOutcome, run_worker};

/// Aggregate view of one dispatch-and-wait cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Workers that observed the deadline before their work completed.
    pub cancelled: usize,
    /// Workers that processed a text payload.
    pub processed_text: usize,
    /// Workers that processed an integer payload.
    pub processed_integer: usize,
    /// Workers whose payload kind matched no processing arm.
    pub unrecognized: usize,
    /// Workers whose task failed to yield an outcome (e.g. panicked).
    pub faulted: usize,
}

impl DispatchSummary {
    /// Total number of workers accounted for in this cycle.
    pub fn total(&self) -> usize {
        self.cancelled + self.processed() + self.unrecognized + self.faulted
    }

    /// Number of workers that reached a processed outcome.
    pub fn processed(&self) -> usize {
        self.processed_text + self.processed_integer
    }

    fn record(&mut self, outcome: WorkerOutcome) {
        match outcome {
            WorkerOutcome::Cancelled => self.cancelled += 1,
            WorkerOutcome::Processed(ProcessedKind::Text) => self.processed_text += 1,
            WorkerOutcome::Processed(ProcessedKind::Integer) => self.processed_integer += 1,
            WorkerOutcome::Unrecognized => self.unrecognized += 1,
        }
    }
}

/// Dispatcher for deadline-bounded fan-out cycles.
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher with a validated configuration.
    pub fn new(config: DispatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the dispatch configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Run one dispatch cycle with a dispatcher-owned root signal.
    pub async fn run(&self, payloads: Vec<Payload>) -> DispatchSummary {
        let root = CancellationToken::new();
        self.run_with_root(&root, payloads).await
    }

    /// Run one dispatch cycle under an externally owned root signal.
    ///
    /// The deadline is a child of `root`, so cancelling the root cancels all
    /// workers still waiting at their race. Blocks until every spawned worker
    /// has signalled completion; the deadline's resources are released on
    /// every exit path of this function, and the root is left untouched.
    pub async fn run_with_root(
        &self,
        root: &CancellationToken,
        payloads: Vec<Payload>,
    ) -> DispatchSummary {
        let deadline = root.child_token();
        // Released exactly once when this function exits, on any path.
        let _release = deadline.clone().drop_guard();

        let timer = deadline.clone();
        let timeout = self.config.timeout;
        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(timeout) => timer.cancel(),
                () = timer.cancelled() => {}
            }
        });

        // Each worker is registered with the tracker before it is spawned and
        // releases its tracker token when its future finishes, on any path.
        let tracker = TaskTracker::new();
        let mut handles = Vec::with_capacity(payloads.len());
        for (worker_id, payload) in payloads.into_iter().enumerate() {
            handles.push(tracker.spawn(run_worker(
                deadline.clone(),
                self.config.work_delay,
                worker_id,
                payload,
            )));
        }

        tracker.close();
        tracker.wait().await;
        debug!(workers = handles.len(), "all workers signalled completion");

        // All handles are finished at this point; collecting them cannot block.
        let mut summary = DispatchSummary::default();
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(outcome) => summary.record(outcome),
                Err(err) => {
                    error!(worker_id, error = %err, "worker task failed to yield an outcome");
                    summary.faulted += 1;
                }
            }
        }

        info!(
            cancelled = summary.cancelled,
            processed = summary.processed(),
            unrecognized = summary.unrecognized,
            "dispatch cycle complete"
        );
        summary
    }
}
