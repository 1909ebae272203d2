//! Worker logic for a single payload.
//!
//! Each worker runs once, concurrently with its siblings: it probes the
//! payload, races the simulated work against the shared deadline, and
//! dispatches over the payload kind if the work finishes first.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::payload::Payload;

/// Terminal outcome of one worker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// The shared deadline fired before the simulated work completed.
    Cancelled,
    /// The payload was processed as one of the recognized kinds.
    Processed(ProcessedKind),
    /// No processing arm matches the payload kind. Reported, not an error;
    /// the worker completes normally.
    Unrecognized,
}

/// Recognized processing paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessedKind {
    Text,
    Integer,
}

/// Process a single payload, racing the simulated work against the shared
/// deadline.
///
/// Cancellation is cooperative and observed only at the race: a worker that
/// wins the race commits to processing and is not interrupted. If both sides
/// become ready at the same instant, either branch may win.
pub(crate) async fn run_worker(
    deadline: CancellationToken,
    work_delay: Duration,
    worker_id: usize,
    payload: Payload,
) -> WorkerOutcome {
    // Advisory probe only; processing below does not depend on it.
    if let Some(text) = payload.as_text() {
        debug!(worker_id, len = text.len(), "checking string length");
    }

    tokio::select! {
        () = deadline.cancelled() => {
            info!(worker_id, payload = %payload, "deadline reached, processing cancelled");
            WorkerOutcome::Cancelled
        }
        () = sleep(work_delay) => process(worker_id, &payload),
    }
}

/// Committal dispatch over the payload kind.
fn process(worker_id: usize, payload: &Payload) -> WorkerOutcome {
    match payload {
        Payload::Text(value) => {
            info!(worker_id, value = %value, "processed string payload");
            WorkerOutcome::Processed(ProcessedKind::Text)
        }
        Payload::Integer(value) => {
            info!(worker_id, value, "processed integer payload");
            WorkerOutcome::Processed(ProcessedKind::Integer)
        }
        other => {
            warn!(worker_id, kind = other.kind(), "unrecognized payload kind");
            WorkerOutcome::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_work_completes() {
        let deadline = CancellationToken::new();
        deadline.cancel();

        let outcome = run_worker(deadline, ms(500), 0, Payload::from("Alpha")).await;
        assert_eq!(outcome, WorkerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_processes_as_string() {
        let deadline = CancellationToken::new();
        let outcome = run_worker(deadline, ms(500), 0, Payload::from("Alpha")).await;
        assert_eq!(outcome, WorkerOutcome::Processed(ProcessedKind::Text));
    }

    #[tokio::test(start_paused = true)]
    async fn test_integer_processes_as_integer() {
        let deadline = CancellationToken::new();
        let outcome = run_worker(deadline, ms(500), 0, Payload::from(42i64)).await;
        assert_eq!(outcome, WorkerOutcome::Processed(ProcessedKind::Integer));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_kinds_are_unrecognized() {
        for payload in [
            Payload::from(true),
            Payload::from(1.5f64),
            Payload::from(vec![1u8, 2, 3]),
        ] {
            let deadline = CancellationToken::new();
            let outcome = run_worker(deadline, ms(500), 0, payload).await;
            assert_eq!(outcome, WorkerOutcome::Unrecognized);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_does_not_alter_processing() {
        // The text probe is observational: re-running the same payload yields
        // the same outcome, and non-text payloads are unaffected by it.
        for payload in [
            Payload::from("Alpha"),
            Payload::from(7i64),
            Payload::from(false),
        ] {
            let first = run_worker(CancellationToken::new(), ms(500), 0, payload.clone()).await;
            let second = run_worker(CancellationToken::new(), ms(500), 0, payload).await;
            assert_eq!(first, second);
        }
    }
}
