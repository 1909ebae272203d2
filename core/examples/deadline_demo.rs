//! Deadline-driven cancellation demo
//!
//! Dispatches three heterogeneous payloads under a 200 ms deadline while each
//! worker simulates 500 ms of work, so every worker observes cancellation at
//! its race instead of reaching the processing dispatch.

use std::time::Duration;

use fanout_core::{DispatchConfig, Dispatcher, Payload};
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let root = CancellationToken::new();
    let dispatcher = Dispatcher::new(DispatchConfig::new(
        Duration::from_millis(200),
        Duration::from_millis(500),
    ))?;

    let payloads = vec![
        Payload::from("Alpha"),
        Payload::from(42i64),
        Payload::from(true),
    ];

    let summary = dispatcher.run_with_root(&root, payloads).await;
    info!(
        cancelled = summary.cancelled,
        processed = summary.processed(),
        "all workers completed"
    );

    println!("Program exit");
    Ok(())
}
