//! Full processing demo
//!
//! Same payloads as the deadline demo, but with a 1000 ms deadline that
//! outlives the 500 ms simulated work: the text and integer payloads reach
//! their processing arms and the boolean is reported as unrecognized.

use std::time::Duration;

use fanout_core::{DispatchConfig, Dispatcher, Payload};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let dispatcher = Dispatcher::new(DispatchConfig::new(
        Duration::from_millis(1000),
        Duration::from_millis(500),
    ))?;

    let payloads = vec![
        Payload::from("Alpha"),
        Payload::from(42i64),
        Payload::from(true),
    ];

    let summary = dispatcher.run(payloads).await;
    info!(
        processed_text = summary.processed_text,
        processed_integer = summary.processed_integer,
        unrecognized = summary.unrecognized,
        "all workers completed"
    );

    println!("Program exit");
    Ok(())
}
