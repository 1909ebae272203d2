//! Fanout Core - deadline-bounded fan-out dispatch
//!
//! This is the core module of the Fanout project, providing a minimal
//! fire-and-join concurrent executor: a dispatcher fans out one worker per
//! heterogeneous payload under a single shared deadline and waits until every
//! worker has signalled completion.

pub mod config;
pub mod dispatcher;
pub mod payload;
pub mod worker;

pub use config::DispatchConfig;
pub use dispatcher::{DispatchSummary, Dispatcher};
pub use payload::Payload;
pub use worker::{ProcessedKind, WorkerOutcome};
