//! Subprocess execution via `tokio::process::Command`.
//!
//! Each provisioning step is one spawned child; stdout and stderr are
//! streamed line-by-line into `tracing` so installer output lands in the
//! same log stream as the orchestrator's own messages.

mod config;
pub use config::CommandSpec;

mod logger;
pub use logger::LogConfig;

mod runner;
pub use runner::{run, run_with_logging};
