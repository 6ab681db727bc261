mod error;
pub use error::ExecError;

pub mod lookup;

mod subprocess;
pub use subprocess::{CommandSpec, LogConfig, run, run_with_logging};
