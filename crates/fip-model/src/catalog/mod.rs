//! Static platform catalog.
//!
//! The service topology is fixed: five backend services, one web UI, three
//! host toolchains, six health endpoints. There is no runtime discovery;
//! keeping the tuples here avoids scattering magic strings across the phases.

mod service;
pub use service::{FrontendSpec, ServiceSpec, frontend, services};

mod probe;
pub use probe::{ProbeSpec, probes};

mod toolchain;
pub use toolchain::{ToolchainSpec, toolchains};

mod envfile;
pub use envfile::default_env;
