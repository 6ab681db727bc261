mod domain;
pub use domain::{Env, Flag, KeyValue, Profile};

mod error;
pub use error::ModelError;

mod catalog;
pub use catalog::{
    FrontendSpec, ProbeSpec, ServiceSpec, ToolchainSpec, default_env, frontend, probes, services,
    toolchains,
};
