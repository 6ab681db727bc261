//! Phase implementations, one module per deployment step.

mod pkg;
pub use pkg::PackageManager;

mod tooling;
pub use tooling::ensure_toolchains;

mod envfile;
pub use envfile::materialize_env;

mod deps;
pub use deps::install_dependencies;

mod build;
pub use build::build_images;

mod launch;
pub use launch::start_services;
