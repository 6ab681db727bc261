use std::fmt;

use tracing::info;

use fip_model::probes;
use fip_probe::{ProbeReport, Prober};

use crate::{CoreError, DeployConfig, phases, report};

/// Deployment phases, in execution order.
///
/// The sequence is strictly linear: no phase is revisited and any hard
/// failure aborts everything after it. Health-check outcomes are the one
/// exception: they are observational and never gate the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InstallTooling,
    WriteEnv,
    InstallDeps,
    BuildImages,
    StartServices,
    HealthCheck,
    Report,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 7] = [
        Phase::InstallTooling,
        Phase::WriteEnv,
        Phase::InstallDeps,
        Phase::BuildImages,
        Phase::StartServices,
        Phase::HealthCheck,
        Phase::Report,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::InstallTooling => "install-tooling",
            Phase::WriteEnv => "write-env",
            Phase::InstallDeps => "install-deps",
            Phase::BuildImages => "build-images",
            Phase::StartServices => "start-services",
            Phase::HealthCheck => "health-check",
            Phase::Report => "report",
        };
        f.write_str(s)
    }
}

/// The deployment pipeline.
pub struct Pipeline {
    config: DeployConfig,
}

impl Pipeline {
    /// Create a pipeline over the given configuration.
    pub fn new(config: DeployConfig) -> Self {
        Self { config }
    }

    /// Effective configuration.
    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Run every phase in order.
    ///
    /// Returns the health reports gathered in the HealthCheck phase; an
    /// `Err` means some phase before them aborted the deployment.
    pub async fn run(&self) -> Result<Vec<ProbeReport>, CoreError> {
        self.enter(Phase::InstallTooling);
        phases::ensure_toolchains(&self.config).await?;

        self.enter(Phase::WriteEnv);
        phases::materialize_env(&self.config)?;

        self.enter(Phase::InstallDeps);
        phases::install_dependencies(&self.config).await?;

        self.enter(Phase::BuildImages);
        phases::build_images(&self.config).await?;

        self.enter(Phase::StartServices);
        phases::start_services(&self.config).await?;

        self.enter(Phase::HealthCheck);
        let prober = Prober::new(self.config.probe_timeout())?;
        let reports = prober.check_all(&probes()).await;

        self.enter(Phase::Report);
        report::print_summary();

        Ok(reports)
    }

    fn enter(&self, phase: Phase) {
        info!(%phase, "entering phase");
    }
}
