use thiserror::Error;

use fip_exec::ExecError;
use fip_probe::ProbeError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("this command must run with elevated privileges (re-run with sudo)")]
    Privilege,

    #[error("no supported package manager found on this host")]
    NoPackageManager,

    #[error("failed to install toolchain {tool}: {source}")]
    ToolInstall {
        tool: &'static str,
        #[source]
        source: ExecError,
    },

    #[error("dependency installation failed for {name}: {source}")]
    DependencyInstall {
        name: String,
        #[source]
        source: ExecError,
    },

    #[error("image build failed: {0}")]
    Build(#[source] ExecError),

    #[error("service start failed: {0}")]
    Start(#[source] ExecError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("health prober setup failed: {0}")]
    Probe(#[from] ProbeError),
}
