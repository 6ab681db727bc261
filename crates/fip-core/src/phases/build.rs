use tracing::info;

use fip_exec::CommandSpec;

use crate::{CoreError, DeployConfig};

/// Build the service images if a build manifest is present.
///
/// An absent manifest is success by policy, not an error: building is
/// optional and the start phase makes the same check.
pub async fn build_images(cfg: &DeployConfig) -> Result<(), CoreError> {
    let compose = cfg.compose_file();
    if !compose.exists() {
        info!(manifest = %compose.display(), "build manifest not found; skipping image build");
        return Ok(());
    }

    info!("building service images");
    let spec = CommandSpec::new("build", &cfg.docker_bin)
        .args(["compose", "-f"])
        .arg(compose.display().to_string())
        .arg("build");

    fip_exec::run(&spec).await.map_err(CoreError::Build)
}
