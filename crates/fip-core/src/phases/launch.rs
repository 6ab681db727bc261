use tracing::info;

use fip_exec::CommandSpec;

use crate::{CoreError, DeployConfig};

/// Start the declared services detached, then wait out the fixed
/// initialization delay.
///
/// The wait is a single bounded sleep; health verification happens
/// afterwards regardless of what the services are doing. Returns whether
/// anything was actually started.
pub async fn start_services(cfg: &DeployConfig) -> Result<bool, CoreError> {
    let compose = cfg.compose_file();
    if !compose.exists() {
        info!(manifest = %compose.display(), "build manifest not found; nothing to start");
        return Ok(false);
    }

    info!("starting services");
    let spec = CommandSpec::new("start", &cfg.docker_bin)
        .args(["compose", "-f"])
        .arg(compose.display().to_string())
        .args(["up", "-d"]);

    fip_exec::run(&spec).await.map_err(CoreError::Start)?;

    info!(
        secs = cfg.startup_wait_secs,
        "waiting for services to initialize"
    );
    tokio::time::sleep(cfg.startup_wait()).await;
    Ok(true)
}
