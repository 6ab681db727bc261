use tracing::{info, warn};

use fip_exec::CommandSpec;
use fip_model::{frontend, services};

use crate::{CoreError, DeployConfig};

/// Install declared dependencies for every service, then the frontend.
///
/// A missing manifest is a warning and the sequence moves on; a failing
/// install aborts immediately with nothing rolled back. The frontend
/// follows the same rule as the backend services.
pub async fn install_dependencies(cfg: &DeployConfig) -> Result<(), CoreError> {
    let services_root = cfg.services_root();

    for svc in services() {
        let manifest = svc.manifest_path(&services_root);
        if !manifest.exists() {
            warn!(
                service = svc.name,
                manifest = %manifest.display(),
                "dependency manifest not found; skipping service"
            );
            continue;
        }

        info!(service = svc.name, "installing service dependencies");
        let spec = CommandSpec::new(format!("deps:{}", svc.name), &cfg.python_bin)
            .args(["-m", "pip", "install", "-r", svc.manifest])
            .cwd(svc.dir_path(&services_root));

        fip_exec::run(&spec)
            .await
            .map_err(|source| CoreError::DependencyInstall {
                name: svc.name.to_string(),
                source,
            })?;
    }

    let fe = frontend();
    let manifest = fe.manifest_path(cfg.root());
    if !manifest.exists() {
        warn!(
            manifest = %manifest.display(),
            "frontend manifest not found; skipping frontend"
        );
        return Ok(());
    }

    info!("installing frontend dependencies");
    let spec = CommandSpec::new("deps:frontend", &cfg.npm_bin)
        .arg("install")
        .cwd(fe.dir_path(cfg.root()));

    fip_exec::run(&spec)
        .await
        .map_err(|source| CoreError::DependencyInstall {
            name: "frontend".to_string(),
            source,
        })?;

    Ok(())
}
