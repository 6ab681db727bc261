use tracing::{info, warn};

use fip_exec::lookup;
use fip_model::{ToolchainSpec, toolchains};

use crate::{CoreError, DeployConfig, phases::PackageManager};

/// Ensure the host toolchains are present, installing any that are absent.
///
/// Runs the privilege gate first: installs mutate host state, so the whole
/// sequence refuses to start without elevated rights. Presence checks
/// re-resolve the search path on every call, so a binary installed here is
/// visible to the checks that follow.
pub async fn ensure_toolchains(cfg: &DeployConfig) -> Result<(), CoreError> {
    if !cfg.skip_privilege_check && !running_with_privileges() {
        return Err(CoreError::Privilege);
    }

    for tool in toolchains() {
        if cfg.tooling_skipped(tool.name) {
            info!(tool = tool.name, "toolchain step skipped by flag");
            continue;
        }
        ensure_tool(&tool).await?;
    }
    Ok(())
}

async fn ensure_tool(tool: &ToolchainSpec) -> Result<(), CoreError> {
    if let Some(path) = lookup::binary_on_path(tool.binary) {
        info!(tool = tool.name, path = %path.display(), "toolchain already present");
        return Ok(());
    }

    let manager = PackageManager::detect().ok_or(CoreError::NoPackageManager)?;
    info!(tool = tool.name, package = tool.package, %manager, "toolchain absent; installing");

    fip_exec::run(&manager.install_spec(tool.package))
        .await
        .map_err(|source| CoreError::ToolInstall {
            tool: tool.name,
            source,
        })?;

    // Fresh resolution after the install.
    if lookup::is_on_path(tool.binary) {
        info!(tool = tool.name, "toolchain installed");
    } else {
        warn!(
            tool = tool.name,
            binary = tool.binary,
            "install reported success but the binary is still not on the search path"
        );
    }
    Ok(())
}

/// Effective-UID check on Unix; other platforms pass.
fn running_with_privileges() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_toolchains;
    use crate::{CoreError, DeployConfig};

    fn skipping_config() -> DeployConfig {
        DeployConfig {
            skip_docker_tooling: true,
            skip_node_tooling: true,
            skip_python_tooling: true,
            skip_privilege_check: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn all_skips_make_the_phase_a_no_op() {
        assert!(ensure_toolchains(&skipping_config()).await.is_ok());
    }

    #[tokio::test]
    async fn privilege_gate_runs_before_any_toolchain_work() {
        let cfg = DeployConfig {
            skip_privilege_check: false,
            ..skipping_config()
        };

        let result = ensure_toolchains(&cfg).await;
        // Root hosts pass the gate; everything else must fail with Privilege.
        #[cfg(unix)]
        if unsafe { libc::geteuid() } != 0 {
            assert!(matches!(result, Err(CoreError::Privilege)));
            return;
        }
        assert!(result.is_ok());
    }
}
