use std::fs;

use tracing::info;

use fip_model::default_env;

use crate::{CoreError, DeployConfig};

/// Materialize the environment file if it does not exist yet.
///
/// An existing file is never touched, whatever its contents: repairing or
/// regenerating configuration is an operator decision, not this tool's.
/// Returns whether a file was written.
pub fn materialize_env(cfg: &DeployConfig) -> Result<bool, CoreError> {
    let path = cfg.env_file();
    if path.exists() {
        info!(path = %path.display(), "environment file already exists; leaving it untouched");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let env = default_env(cfg.profile);
    fs::write(&path, env.to_dotenv())?;
    info!(path = %path.display(), keys = env.len(), "environment file written");
    Ok(true)
}
