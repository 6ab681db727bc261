use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use fip_model::Profile;

/// Deployment configuration.
///
/// All paths hang off the platform root; the command names exist so an
/// operator can pin a specific interpreter or runtime shim without touching
/// the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Platform root directory.
    pub root: PathBuf,
    /// Deployment profile consumed by the environment materializer.
    pub profile: Profile,

    /// Bypass the container runtime ensure-step.
    pub skip_docker_tooling: bool,
    /// Bypass the node runtime ensure-step.
    pub skip_node_tooling: bool,
    /// Bypass the python runtime ensure-step.
    pub skip_python_tooling: bool,
    /// Bypass the elevated-privileges gate.
    pub skip_privilege_check: bool,

    /// Seconds to wait after starting services before probing them.
    pub startup_wait_secs: u64,
    /// Per-request timeout for health probes, in seconds.
    pub probe_timeout_secs: u64,

    /// Python interpreter used for backend dependency installs.
    pub python_bin: String,
    /// Node package manager used for the frontend install.
    pub npm_bin: String,
    /// Container runtime used for build and start.
    pub docker_bin: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            profile: Profile::default(),
            skip_docker_tooling: false,
            skip_node_tooling: false,
            skip_python_tooling: false,
            skip_privilege_check: false,
            startup_wait_secs: 30,
            probe_timeout_secs: 10,
            python_bin: "python3".to_string(),
            npm_bin: "npm".to_string(),
            docker_bin: "docker".to_string(),
        }
    }
}

impl DeployConfig {
    /// Environment file written by the materializer.
    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }

    /// Multi-service build manifest consumed by build and start.
    pub fn compose_file(&self) -> PathBuf {
        self.root.join("docker-compose.yml")
    }

    /// Directory holding the five backend service directories.
    pub fn services_root(&self) -> PathBuf {
        self.root.join("services")
    }

    /// Platform root as a path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Post-start initialization wait.
    pub fn startup_wait(&self) -> Duration {
        Duration::from_secs(self.startup_wait_secs)
    }

    /// Health probe timeout.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Whether the ensure-step for a named toolchain is bypassed.
    pub fn tooling_skipped(&self, toolchain: &str) -> bool {
        match toolchain {
            "docker" => self.skip_docker_tooling,
            "node" => self.skip_node_tooling,
            "python" => self.skip_python_tooling,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeployConfig;
    use std::path::Path;

    #[test]
    fn default_paths_hang_off_root() {
        let cfg = DeployConfig {
            root: "/opt/fip".into(),
            ..Default::default()
        };

        assert_eq!(cfg.env_file(), Path::new("/opt/fip/.env"));
        assert_eq!(cfg.compose_file(), Path::new("/opt/fip/docker-compose.yml"));
        assert_eq!(cfg.services_root(), Path::new("/opt/fip/services"));
    }

    #[test]
    fn default_waits_match_contract() {
        let cfg = DeployConfig::default();
        assert_eq!(cfg.startup_wait().as_secs(), 30);
        assert_eq!(cfg.probe_timeout().as_secs(), 10);
    }

    #[test]
    fn tooling_skips_map_by_name() {
        let cfg = DeployConfig {
            skip_node_tooling: true,
            ..Default::default()
        };

        assert!(cfg.tooling_skipped("node"));
        assert!(!cfg.tooling_skipped("docker"));
        assert!(!cfg.tooling_skipped("unknown"));
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: DeployConfig = serde_json::from_str(r#"{"startup_wait_secs": 5}"#).unwrap();
        assert_eq!(cfg.startup_wait_secs, 5);
        assert_eq!(cfg.python_bin, "python3");
        assert_eq!(cfg.probe_timeout_secs, 10);
    }
}
