use std::path::{Path, PathBuf};

use serde::Serialize;

/// One backend service: directory name and dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    /// Service name as shown in logs and reports.
    pub name: &'static str,
    /// Directory name under the services root.
    pub dir: &'static str,
    /// Dependency manifest file name inside the service directory.
    pub manifest: &'static str,
}

impl ServiceSpec {
    /// Absolute path of the service directory.
    pub fn dir_path(&self, services_root: &Path) -> PathBuf {
        services_root.join(self.dir)
    }

    /// Absolute path of the dependency manifest.
    pub fn manifest_path(&self, services_root: &Path) -> PathBuf {
        self.dir_path(services_root).join(self.manifest)
    }
}

/// The web UI: a single directory with a node dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontendSpec {
    /// Directory name under the platform root.
    pub dir: &'static str,
    /// Dependency manifest file name.
    pub manifest: &'static str,
}

impl FrontendSpec {
    /// Absolute path of the frontend directory.
    pub fn dir_path(&self, platform_root: &Path) -> PathBuf {
        platform_root.join(self.dir)
    }

    /// Absolute path of the dependency manifest.
    pub fn manifest_path(&self, platform_root: &Path) -> PathBuf {
        self.dir_path(platform_root).join(self.manifest)
    }
}

/// The five backend services, in installation order.
pub fn services() -> [ServiceSpec; 5] {
    const MANIFEST: &str = "requirements.txt";
    [
        ServiceSpec {
            name: "api",
            dir: "api",
            manifest: MANIFEST,
        },
        ServiceSpec {
            name: "ai-analytics",
            dir: "ai-analytics",
            manifest: MANIFEST,
        },
        ServiceSpec {
            name: "smart-map",
            dir: "smart-map",
            manifest: MANIFEST,
        },
        ServiceSpec {
            name: "fleet-optimizer",
            dir: "fleet-optimizer",
            manifest: MANIFEST,
        },
        ServiceSpec {
            name: "predictive-alerts",
            dir: "predictive-alerts",
            manifest: MANIFEST,
        },
    ]
}

/// The web UI directory.
pub fn frontend() -> FrontendSpec {
    FrontendSpec {
        dir: "frontend",
        manifest: "package.json",
    }
}
