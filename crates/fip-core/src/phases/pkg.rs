use std::fmt;

use fip_exec::{CommandSpec, lookup};

/// Host package manager used to remediate missing toolchains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    AptGet,
    Dnf,
    Pacman,
    Brew,
}

impl PackageManager {
    /// Detect the first supported manager on the executable search path.
    pub fn detect() -> Option<Self> {
        [Self::AptGet, Self::Dnf, Self::Pacman, Self::Brew]
            .into_iter()
            .find(|pm| lookup::is_on_path(pm.binary()))
    }

    /// Binary name of the manager.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::AptGet => "apt-get",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
            Self::Brew => "brew",
        }
    }

    /// Build the non-interactive install invocation for a package.
    pub fn install_spec(&self, package: &str) -> CommandSpec {
        let label = format!("install:{package}");
        match self {
            Self::AptGet => CommandSpec::new(label, "apt-get")
                .args(["install", "-y", package])
                .env("DEBIAN_FRONTEND", "noninteractive"),
            Self::Dnf => CommandSpec::new(label, "dnf").args(["install", "-y", package]),
            Self::Pacman => {
                CommandSpec::new(label, "pacman").args(["-S", "--noconfirm", package])
            }
            Self::Brew => CommandSpec::new(label, "brew").args(["install", package]),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::PackageManager;
    use fip_exec::lookup;

    #[test]
    fn install_specs_are_non_interactive() {
        let spec = PackageManager::AptGet.install_spec("docker.io");
        assert_eq!(spec.to_string(), "apt-get install -y docker.io");

        let spec = PackageManager::Pacman.install_spec("nodejs");
        assert_eq!(spec.to_string(), "pacman -S --noconfirm nodejs");
    }

    #[test]
    fn detect_only_reports_managers_actually_on_path() {
        if let Some(pm) = PackageManager::detect() {
            assert!(lookup::is_on_path(pm.binary()));
        }
    }

    #[test]
    fn display_matches_binary_name() {
        assert_eq!(PackageManager::Brew.to_string(), "brew");
        assert_eq!(PackageManager::Dnf.to_string(), "dnf");
    }
}
