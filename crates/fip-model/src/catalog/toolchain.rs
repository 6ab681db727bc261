use serde::Serialize;

/// One host toolchain: presence is checked by binary, remediation installs
/// the package through the host package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainSpec {
    /// Toolchain name as shown in logs.
    pub name: &'static str,
    /// Binary looked up on the executable search path.
    pub binary: &'static str,
    /// Package name passed to the package manager when absent.
    pub package: &'static str,
}

/// The three host toolchains the platform needs before anything else runs.
pub fn toolchains() -> [ToolchainSpec; 3] {
    [
        ToolchainSpec {
            name: "docker",
            binary: "docker",
            package: "docker.io",
        },
        ToolchainSpec {
            name: "node",
            binary: "node",
            package: "nodejs",
        },
        ToolchainSpec {
            name: "python",
            binary: "python3",
            package: "python3",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::toolchains;

    #[test]
    fn catalog_has_three_toolchains() {
        let all = toolchains();
        assert_eq!(all.len(), 3);

        let names: Vec<_> = all.iter().map(|t| t.name).collect();
        assert_eq!(names, ["docker", "node", "python"]);
    }

    #[test]
    fn python_checks_versioned_binary() {
        let python = toolchains()[2].clone();
        assert_eq!(python.binary, "python3");
    }
}
