use serde::Serialize;

/// One health endpoint: probed as `http://localhost:<port><path>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeSpec {
    /// Service name as shown in logs and reports.
    pub name: &'static str,
    /// Localhost port the service listens on.
    pub port: u16,
    /// Request path of the liveness endpoint.
    pub path: &'static str,
}

impl ProbeSpec {
    /// Full probe URL.
    pub fn url(&self) -> String {
        format!("http://localhost:{}{}", self.port, self.path)
    }
}

/// The six health endpoints, in reporting order.
///
/// The backend services expose `/health`; the web UI has no health route,
/// so its probe targets the document root.
pub fn probes() -> [ProbeSpec; 6] {
    [
        ProbeSpec {
            name: "api",
            port: 5000,
            path: "/health",
        },
        ProbeSpec {
            name: "ai-analytics",
            port: 5001,
            path: "/health",
        },
        ProbeSpec {
            name: "smart-map",
            port: 5002,
            path: "/health",
        },
        ProbeSpec {
            name: "fleet-optimizer",
            port: 5003,
            path: "/health",
        },
        ProbeSpec {
            name: "predictive-alerts",
            port: 5004,
            path: "/health",
        },
        ProbeSpec {
            name: "frontend",
            port: 3000,
            path: "/",
        },
    ]
}
