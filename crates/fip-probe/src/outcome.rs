use std::fmt;

use serde::Serialize;

/// Classification of one health probe.
///
/// Every endpoint is classified independently; outcomes never feed back
/// into the deployment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ProbeOutcome {
    /// Endpoint answered HTTP 200.
    Healthy,
    /// Endpoint answered with any other status code.
    Degraded { status: u16 },
    /// Request failed: timeout, refused connection, transport error.
    Unreachable { reason: String },
}

impl ProbeOutcome {
    /// Check whether the endpoint answered 200.
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Healthy => f.write_str("healthy"),
            ProbeOutcome::Degraded { status } => write!(f, "degraded (status {status})"),
            ProbeOutcome::Unreachable { reason } => write!(f, "unreachable ({reason})"),
        }
    }
}
