use serde::Serialize;

use crate::ProbeOutcome;

/// Probe result for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Service name from the catalog.
    pub name: String,
    /// Probed URL.
    pub url: String,
    /// Classification.
    pub outcome: ProbeOutcome,
}

/// Aggregate counts across one probe pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub healthy: usize,
    pub degraded: usize,
    pub unreachable: usize,
}

impl Summary {
    /// Tally a list of reports.
    pub fn of(reports: &[ProbeReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.outcome {
                ProbeOutcome::Healthy => summary.healthy += 1,
                ProbeOutcome::Degraded { .. } => summary.degraded += 1,
                ProbeOutcome::Unreachable { .. } => summary.unreachable += 1,
            }
        }
        summary
    }

    /// Total number of probes taken.
    pub fn total(&self) -> usize {
        self.healthy + self.degraded + self.unreachable
    }
}
