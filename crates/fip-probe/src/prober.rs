use std::time::Duration;

use fip_model::ProbeSpec;
use tracing::{error, info, warn};

use crate::{ProbeError, ProbeOutcome, ProbeReport, Summary};

/// HTTP health prober with a bounded per-request timeout.
///
/// Probes are observational only: failures are logged and reported, never
/// propagated as errors.
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    /// Build a prober whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probe one endpoint and classify the response.
    pub async fn check(&self, spec: &ProbeSpec) -> ProbeOutcome {
        let url = spec.url();
        match self.client.get(&url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::OK {
                    info!(service = %spec.name, %url, "health check passed");
                    ProbeOutcome::Healthy
                } else {
                    warn!(service = %spec.name, %url, status = status.as_u16(), "service responded with non-200 status");
                    ProbeOutcome::Degraded {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => {
                error!(service = %spec.name, %url, error = %e, "service is unreachable");
                ProbeOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Probe every endpoint in order and collect per-endpoint reports.
    ///
    /// Endpoints are independent: one failure never short-circuits the rest.
    pub async fn check_all(&self, specs: &[ProbeSpec]) -> Vec<ProbeReport> {
        let mut reports = Vec::with_capacity(specs.len());
        for spec in specs {
            let outcome = self.check(spec).await;
            reports.push(ProbeReport {
                name: spec.name.to_string(),
                url: spec.url(),
                outcome,
            });
        }

        let summary = Summary::of(&reports);
        info!(
            healthy = summary.healthy,
            degraded = summary.degraded,
            unreachable = summary.unreachable,
            "health verification finished"
        );
        reports
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fip_model::ProbeSpec;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::Prober;
    use crate::ProbeOutcome;

    /// Serve one connection on an ephemeral port with a canned response.
    async fn serve_once(response: &'static str) -> u16 {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((mut sock, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = sock.read(&mut buf).await;
                let _ = sock.write_all(response.as_bytes()).await;
                let _ = sock.shutdown().await;
            }
        });
        port
    }

    /// A port with nothing listening on it.
    async fn closed_port() -> u16 {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    fn spec(port: u16) -> ProbeSpec {
        ProbeSpec {
            name: "api",
            port,
            path: "/health",
        }
    }

    fn prober() -> Prober {
        Prober::new(Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn status_200_is_healthy() {
        let port = serve_once("HTTP/1.1 200 OK\r\ncontent-length: 2\r\n\r\nok").await;
        let outcome = prober().check(&spec(port)).await;
        assert_eq!(outcome, ProbeOutcome::Healthy);
    }

    #[tokio::test]
    async fn other_status_is_degraded_with_the_code() {
        let port = serve_once("HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\n\r\n").await;
        let outcome = prober().check(&spec(port)).await;
        assert_eq!(outcome, ProbeOutcome::Degraded { status: 503 });
    }

    #[tokio::test]
    async fn connection_failure_is_unreachable() {
        let port = closed_port().await;
        let outcome = prober().check(&spec(port)).await;
        assert!(matches!(outcome, ProbeOutcome::Unreachable { .. }));
    }

    #[tokio::test]
    async fn endpoints_are_classified_independently() {
        let up = serve_once("HTTP/1.1 200 OK\r\ncontent-length: 2\r\n\r\nok").await;
        let down = closed_port().await;

        let specs = [
            ProbeSpec {
                name: "api",
                port: up,
                path: "/health",
            },
            ProbeSpec {
                name: "frontend",
                port: down,
                path: "/",
            },
        ];

        let reports = prober().check_all(&specs).await;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].outcome, ProbeOutcome::Healthy);
        assert!(matches!(
            reports[1].outcome,
            ProbeOutcome::Unreachable { .. }
        ));
    }
}
