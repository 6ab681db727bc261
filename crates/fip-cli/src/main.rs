use std::{path::PathBuf, process::ExitCode, str::FromStr};

use clap::Parser;
use tracing::{error, info};

use fip_core::{DeployConfig, Pipeline};
use fip_model::{Profile, probes};
use fip_observe::{LoggerConfig, LoggerFormat, LoggerLevel, init_logger};
use fip_probe::Prober;

/// Provision the FIP platform on this host: toolchains, configuration,
/// images, services, and a health pass over the running topology.
#[derive(Parser, Debug)]
#[command(name = "fip")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Skip the container runtime ensure-step
    #[arg(long)]
    skip_docker_tooling: bool,

    /// Skip the node runtime ensure-step
    #[arg(long)]
    skip_node_tooling: bool,

    /// Skip the python runtime ensure-step
    #[arg(long)]
    skip_python_tooling: bool,

    /// Deployment profile for the generated environment file
    #[arg(long, default_value = "development")]
    environment: Profile,

    /// Platform root directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Skip the elevated-privileges gate (useful in CI)
    #[arg(long)]
    no_privilege_check: bool,

    /// Only probe service health and print the report as JSON
    #[arg(long)]
    health_only: bool,

    /// Log level filter expression (e.g. "info", "fip_core=debug,info")
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format: text, json or journald
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Cli {
    fn deploy_config(&self) -> DeployConfig {
        DeployConfig {
            root: self.root.clone(),
            profile: self.environment,
            skip_docker_tooling: self.skip_docker_tooling,
            skip_node_tooling: self.skip_node_tooling,
            skip_python_tooling: self.skip_python_tooling,
            skip_privilege_check: self.no_privilege_check,
            ..Default::default()
        }
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logger = match logger_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("fip: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(&logger) {
        eprintln!("fip: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "deployment aborted");
            ExitCode::FAILURE
        }
    }
}

fn logger_config(cli: &Cli) -> anyhow::Result<LoggerConfig> {
    Ok(LoggerConfig {
        format: LoggerFormat::from_str(&cli.log_format)?,
        level: LoggerLevel::new(&cli.log_level)?,
        ..Default::default()
    })
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.deploy_config();

    if cli.health_only {
        let prober = Prober::new(config.probe_timeout())?;
        let reports = prober.check_all(&probes()).await;
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    info!(root = %config.root().display(), profile = %config.profile, "starting deployment");
    Pipeline::new(config).run().await?;
    Ok(())
}
