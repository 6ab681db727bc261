use std::process::Stdio;

use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    process::Command,
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    ExecError,
    subprocess::{CommandSpec, LogConfig},
};

/// Run a subprocess to completion with default output logging.
pub async fn run(spec: &CommandSpec) -> Result<(), ExecError> {
    run_with_logging(spec, LogConfig::default()).await
}

/// Run a subprocess to completion, streaming its output into `tracing`.
///
/// Stdout lines land at INFO and stderr lines at WARN (per `log_cfg`),
/// tagged with the spec's step label. A non-zero exit is an error unless
/// the spec tolerates it; termination by signal is always an error.
pub async fn run_with_logging(spec: &CommandSpec, log_cfg: LogConfig) -> Result<(), ExecError> {
    spec.validate()?;

    debug!(step = %spec.label(), command = %spec, cwd = ?spec.cwd, "spawning subprocess");

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    if let Some(cwd) = &spec.cwd {
        cmd.current_dir(cwd);
    }
    for kv in spec.env.iter() {
        cmd.env(kv.key(), kv.value());
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| ExecError::Spawn {
        program: spec.program.clone(),
        source: e,
    })?;

    let out_task = child
        .stdout
        .take()
        .map(|out| stream_lines(out, spec.label().to_string(), log_cfg, false));
    let err_task = child
        .stderr
        .take()
        .map(|err| stream_lines(err, spec.label().to_string(), log_cfg, true));

    let status = child.wait().await?;

    // Drain the readers to EOF before classifying the exit.
    if let Some(task) = out_task {
        let _ = task.await;
    }
    if let Some(task) = err_task {
        let _ = task.await;
    }

    if status.success() || spec.fail_on_non_zero.is_disabled() {
        debug!(step = %spec.label(), code = ?status.code(), "subprocess finished");
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(ExecError::NonZeroExit {
            label: spec.label().to_string(),
            code,
        }),
        None => Err(ExecError::Signaled {
            label: spec.label().to_string(),
        }),
    }
}

fn stream_lines<R>(reader: R, label: String, log_cfg: LogConfig, is_stderr: bool) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = log_cfg.clamp(&line);
            match (is_stderr, log_cfg.stdout_info, log_cfg.stderr_warn) {
                (false, true, _) => info!(step = %label, "{line}"),
                (true, _, true) => warn!(step = %label, "{line}"),
                _ => debug!(step = %label, "{line}"),
            }
        }
    })
}
