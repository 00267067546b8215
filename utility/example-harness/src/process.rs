use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Wall clock budget for one demo subprocess.
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(16);

/// One demo subprocess invocation.
#[derive(Debug, Clone)]
pub struct RunRequest {
  pub program: PathBuf,
  pub args: Vec<OsString>,
  /// set on the child only, the harness environment is never mutated
  pub envs: Vec<(OsString, OsString)>,
  pub current_dir: Option<PathBuf>,
  pub timeout: Duration,
}

impl RunRequest {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      envs: Vec::new(),
      current_dir: None,
      timeout: DEFAULT_RUN_TIMEOUT,
    }
  }

  pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
    self.envs.push((key.into(), value.into()));
    self
  }

  pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.current_dir = Some(dir.into());
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

#[derive(Debug)]
pub enum RunOutcome {
  Completed {
    exit_code: Option<i32>,
    /// captured stdout followed by stderr
    output: String,
  },
  TimedOut,
}

#[derive(thiserror::Error, Debug)]
pub enum RunFailure {
  #[error(
    "demo `{stem}` timed out: opt-out by adding `run = false` to the demo's toml sidecar, \
     or honor the offscreen environment override so the demo exits after one frame"
  )]
  Timeout { stem: String },
  #[error("demo `{stem}` failed to run (exit code {code:?}):\n{output}")]
  Failed {
    stem: String,
    code: Option<i32>,
    output: String,
  },
}

fn drain_on_thread(
  reader: Option<impl Read + Send + 'static>,
) -> std::thread::JoinHandle<Vec<u8>> {
  std::thread::spawn(move || {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
      let _ = reader.read_to_end(&mut buf);
    }
    buf
  })
}

/// Run one subprocess to completion or kill it at the timeout. Pipes are
/// drained on their own threads so a chatty child can not fill them up and
/// dead lock against our wait loop.
pub fn run_until_exit(request: &RunRequest) -> std::io::Result<RunOutcome> {
  let mut command = Command::new(&request.program);
  command
    .args(&request.args)
    .stdout(Stdio::piped())
    .stderr(Stdio::piped());
  for (key, value) in &request.envs {
    command.env(key, value);
  }
  if let Some(dir) = &request.current_dir {
    command.current_dir(dir);
  }

  let mut child = command.spawn()?;
  let stdout = drain_on_thread(child.stdout.take());
  let stderr = drain_on_thread(child.stderr.take());

  let started = Instant::now();
  let status = loop {
    if let Some(status) = child.try_wait()? {
      break status;
    }
    if started.elapsed() > request.timeout {
      child.kill()?;
      child.wait()?;
      return Ok(RunOutcome::TimedOut);
    }
    std::thread::sleep(Duration::from_millis(20));
  };

  let mut output = stdout.join().unwrap_or_default();
  output.extend(stderr.join().unwrap_or_default());
  Ok(RunOutcome::Completed {
    exit_code: status.code(),
    output: String::from_utf8_lossy(&output).into_owned(),
  })
}

/// Map a finished run onto the pass/fail taxonomy: timeouts are reported
/// distinctly from crashes, and crashes carry the captured output verbatim.
pub fn check_run_outcome(stem: &str, outcome: RunOutcome) -> Result<(), RunFailure> {
  match outcome {
    RunOutcome::TimedOut => Err(RunFailure::Timeout {
      stem: stem.to_string(),
    }),
    RunOutcome::Completed { exit_code, output } => {
      if exit_code == Some(0) {
        Ok(())
      } else {
        Err(RunFailure::Failed {
          stem: stem.to_string(),
          code: exit_code,
          output,
        })
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[cfg(unix)]
  fn sh(script: &str) -> RunRequest {
    RunRequest::new("sh").arg("-c").arg(script)
  }

  #[cfg(unix)]
  #[test]
  fn zero_exit_passes() {
    let outcome = run_until_exit(&sh("exit 0")).unwrap();
    assert!(check_run_outcome("ok", outcome).is_ok());
  }

  #[cfg(unix)]
  #[test]
  fn failure_carries_captured_output() {
    let outcome = run_until_exit(&sh("echo boom; echo worse >&2; exit 3")).unwrap();
    let err = check_run_outcome("broken", outcome).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("boom"));
    assert!(message.contains("worse"));
    assert!(message.contains("exit code Some(3)"));
  }

  #[cfg(unix)]
  #[test]
  fn timeout_is_distinct_and_actionable() {
    let request = sh("sleep 5").timeout(Duration::from_millis(100));
    let outcome = run_until_exit(&request).unwrap();
    assert!(matches!(outcome, RunOutcome::TimedOut));
    let err = check_run_outcome("slow", outcome).unwrap_err();
    assert!(matches!(err, RunFailure::Timeout { .. }));
    assert!(err.to_string().contains("run = false"));
  }

  #[cfg(unix)]
  #[test]
  fn child_env_is_isolated_from_the_harness() {
    let request = sh("test \"$GLIM_FORCE_OFFSCREEN\" = true").env("GLIM_FORCE_OFFSCREEN", "true");
    let outcome = run_until_exit(&request).unwrap();
    assert!(check_run_outcome("env", outcome).is_ok());
    assert!(std::env::var("GLIM_FORCE_OFFSCREEN").is_err());
  }
}
