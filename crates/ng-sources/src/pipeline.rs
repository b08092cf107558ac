//! External batch pipeline trigger
//!
//! The scrape, translate and summarize steps run out of process. This module
//! only launches the configured command and relays what happened.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::process::Command;
use tracing::{info, warn};
use utoipa::ToSchema;

use ng_core::{NgError, PipelineConfig, Result};

/// Result of one pipeline run
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PipelineOutcome {
    pub success: bool,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

/// Launches the batch pipeline as a child process
#[derive(Debug, Clone)]
pub struct PipelineRunner {
    command: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    timeout: Duration,
}

impl PipelineRunner {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            working_dir: None,
            timeout: Duration::from_secs(900),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run to completion, capturing output.
    ///
    /// A non-zero exit is reported through `success`; failing to start the
    /// process or exceeding the timeout is an error. The child is killed
    /// when the timeout elapses.
    pub async fn run(&self) -> Result<PipelineOutcome> {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        info!(command = %self.command, args = ?self.args, "starting pipeline");
        let started = Instant::now();

        let child = command
            .spawn()
            .map_err(|e| NgError::Pipeline(format!("failed to start '{}': {e}", self.command)))?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "pipeline timed out");
                return Err(NgError::Pipeline(format!(
                    "pipeline exceeded {}s timeout",
                    self.timeout.as_secs()
                )));
            }
        };

        let outcome = PipelineOutcome {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms: started.elapsed().as_millis() as u64,
        };

        if outcome.success {
            info!(duration_ms = outcome.duration_ms, "pipeline finished");
        } else {
            warn!(
                exit_code = ?outcome.exit_code,
                duration_ms = outcome.duration_ms,
                "pipeline failed"
            );
        }
        Ok(outcome)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> PipelineRunner {
        PipelineRunner::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[tokio::test]
    async fn test_run_captures_output() {
        let outcome = sh("echo scraped; echo warning >&2").run().await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
        assert_eq!(outcome.stdout.trim(), "scraped");
        assert_eq!(outcome.stderr.trim(), "warning");
    }

    #[tokio::test]
    async fn test_run_reports_failure() {
        let outcome = sh("exit 3").run().await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(3));
    }

    #[tokio::test]
    async fn test_run_respects_working_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let outcome = sh("pwd").with_working_dir(dir.path()).run().await.unwrap();

        let expected = dir.path().canonicalize().unwrap();
        let reported = std::path::Path::new(outcome.stdout.trim()).canonicalize().unwrap();
        assert_eq!(reported, expected);
    }

    #[tokio::test]
    async fn test_run_times_out() {
        let result = sh("sleep 5")
            .with_timeout(Duration::from_millis(100))
            .run()
            .await;
        assert!(matches!(result, Err(NgError::Pipeline(_))));
    }

    #[tokio::test]
    async fn test_missing_command() {
        let runner = PipelineRunner::new("/nonexistent/pipeline-bin", vec![]);
        assert!(matches!(runner.run().await, Err(NgError::Pipeline(_))));
    }

    #[test]
    fn test_from_config() {
        let config = PipelineConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        let runner = PipelineRunner::from_config(&config);
        assert_eq!(runner.timeout, Duration::from_secs(30));
        assert_eq!(runner.args, vec!["pipeline.py"]);
    }
}
