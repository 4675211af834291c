use std::env;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

/// Client for the console dictionary tool. The tool is opaque: it takes
/// a word or phrase, prints the result text on stdout and diagnostics on
/// stderr. All failures here are recoverable for the caller; the prior
/// result view stays in place.
#[derive(Debug, Clone)]
pub struct LookupClient {
    program: String,
    base_args: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("`{program}` not found on PATH")]
    NotFound { program: String },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl LookupClient {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The tool is the system's reason to exist; callers treat a missing
    /// binary as fatal at startup.
    pub fn ensure_available(&self) -> Result<(), LookupError> {
        let program = Path::new(&self.program);
        let found = if program.components().count() > 1 {
            program.is_file()
        } else {
            env::var_os("PATH")
                .map(|paths| {
                    env::split_paths(&paths).any(|dir| dir.join(&self.program).is_file())
                })
                .unwrap_or(false)
        };
        if found {
            Ok(())
        } else {
            Err(LookupError::NotFound {
                program: self.program.clone(),
            })
        }
    }

    /// Run one query to completion and return the raw result text.
    pub async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        tracing::debug!(program = %self.program, query, "running lookup");
        let output = Command::new(&self.program)
            .args(&self.base_args)
            .arg(query)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|cause| LookupError::Spawn {
                program: self.program.clone(),
                cause,
            })?;

        if !output.status.success() {
            return Err(LookupError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_found() {
        let client = LookupClient::new("slovo-no-such-tool", vec![]);
        assert!(matches!(
            client.ensure_available(),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn spawn_failure_is_recoverable() {
        let client = LookupClient::new("/nonexistent/slovo-tool", vec![]);
        let err = client.lookup("word").await.unwrap_err();
        assert!(matches!(err, LookupError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout_on_success() {
        let client = LookupClient::new("sh", vec!["-c".to_string(), "echo result".to_string()]);
        // the query becomes an unused trailing argument for sh
        let out = client.lookup("ignored").await.unwrap();
        assert_eq!(out, "result\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_carries_stderr() {
        let client = LookupClient::new(
            "sh",
            vec!["-c".to_string(), "echo oops >&2; exit 2".to_string()],
        );
        match client.lookup("ignored").await {
            Err(LookupError::Failed { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(2));
                assert_eq!(stderr, "oops");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
