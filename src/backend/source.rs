//! Launching the external scanner process.

use crate::config::SourceConfig;
use crate::error::{Result, SpecViewError};
use std::process::{Child, ChildStdout, Command, Stdio};

/// A running scanner process with its stdout piped to us.
#[derive(Debug)]
pub struct SpectrumSource {
    child: Child,
}

impl SpectrumSource {
    /// Resolve and launch the scanner.
    ///
    /// The command is resolved via the OS search path; a missing executable
    /// (or any other spawn failure) is a fatal startup error.
    pub fn spawn(config: &SourceConfig) -> Result<Self> {
        let child = Command::new(&config.command)
            .args(&config.args)
            .stdout(Stdio::piped())
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SpecViewError::Source(format!(
                    "{} not found on PATH",
                    config.command
                )),
                _ => SpecViewError::Source(format!("failed to launch {}: {}", config.command, e)),
            })?;

        tracing::info!("Launched {} (pid {})", config.command, child.id());
        Ok(Self { child })
    }

    /// Take the stdout pipe for the read loop.
    pub fn take_stdout(&mut self) -> Result<ChildStdout> {
        self.child
            .stdout
            .take()
            .ok_or_else(|| SpecViewError::Source("scanner stdout already taken".to_string()))
    }

    /// Give up ownership of the process handle (for the shutdown token).
    pub fn into_child(self) -> Child {
        self.child
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_source_error() {
        let config = SourceConfig {
            command: "specview-no-such-scanner".to_string(),
            args: vec!["-g".to_string()],
        };
        let err = SpectrumSource::spawn(&config).unwrap_err();
        assert!(matches!(err, SpecViewError::Source(_)));
        assert!(err.to_string().contains("not found on PATH"));
    }
}
