//! Optional PNG post-processing via an external optimizer.
//!
//! PNG files written by the saver can be shrunk further by an external
//! `optipng`-compatible executable. Availability of that executable is a
//! normal, non-exceptional state: the orchestrator probes for it once via
//! [`OptiPng::detect`] and passes the capability (or its absence) into the
//! save path. Tests inject their own [`PngPostProcessor`] implementation.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Errors from a PNG post-processing run.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The optimizer process could not be launched
    #[error("Failed to run {command}: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    /// The optimizer ran but reported failure
    #[error("{command} exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// A capability that shrinks an already-written PNG file in place.
///
/// Callers treat failure as a degraded-but-tolerable outcome: the file on
/// disk remains as first written.
pub trait PngPostProcessor {
    /// Optimize the PNG at `path`, blocking until the pass completes.
    fn optimize(&self, path: &Path) -> Result<(), OptimizeError>;
}

/// Production post-processor backed by the `optipng` executable.
pub struct OptiPng {
    command: String,
    level: u8,
}

impl OptiPng {
    /// Optimization level passed as `-o<level>`.
    pub const DEFAULT_LEVEL: u8 = 7;

    const COMMAND: &'static str = "optipng";

    /// Probe for `optipng` on the execution path.
    ///
    /// Runs `optipng --version` once with its output discarded. Returns
    /// `None` when the executable is missing or the probe fails — callers
    /// then warn and leave PNG output unoptimized.
    pub fn detect() -> Option<Self> {
        let available = Command::new(Self::COMMAND)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        available.then(|| Self {
            command: Self::COMMAND.to_string(),
            level: Self::DEFAULT_LEVEL,
        })
    }
}

impl PngPostProcessor for OptiPng {
    fn optimize(&self, path: &Path) -> Result<(), OptimizeError> {
        let status = Command::new(&self.command)
            .arg(format!("-o{}", self.level))
            .arg(path)
            .status()
            .map_err(|source| OptimizeError::Launch {
                command: self.command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(OptimizeError::Failed {
                command: self.command.clone(),
                status,
            })
        }
    }
}
