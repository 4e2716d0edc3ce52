//! Incremental parser for the scanner's line-oriented output.
//!
//! `ubertooth-specan -g` emits one line per frequency bucket, formatted as
//! `"<bucket_index> <rssi_tenths_db>"`, and an empty line at the end of each
//! sweep. The parser accumulates samples into an in-progress frame and hands
//! the frame off on each delimiter.
//!
//! Both malformed lines (token count != 2) and unparsable rssi tokens are
//! protocol violations: the stream either matches the documented format or
//! the pipeline shuts down. Readings are never coerced.

use crate::error::{Result, SpecViewError};
use crate::types::Frame;

/// Converts an rssi reading in tenths of dB to a linear power-domain
/// magnitude. Larger negative readings map to smaller magnitudes.
pub fn magnitude(rssi: i32) -> f64 {
    10f64.powf(-f64::from(rssi) / 10.0)
}

/// Stateful line-to-frame parser.
#[derive(Debug, Default)]
pub struct SweepParser {
    current: Vec<f64>,
}

impl SweepParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its trailing newline).
    ///
    /// Returns `Ok(Some(frame))` when the line is the end-of-sweep
    /// delimiter, finalizing the in-progress frame (possibly empty) and
    /// starting a fresh one. Returns `Ok(None)` for a sample line.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<Frame>> {
        if line.is_empty() {
            return Ok(Some(Frame::new(std::mem::take(&mut self.current))));
        }

        let mut tokens = line.split_whitespace();
        let (Some(_bucket), Some(rssi), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(SpecViewError::Protocol(format!(
                "expected \"<bucket> <rssi>\", got {line:?}"
            )));
        };

        let rssi: i32 = rssi.parse().map_err(|_| {
            SpecViewError::Protocol(format!("rssi is not an integer in line {line:?}"))
        })?;
        self.current.push(magnitude(rssi));
        Ok(None)
    }

    /// Number of samples accumulated in the in-progress frame.
    pub fn pending_samples(&self) -> usize {
        self.current.len()
    }
}
