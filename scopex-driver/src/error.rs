use std::time::Duration;

use scopex_core::{common::WAVEFORM_TABLE_SIZE, link::LinkError};
use thiserror::Error;

/// A interface for error handling in scopex-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ScopexDriverError {
    /// Frequency cannot be synthesized.
    #[error("Frequency ({0} Hz) must be positive")]
    InvalidFrequency(f64),
    /// Waveform table is too long.
    #[error(
        "Waveform table length ({0}) exceeds {max}",
        max = WAVEFORM_TABLE_SIZE
    )]
    WaveformTooLong(usize),
    /// Waveform table has no samples.
    #[error("Waveform table must not be empty")]
    EmptyWaveform,
    /// Number of sweep steps is not positive.
    #[error("Number of sweep steps ({0}) must be positive")]
    InvalidSweepSteps(i32),

    /// Error in the Link.
    #[error("{0}")]
    Link(#[from] LinkError),
    /// Link is closed.
    #[error("Link is closed")]
    LinkClosed,
    /// Link did not drain in time.
    #[error("Timed out after {0:?} waiting for the write to complete")]
    WriteTimeout(Duration),
    /// Link accepted fewer bytes than requested.
    #[error("Only {0} of {1} bytes were written")]
    IncompleteWrite(usize, usize),
}
