use std::time::Duration;

use scopex_core::common::{Freq, Hz};

use crate::error::ScopexDriverError;

/// One step of a frequency sweep: after `delay` from the start of the sweep, program `freq` and
/// run the DDS.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SweepStep {
    /// Offset from the start of the sweep.
    pub delay: Duration,
    /// Frequency of this step.
    pub freq: Freq<f64>,
}

/// A linear frequency sweep from `start` to `end` in `steps` equal increments.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPlan {
    start: Freq<f64>,
    end: Freq<f64>,
    steps: u32,
    interval: Duration,
}

impl SweepPlan {
    /// Creates a new [`SweepPlan`]. `steps` must be positive.
    pub fn new(
        start: Freq<f64>,
        end: Freq<f64>,
        steps: i32,
        interval: Duration,
    ) -> Result<Self, ScopexDriverError> {
        if steps <= 0 {
            return Err(ScopexDriverError::InvalidSweepSteps(steps));
        }
        Ok(Self {
            start,
            end,
            steps: steps as u32,
            interval,
        })
    }

    /// Start frequency.
    #[must_use]
    pub const fn start(&self) -> Freq<f64> {
        self.start
    }

    /// End frequency.
    #[must_use]
    pub const fn end(&self) -> Freq<f64> {
        self.end
    }

    /// Time between two steps.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The `steps + 1` steps of the sweep, both ends included.
    ///
    /// Step `i` is at `start + i * ((end - start) / steps)`, so the last step may differ from
    /// `end` by rounding.
    pub fn steps(&self) -> impl ExactSizeIterator<Item = SweepStep> + '_ {
        let increment = (self.end.hz() - self.start.hz()) / self.steps as f64;
        (0..self.steps + 1).map(move |i| SweepStep {
            delay: self.interval * i,
            freq: (self.start.hz() + i as f64 * increment) * Hz,
        })
    }
}
