use scopex_core::common::{
    Freq, MAX_CLOCK_DIVIDER, MIN_PHASE_STEP, PHASE_ACCUMULATOR_MODULUS, SYSTEM_CLOCK,
};

use crate::error::ScopexDriverError;

/// Clock feeding the phase accumulator when the system clock is divided by `divider`.
#[must_use]
pub fn effective_clock(divider: u16) -> Freq<f64> {
    Freq::<f64>::from(SYSTEM_CLOCK) / divider.max(1) as f64
}

/// Phase accumulator increment that produces `freq` at the given clock divider.
///
/// The result saturates at `u16::MAX`.
#[must_use]
pub fn phase_step(freq: Freq<f64>, divider: u16) -> u16 {
    let step = freq.hz() * PHASE_ACCUMULATOR_MODULUS as f64 / effective_clock(divider).hz();
    step.floor().clamp(0., u16::MAX as f64) as u16
}

/// A DDS setting: clock divider and phase step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantized {
    divider: u16,
    phase_step: u16,
}

impl Quantized {
    /// Creates a new [`Quantized`].
    #[must_use]
    pub const fn new(divider: u16, phase_step: u16) -> Self {
        Self {
            divider,
            phase_step,
        }
    }

    /// Clock divider.
    #[must_use]
    pub const fn divider(&self) -> u16 {
        self.divider
    }

    /// Phase accumulator increment.
    #[must_use]
    pub const fn phase_step(&self) -> u16 {
        self.phase_step
    }

    /// The frequency the DDS actually outputs with this setting.
    #[must_use]
    pub fn actual(&self) -> Freq<f64> {
        effective_clock(self.divider) * self.phase_step as f64
            / PHASE_ACCUMULATOR_MODULUS as f64
    }
}

/// Finds the DDS setting closest to `freq`.
///
/// Dividers are tried in the series 1, 2, 4, ..., [`MAX_CLOCK_DIVIDER`] and the first one giving
/// a phase step of at least [`MIN_PHASE_STEP`] wins. Low frequencies end at the largest divider
/// with whatever phase step it gives.
pub fn quantize(freq: Freq<f64>) -> Result<Quantized, ScopexDriverError> {
    if !freq.is_valid() {
        return Err(ScopexDriverError::InvalidFrequency(freq.hz()));
    }
    let mut divider = 1;
    loop {
        let step = phase_step(freq, divider);
        if step >= MIN_PHASE_STEP || divider >= MAX_CLOCK_DIVIDER {
            tracing::trace!("{} -> divider {}, phase step {}", freq, divider, step);
            return Ok(Quantized::new(divider, step));
        }
        divider *= 2;
    }
}
