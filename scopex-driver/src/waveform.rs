use scopex_core::common::{PI, WAVEFORM_TABLE_SIZE};

use crate::error::ScopexDriverError;

const LOW_RAIL: u8 = 5;
const HIGH_RAIL: u8 = 250;

/// The kind of waveform played by the DDS.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WaveformType {
    #[default]
    #[allow(missing_docs)]
    Sine = 0,
    #[allow(missing_docs)]
    Square = 1,
    #[allow(missing_docs)]
    Triangle = 2,
    #[allow(missing_docs)]
    RampUp = 3,
    #[allow(missing_docs)]
    RampDown = 4,
    /// The table loaded with [`WaveformBank::load_arbitrary`].
    Arbitrary = 5,
}

impl WaveformType {
    const BUILTIN: [WaveformType; 5] = [
        WaveformType::Sine,
        WaveformType::Square,
        WaveformType::Triangle,
        WaveformType::RampUp,
        WaveformType::RampDown,
    ];

    /// Looks up a type by its index. Unknown indices map to [`WaveformType::Sine`].
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Square,
            2 => Self::Triangle,
            3 => Self::RampUp,
            4 => Self::RampDown,
            5 => Self::Arbitrary,
            _ => Self::Sine,
        }
    }

    /// The index of the type.
    #[must_use]
    pub const fn index(&self) -> u8 {
        *self as u8
    }
}

impl From<i32> for WaveformType {
    fn from(index: i32) -> Self {
        Self::from_index(index)
    }
}

impl From<WaveformType> for i32 {
    fn from(ty: WaveformType) -> Self {
        ty.index() as i32
    }
}

/// A DDS lookup table of 1 to [`WAVEFORM_TABLE_SIZE`] samples.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WaveformTable(Vec<u8>);

impl WaveformTable {
    /// Creates a table from raw samples.
    ///
    /// The upload header encodes 256 samples as a length of 0, so an empty table cannot be sent.
    pub fn new(samples: Vec<u8>) -> Result<Self, ScopexDriverError> {
        if samples.is_empty() {
            return Err(ScopexDriverError::EmptyWaveform);
        }
        if samples.len() > WAVEFORM_TABLE_SIZE {
            return Err(ScopexDriverError::WaveformTooLong(samples.len()));
        }
        Ok(Self(samples))
    }

    /// `round(127.5 * (1 + sin(2πi/256)))`
    #[must_use]
    pub fn sine() -> Self {
        Self(
            (0..WAVEFORM_TABLE_SIZE)
                .map(|i| {
                    let theta = 2.0 * PI * i as f64 / WAVEFORM_TABLE_SIZE as f64;
                    (127.5 * (1.0 + theta.sin())).round() as u8
                })
                .collect(),
        )
    }

    /// Low rail for the first half, high rail for the second half.
    #[must_use]
    pub fn square() -> Self {
        Self(
            (0..WAVEFORM_TABLE_SIZE)
                .map(|i| {
                    if i < WAVEFORM_TABLE_SIZE / 2 {
                        LOW_RAIL
                    } else {
                        HIGH_RAIL
                    }
                })
                .collect(),
        )
    }

    /// Rises from the low rail to the high rail over the first half and mirrors it over the
    /// second half.
    #[must_use]
    pub fn triangle() -> Self {
        const HALF: usize = WAVEFORM_TABLE_SIZE / 2;
        let span = (HIGH_RAIL - LOW_RAIL) as usize;
        let rise = (0..HALF).map(|i| LOW_RAIL + (span * i / (HALF - 1)) as u8);
        Self(rise.clone().chain(rise.rev()).collect())
    }

    /// `5 + floor(250i/255)`
    #[must_use]
    pub fn ramp_up() -> Self {
        Self(
            (0..WAVEFORM_TABLE_SIZE)
                .map(|i| LOW_RAIL.saturating_add(Self::ramp(i)))
                .collect(),
        )
    }

    /// `250 - floor(250i/255)`
    #[must_use]
    pub fn ramp_down() -> Self {
        Self(
            (0..WAVEFORM_TABLE_SIZE)
                .map(|i| HIGH_RAIL - Self::ramp(i))
                .collect(),
        )
    }

    fn ramp(i: usize) -> u8 {
        (HIGH_RAIL as usize * i / (WAVEFORM_TABLE_SIZE - 1)) as u8
    }

    /// The samples.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&[u8]> for WaveformTable {
    type Error = ScopexDriverError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(value.to_vec())
    }
}

/// The built-in tables, the arbitrary slot, and which of them the DDS plays.
///
/// Built-in tables are computed once in [`WaveformBank::new`] and never change.
#[derive(Clone, Debug)]
pub struct WaveformBank {
    builtin: [WaveformTable; 5],
    arbitrary: Option<WaveformTable>,
    active: WaveformType,
}

impl Default for WaveformBank {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveformBank {
    /// Creates a new [`WaveformBank`] with the sine table active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builtin: [
                WaveformTable::sine(),
                WaveformTable::square(),
                WaveformTable::triangle(),
                WaveformTable::ramp_up(),
                WaveformTable::ramp_down(),
            ],
            arbitrary: None,
            active: WaveformType::Sine,
        }
    }

    /// Selects the table the DDS plays and returns the resulting selection.
    ///
    /// Selecting [`WaveformType::Arbitrary`] before any arbitrary table was loaded keeps the
    /// current selection.
    pub fn select(&mut self, ty: WaveformType) -> WaveformType {
        if ty != WaveformType::Arbitrary || self.arbitrary.is_some() {
            self.active = ty;
        }
        self.active
    }

    /// Replaces the arbitrary table and selects it.
    ///
    /// Tables longer than [`WAVEFORM_TABLE_SIZE`] are rejected and leave the bank untouched.
    pub fn load_arbitrary(&mut self, samples: &[u8]) -> Result<(), ScopexDriverError> {
        self.arbitrary = Some(WaveformTable::try_from(samples)?);
        self.active = WaveformType::Arbitrary;
        Ok(())
    }

    /// The current selection.
    #[must_use]
    pub const fn active(&self) -> WaveformType {
        self.active
    }

    /// The table of the current selection.
    #[must_use]
    pub fn active_table(&self) -> &WaveformTable {
        // `active` is only `Arbitrary` once a table was loaded
        self.table(self.active).unwrap_or(&self.builtin[0])
    }

    /// The table of `ty`, if any.
    #[must_use]
    pub fn table(&self, ty: WaveformType) -> Option<&WaveformTable> {
        match ty {
            WaveformType::Arbitrary => self.arbitrary.as_ref(),
            ty => WaveformType::BUILTIN
                .iter()
                .position(|&b| b == ty)
                .map(|i| &self.builtin[i]),
        }
    }
}
