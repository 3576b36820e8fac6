use super::{kHz, Freq, Hz, MHz};

impl core::ops::Mul<Hz> for f64 {
    type Output = Freq<f64>;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<kHz> for f64 {
    type Output = Freq<f64>;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Self::Output { freq: self * 1e3 }
    }
}

impl core::ops::Mul<MHz> for f64 {
    type Output = Freq<f64>;

    fn mul(self, _rhs: MHz) -> Self::Output {
        Self::Output { freq: self * 1e6 }
    }
}

impl From<Freq<u32>> for Freq<f64> {
    fn from(value: Freq<u32>) -> Self {
        Self {
            freq: value.freq as f64,
        }
    }
}
