use scopex_core::common::{DFT_SAMPLE_RATE, PI};

use super::Point;

/// One-sided magnitude spectrum of a trace.
///
/// Only the `y` values of `points` are used. The result has `points.len() / 2` bins; bin `k` is
/// at `k * 1000 / N` Hz, i.e. the input is assumed to be sampled at 1 kHz regardless of the
/// sample rate configured on the device. The amplitude of a sine that falls on a bin is
/// preserved.
#[must_use]
pub fn dft(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    let fs = DFT_SAMPLE_RATE.hz() as f64;
    (0..n / 2)
        .map(|k| {
            let (re, im) = points
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(re, im), (i, p)| {
                    let angle = 2.0 * PI * (k * i) as f64 / n as f64;
                    (re + p.y * angle.cos(), im - p.y * angle.sin())
                });
            let magnitude = 2.0 * (re * re + im * im).sqrt() / n as f64;
            Point::new(k as f64 * fs / n as f64, magnitude)
        })
        .collect()
}
