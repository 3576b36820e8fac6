use std::time::Duration;

use itertools::{Itertools, MinMaxResult};
use scopex::prelude::*;

use super::{wait_for, DemoSession};

fn peak_to_peak(points: &[Point]) -> f64 {
    match points.iter().map(|p| p.y).minmax_by(f64::total_cmp) {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0.,
    }
}

fn report(capture: &CaptureData) {
    println!(
        "CH1: {} samples, {:.3} Vpp",
        capture.ch1.len(),
        peak_to_peak(&capture.ch1)
    );
    println!(
        "CH2: {} samples, {:.3} Vpp",
        capture.ch2.len(),
        peak_to_peak(&capture.ch2)
    );
}

fn report_spectrum(spectrum: &[Point]) {
    if let Some(peak) = spectrum
        .iter()
        .skip(1)
        .max_by(|a, b| a.y.total_cmp(&b.y))
    {
        println!("Spectrum peak: {:.1} Hz ({:.3})", peak.x, peak.y);
    }
}

pub async fn single_capture<L: Link>(session: &mut DemoSession<L>) -> anyhow::Result<()> {
    session.configure_scope(ScopeConfig::DEFAULT.with_gain(Channel::Ch1, 2.));
    session.set_frequency(50. * Hz);
    session.run_generator();

    let mut rx = session.subscribe();
    if let Some(capture) = session.run_capture(false) {
        report(&capture);
        return Ok(());
    }

    match wait_for(session, &mut rx, Duration::from_secs(1), |e| {
        matches!(e, SessionEvent::DftComputed(_))
    })
    .await?
    {
        Some(SessionEvent::DftComputed(spectrum)) => report_spectrum(&spectrum),
        _ => println!("No capture received"),
    }
    Ok(())
}

pub async fn continuous_capture<L: Link>(session: &mut DemoSession<L>) -> anyhow::Result<()> {
    let mut rx = session.subscribe();
    session.run_capture(true);

    for _ in 0..5 {
        match wait_for(session, &mut rx, Duration::from_secs(1), |e| {
            matches!(e, SessionEvent::CaptureDataReceived(_))
        })
        .await?
        {
            Some(SessionEvent::CaptureDataReceived(capture)) => report(&capture),
            _ => {
                println!("No capture received");
                break;
            }
        }
    }

    session.stop_capture();
    Ok(())
}
