use std::time::Duration;

use scopex::prelude::*;

use super::DemoSession;

pub async fn sweep<L: Link>(
    session: &mut DemoSession<L>,
    events: &mut TimerEvents<SweepStep>,
) -> anyhow::Result<()> {
    const STEPS: i32 = 9;

    session.set_waveform_type(WaveformType::Triangle);
    session.start_sweep(100. * Hz, 1. * kHz, STEPS, Duration::from_millis(200));
    println!("{}", session.status());

    for _ in 0..=STEPS {
        let Some(step) = events.recv().await else {
            break;
        };
        session.on_timer(step);
        println!("{:>8.1} Hz: {}", step.freq.hz(), session.status());
    }

    session.stop_sweep();
    Ok(())
}
