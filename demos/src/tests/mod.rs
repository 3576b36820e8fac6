mod capture;
mod gpio;
mod sweep;

pub use test_runner::run;

use std::time::Duration;

use scopex::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;

pub type DemoSession<L> = Session<L, TokioTimer<SweepStep>>;

/// Polls the link until an event matching `pred` arrives or `timeout` elapses.
pub async fn wait_for<L: Link>(
    session: &mut DemoSession<L>,
    rx: &mut UnboundedReceiver<SessionEvent>,
    timeout: Duration,
    pred: impl Fn(&SessionEvent) -> bool,
) -> anyhow::Result<Option<SessionEvent>> {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        session.poll()?;
        while let Ok(event) = rx.try_recv() {
            if pred(&event) {
                return Ok(Some(event));
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    Ok(None)
}
