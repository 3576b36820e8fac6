use std::time::Duration;

use scopex_core::{common::Freq, link::Link, timer::Timer};
use scopex_driver::sweep::{SweepPlan, SweepStep};

use super::Session;

impl<L: Link, T: Timer<SweepStep>> Session<L, T> {
    /// Schedules a linear sweep of `steps + 1` frequencies from `start` to `end`, one every
    /// `interval`. Each step programs the frequency and runs the DDS.
    ///
    /// A pending sweep is cancelled first. Non-positive `steps` are ignored.
    #[tracing::instrument(skip(self))]
    pub fn start_sweep(
        &mut self,
        start: Freq<f64>,
        end: Freq<f64>,
        steps: i32,
        interval: Duration,
    ) {
        let plan = match SweepPlan::new(start, end, steps, interval) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::debug!("Ignoring sweep: {}", e);
                return;
            }
        };

        self.cancel_sweep();
        self.sweep_tasks = plan
            .steps()
            .map(|step| self.timer.schedule_once(step.delay, step))
            .collect();
        tracing::debug!("Scheduled {} sweep steps", self.sweep_tasks.len());

        self.set_status(format!(
            "Sweep started from {} to {} Hz",
            start.hz(),
            end.hz()
        ));
    }

    /// Cancels the pending sweep steps and stops the DDS.
    #[tracing::instrument(skip(self))]
    pub fn stop_sweep(&mut self) {
        self.cancel_sweep();
        self.stop_generator();
        self.set_status("Sweep stopped");
    }

    /// Executes a sweep step fired by the timer.
    #[tracing::instrument(skip(self))]
    pub fn on_timer(&mut self, step: SweepStep) {
        self.set_frequency(step.freq);
        self.run_generator();
    }

    fn cancel_sweep(&mut self) {
        let cancelled = std::mem::take(&mut self.sweep_tasks)
            .into_iter()
            .filter(|&id| self.timer.cancel(id))
            .count();
        if cancelled > 0 {
            tracing::debug!("Cancelled {} sweep steps", cancelled);
        }
    }
}
