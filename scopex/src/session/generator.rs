use scopex_core::{common::Freq, link::Link, timer::Timer};
use scopex_driver::{
    datagram::{Abort, DdsFrequency, DdsRun, WaveformUpload},
    sweep::SweepStep,
    synthesizer::quantize,
    waveform::WaveformType,
};

use super::Session;

impl<L: Link, T: Timer<SweepStep>> Session<L, T> {
    /// Selects the waveform played by the next [`Session::run_generator`].
    ///
    /// Accepts a [`WaveformType`] or its raw index; unknown indices select
    /// [`WaveformType::Sine`]. Selecting [`WaveformType::Arbitrary`] before an arbitrary table was
    /// loaded keeps the current table. The status reports the index as given.
    #[tracing::instrument(skip(self, ty))]
    pub fn set_waveform_type(&mut self, ty: impl Into<i32>) {
        let index = ty.into();
        let requested = WaveformType::from_index(index);
        let active = self.bank.select(requested);
        tracing::debug!("Waveform {} ({:?}) requested, {:?} active", index, requested, active);
        self.set_status(format!("Waveform set to type {}", index));
    }

    /// Programs the DDS to the closest frequency it can produce.
    ///
    /// Non-positive frequencies are ignored.
    #[tracing::instrument(skip(self))]
    pub fn set_frequency(&mut self, freq: Freq<f64>) {
        let setting = match quantize(freq) {
            Ok(setting) => setting,
            Err(e) => {
                tracing::debug!("Ignoring frequency: {}", e);
                return;
            }
        };

        if !self.connected {
            self.set_status(format!("Frequency set to {} (not connected)", freq));
            return;
        }

        if self.dispatch(DdsFrequency::new(setting)) {
            self.set_status(format!("Set frequency to {}", setting.actual()));
        }
    }

    /// Uploads the selected table and starts the DDS.
    #[tracing::instrument(skip(self))]
    pub fn run_generator(&mut self) {
        if !self.connected {
            self.set_status("DDS started (not connected)");
            return;
        }

        let table = self.bank.active_table().clone();
        if self.dispatch((WaveformUpload::new(&table), DdsRun)) {
            self.set_status("DDS started");
        }
    }

    /// Stops the DDS.
    #[tracing::instrument(skip(self))]
    pub fn stop_generator(&mut self) {
        if self.dispatch(Abort) {
            self.set_status("DDS stopped");
        }
    }

    /// Replaces the arbitrary table and selects it.
    ///
    /// Empty tables and tables longer than 256 samples are ignored.
    #[tracing::instrument(skip(self, samples), fields(len = samples.len()))]
    pub fn load_arbitrary_waveform(&mut self, samples: &[u8]) {
        match self.bank.load_arbitrary(samples) {
            Ok(()) => self.set_status(format!(
                "Arbitrary waveform loaded ({} points)",
                samples.len()
            )),
            Err(e) => tracing::debug!("Ignoring waveform: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use scopex_core::common::{kHz, Hz};
    use scopex_driver::waveform::WaveformTable;

    use super::*;
    use crate::{
        link::AuditOption,
        session::{
            tests::{create_session, drain},
            SessionEvent,
        },
    };

    #[test]
    fn set_waveform_type() {
        let mut session = create_session(AuditOption::default());
        let mut rx = session.subscribe();

        session.set_waveform_type(WaveformType::Triangle);
        assert_eq!("Waveform set to type 2", session.status());
        assert_eq!(WaveformType::Triangle, session.waveforms().active());

        session.set_waveform_type(5);
        assert_eq!("Waveform set to type 5", session.status());
        assert_eq!(WaveformType::Triangle, session.waveforms().active());

        session.set_waveform_type(42);
        assert_eq!("Waveform set to type 42", session.status());
        assert_eq!(WaveformType::Sine, session.waveforms().active());

        assert_eq!(3, drain(&mut rx).len());
        assert!(session.link().written().is_empty());
    }

    #[test]
    fn set_frequency_disconnected() {
        let mut session = create_session(AuditOption::default());
        session.set_frequency(1. * kHz);
        assert_eq!("Frequency set to 1000 Hz (not connected)", session.status());
        assert!(session.link().written().is_empty());
    }

    #[rstest::rstest]
    #[case(0. * Hz)]
    #[case(-5. * Hz)]
    #[test]
    fn set_invalid_frequency(#[case] freq: Freq<f64>) -> anyhow::Result<()> {
        let mut session = create_session(AuditOption::default());
        session.set_frequency(freq);
        assert_eq!("Ready", session.status());

        session.connect("COM3")?;
        let mut rx = session.subscribe();
        session.set_frequency(freq);
        assert!(session.link().written().is_empty());
        assert!(drain(&mut rx).is_empty());
        Ok(())
    }

    #[test]
    fn set_frequency() -> anyhow::Result<()> {
        let mut session = create_session(AuditOption::default());
        session.connect("COM3")?;

        session.set_frequency(1. * kHz);

        assert_eq!(
            vec![vec![b'p', 0x00, 0x80], vec![b'N', 0x01, 0x06]],
            session.link().written()
        );
        assert_eq!("Set frequency to 999.45068359375 Hz", session.status());
        assert_eq!(128, session.link().dds().divider());
        assert_eq!(262, session.link().dds().phase_step());
        Ok(())
    }

    #[test]
    fn run_and_stop_generator() -> anyhow::Result<()> {
        let mut session = create_session(AuditOption::default());
        session.run_generator();
        assert_eq!("DDS started (not connected)", session.status());
        session.stop_generator();
        assert_eq!("DDS started (not connected)", session.status());

        session.connect("COM3")?;
        session.set_waveform_type(WaveformType::Square);
        session.run_generator();
        assert_eq!("DDS started", session.status());
        assert_eq!(2, session.link().written().len());
        assert_eq!(259, session.link().written()[0].len());
        assert_eq!(vec![b'f', 0x00, 0x00], session.link().written()[1]);
        assert!(session.link().dds().is_running());
        assert_eq!(WaveformTable::square().as_slice(), session.link().dds().table());

        session.stop_generator();
        assert_eq!("DDS stopped", session.status());
        assert!(!session.link().dds().is_running());
        Ok(())
    }

    #[test]
    fn load_arbitrary_waveform() -> anyhow::Result<()> {
        let mut session = create_session(AuditOption::default());
        let mut rx = session.subscribe();

        session.load_arbitrary_waveform(&[0x10; 257]);
        assert_eq!("Ready", session.status());
        assert!(drain(&mut rx).is_empty());
        assert_eq!(WaveformType::Sine, session.waveforms().active());

        let samples = (0..=255).rev().collect::<Vec<u8>>();
        session.load_arbitrary_waveform(&samples);
        assert_eq!("Arbitrary waveform loaded (256 points)", session.status());
        assert_eq!(
            vec![SessionEvent::StatusChanged(
                "Arbitrary waveform loaded (256 points)".to_string()
            )],
            drain(&mut rx)
        );
        assert_eq!(WaveformType::Arbitrary, session.waveforms().active());

        session.connect("COM3")?;
        session.run_generator();
        assert_eq!(samples, session.link().dds().table());
        Ok(())
    }

    #[test]
    fn empty_arbitrary_waveform_is_ignored() -> anyhow::Result<()> {
        let mut session = create_session(AuditOption::default());
        session.connect("COM3")?;
        let mut rx = session.subscribe();

        session.load_arbitrary_waveform(&[]);
        assert_eq!("Connected to COM3", session.status());
        assert!(drain(&mut rx).is_empty());
        assert_eq!(WaveformType::Sine, session.waveforms().active());
        assert_eq!(None, session.waveforms().table(WaveformType::Arbitrary));

        session.run_generator();
        assert_eq!("DDS started", session.status());
        assert!(session.link().dds().is_running());
        assert_eq!(WaveformTable::sine().as_slice(), session.link().dds().table());

        session.set_digital_outputs(0x0F);
        assert_eq!(0x0F, session.link().digital_outputs());
        Ok(())
    }
}
