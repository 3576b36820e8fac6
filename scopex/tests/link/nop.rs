use scopex::prelude::*;

#[test]
fn nop_drives_the_emulator() -> anyhow::Result<()> {
    let mut session = Session::new(
        Nop::new(),
        ManualTimer::<SweepStep>::new(),
        Vec::<String>::new(),
        SessionOption::default(),
    );
    session.connect("COM3")?;

    session.configure_scope(ScopeConfig::DEFAULT.with_trigger_level(0x0123));
    assert_eq!(0x0123, session.link().emulator().trigger_level());

    session.set_frequency(1. * kHz);
    session.run_generator();
    let dds = session.link().emulator().dds();
    assert!(dds.is_running());
    approx::assert_abs_diff_eq!(999.45068359375, dds.output_frequency().hz());

    session.stop_generator();
    assert!(!session.link().emulator().dds().is_running());
    Ok(())
}
