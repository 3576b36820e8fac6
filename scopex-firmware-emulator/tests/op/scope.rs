use scopex_driver::datagram::*;
use scopex_firmware_emulator::DeviceEmulator;

use crate::send;

#[test]
fn send_scope_config() {
    let mut cpu = DeviceEmulator::new();

    let config = ScopeConfig::DEFAULT
        .with_trigger_mode(2)
        .with_trigger_polarity(1)
        .with_display_mode(3)
        .with_gain(Channel::Ch1, 4.)
        .with_gain(Channel::Ch2, 0.5)
        .with_offset(Channel::Ch1, 0x1234)
        .with_offset(Channel::Ch2, 0x5678)
        .with_trigger_level(0x0180)
        .with_sample_rate(6);
    send(&mut cpu, config);

    assert_eq!(9, cpu.num_frames());
    assert_eq!(2, cpu.trigger_mode());
    assert_eq!(1, cpu.trigger_polarity());
    assert_eq!(3, cpu.display_mode());
    assert_eq!(3, cpu.gain_code(Channel::Ch1));
    assert_eq!(0, cpu.gain_code(Channel::Ch2));
    assert_eq!(4., cpu.gain(Channel::Ch1));
    assert_eq!(0.5, cpu.gain(Channel::Ch2));
    assert_eq!(0x1234, cpu.offset(Channel::Ch1));
    assert_eq!(0x5678, cpu.offset(Channel::Ch2));
    assert_eq!(0x0180, cpu.trigger_level());
    assert_eq!(6, cpu.sample_rate());
}

#[rstest::rstest]
#[case(0, 0.5)]
#[case(1, 1.)]
#[case(5, 16.)]
#[case(1, 3.)]
#[test]
fn send_channel_gain(#[case] expect: u8, #[case] gain: f64) {
    let mut cpu = DeviceEmulator::new();
    send(&mut cpu, ChannelGain::new(Channel::Ch2, gain));
    assert_eq!(expect, cpu.gain_code(Channel::Ch2));
    assert_eq!(1, cpu.gain_code(Channel::Ch1));
}

#[test]
fn send_single_settings() {
    let mut cpu = DeviceEmulator::new();
    send(
        &mut cpu,
        (
            (TriggerMode(1), TriggerPolarity(1)),
            ((DisplayMode(2), SampleRate(4)), ChannelOffset::new(Channel::Ch2, 7)),
        ),
    );
    assert_eq!(5, cpu.num_frames());
    assert_eq!(1, cpu.trigger_mode());
    assert_eq!(1, cpu.trigger_polarity());
    assert_eq!(2, cpu.display_mode());
    assert_eq!(4, cpu.sample_rate());
    assert_eq!(0, cpu.offset(Channel::Ch1));
    assert_eq!(7, cpu.offset(Channel::Ch2));
}
