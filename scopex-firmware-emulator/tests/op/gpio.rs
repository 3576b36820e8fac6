use scopex_driver::datagram::*;
use scopex_firmware_emulator::DeviceEmulator;

use crate::send;

#[rstest::rstest]
#[case(0x00)]
#[case(0x05)]
#[case(0xFF)]
#[test]
fn send_digital_output(#[case] mask: u8) {
    let mut cpu = DeviceEmulator::new();
    send(&mut cpu, DigitalOutput::new(mask));
    assert_eq!(mask, cpu.digital_outputs());
    assert!(!cpu.has_reply());
}

#[test]
fn read_digital_inputs() {
    let mut cpu = DeviceEmulator::new();
    cpu.set_digital_inputs(0b1010_0001);

    send(&mut cpu, ReadDigitalInputs);

    assert!(cpu.has_reply());
    assert_eq!(Some(vec![0b1010_0001]), cpu.rx());
    assert_eq!(None, cpu.rx());
}
