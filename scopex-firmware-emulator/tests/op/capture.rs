use scopex_driver::{
    core::common::CAPTURE_FRAME_SIZE,
    datagram::*,
    firmware::rx::RxFrame,
};
use scopex_firmware_emulator::DeviceEmulator;

use crate::send;

#[test]
fn single_capture() {
    let mut cpu = DeviceEmulator::new();
    send(&mut cpu, Capture::single());

    assert!(!cpu.is_capturing());
    let reply = cpu.rx().expect("capture reply");
    assert_eq!(CAPTURE_FRAME_SIZE, reply.len());
    assert!(reply.iter().all(|&b| b == 0x80));
    assert_eq!(None, cpu.rx());
}

#[test]
fn continuous_capture_until_abort() {
    let mut cpu = DeviceEmulator::new();
    send(&mut cpu, Capture::continuous());

    assert!(cpu.is_capturing());
    (0..3).for_each(|_| assert_eq!(Some(CAPTURE_FRAME_SIZE), cpu.rx().map(|r| r.len())));

    send(&mut cpu, Abort);
    assert!(!cpu.is_capturing());
    assert_eq!(None, cpu.rx());
}

#[test]
fn probe_with_gain() {
    let mut cpu = DeviceEmulator::new();
    cpu.connect_probe(Channel::Ch1, vec![0x90, 0x70]);
    cpu.connect_probe(Channel::Ch2, vec![0xFF]);
    send(&mut cpu, (ChannelGain::new(Channel::Ch1, 2.), Capture::single()));

    let reply = cpu.rx().expect("capture reply");
    assert_eq!([0xA0, 0x60, 0xA0, 0x60], reply[..4]);
    assert!(reply[200..].iter().all(|&b| b == 0xFF));

    let Some(RxFrame::Capture(data)) = RxFrame::classify(&reply) else {
        panic!("not a capture");
    };
    assert_eq!(200, data.ch1.len());
    assert_eq!(200, data.ch2.len());
    approx::assert_abs_diff_eq!(10., data.ch2[0].y);
}
