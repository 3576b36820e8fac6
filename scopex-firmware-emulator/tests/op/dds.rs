use scopex_driver::{
    core::common::{kHz, Hz},
    datagram::*,
    synthesizer::quantize,
    waveform::WaveformTable,
};
use scopex_firmware_emulator::DeviceEmulator;

use crate::send;

#[test]
fn program_frequency() -> anyhow::Result<()> {
    let mut cpu = DeviceEmulator::new();
    let q = quantize(1. * kHz)?;
    send(&mut cpu, DdsFrequency::new(q));

    assert_eq!(128, cpu.dds().divider());
    assert_eq!(262, cpu.dds().phase_step());
    assert_eq!(q.actual(), cpu.dds().output_frequency());
    Ok(())
}

#[rstest::rstest]
#[case(WaveformTable::sine())]
#[case(WaveformTable::triangle())]
#[case(WaveformTable::new(vec![1, 2, 3]).expect("valid table"))]
#[case(WaveformTable::new(vec![0x42; 255]).expect("valid table"))]
#[test]
fn upload_and_run(#[case] table: WaveformTable) {
    let mut cpu = DeviceEmulator::new();
    send(&mut cpu, (WaveformUpload::new(&table), DdsRun));

    assert_eq!(2, cpu.num_frames());
    assert_eq!(table.as_slice(), cpu.dds().table());
    assert!(cpu.dds().is_running());
}

#[test]
fn upload_split_across_writes() {
    let mut cpu = DeviceEmulator::new();
    let table = WaveformTable::ramp_up();
    let mut bytes = vec![b'r', 0x00, 0x00];
    bytes.extend_from_slice(table.as_slice());

    cpu.send(&bytes[..100]);
    assert_eq!(0, cpu.num_frames());
    assert!(cpu.dds().table().is_empty());

    cpu.send(&bytes[100..]);
    assert_eq!(1, cpu.num_frames());
    assert_eq!(table.as_slice(), cpu.dds().table());
}

#[test]
fn loopback() -> anyhow::Result<()> {
    let mut cpu = DeviceEmulator::new();
    let table = WaveformTable::square();
    send(
        &mut cpu,
        (
            DdsFrequency::new(quantize(20000. * Hz)?),
            (WaveformUpload::new(&table), DdsRun),
        ),
    );
    send(&mut cpu, Capture::single());

    let reply = cpu.rx().expect("capture reply");
    assert!(reply[..200].contains(&5));
    assert!(reply[..200].contains(&250));

    send(&mut cpu, (Abort, Capture::single()));
    assert!(!cpu.dds().is_running());
    let reply = cpu.rx().expect("capture reply");
    assert!(reply[..200].iter().all(|&b| b == 0x80));
    Ok(())
}
