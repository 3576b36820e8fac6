use std::time::Duration;

use scopex::{
    link::{Audit, AuditOption},
    prelude::*,
};

#[test]
fn audit_records_writes() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption::default());
    link.open("COM3", &LinkConfig::DEFAULT)?;

    assert_eq!(3, link.send(&[b'G', 0x01, 0x04])?);
    assert!(link.wait_until_written(Duration::ZERO));
    assert_eq!(vec![vec![b'G', 0x01, 0x04]], link.written());
    assert_eq!(4, link.gain_code(Channel::Ch2));

    link.clear_written();
    assert!(link.written().is_empty());
    Ok(())
}

#[test]
fn audit_injected_replies_come_first() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption::default());
    link.open("COM3", &LinkConfig::DEFAULT)?;
    link.set_digital_inputs(0x0F);
    link.send(&[b'i', 0x00, 0x00])?;
    link.inject(vec![0xAA, 0xBB]);

    let mut rx = Vec::new();
    assert_eq!(2, link.receive(&mut rx)?);
    assert_eq!(1, link.receive(&mut rx)?);
    assert_eq!(vec![0xAA, 0xBB, 0x0F], rx);
    assert_eq!(0, link.receive(&mut rx)?);
    Ok(())
}

#[test]
fn audit_failures() -> anyhow::Result<()> {
    let mut link = Audit::new(AuditOption {
        unavailable_ports: vec!["COM1".to_string()],
        write_timeout: true,
        broken: true,
    });
    assert_eq!(
        Err(LinkError::open("Could not open COM1")),
        link.open("COM1", &LinkConfig::DEFAULT)
    );
    assert!(!link.is_open());

    link.open("COM2", &LinkConfig::DEFAULT)?;
    assert_eq!(Err(LinkError::io("broken")), link.send(&[b'A', 0, 0]));
    assert!(link.written().is_empty());

    link.repair();
    link.send(&[b'A', 0, 0])?;
    assert!(!link.wait_until_written(Duration::from_millis(10)));

    link.set_write_timeout(false);
    assert!(link.wait_until_written(Duration::from_millis(10)));
    Ok(())
}
