use std::time::Duration;

use scopex::prelude::*;

use super::{wait_for, DemoSession};

pub async fn digital_io<L: Link>(session: &mut DemoSession<L>) -> anyhow::Result<()> {
    session.set_digital_outputs(0b1010_0101);

    let mut rx = session.subscribe();
    let demo = session.read_digital_inputs();
    let inputs = if session.is_connected() {
        match wait_for(session, &mut rx, Duration::from_secs(1), |e| {
            matches!(e, SessionEvent::DigitalInputsChanged(_))
        })
        .await?
        {
            Some(SessionEvent::DigitalInputsChanged(bits)) => bits,
            _ => {
                println!("No reply received");
                return Ok(());
            }
        }
    } else {
        demo
    };
    println!("Digital inputs: {:08b}", inputs);
    Ok(())
}
