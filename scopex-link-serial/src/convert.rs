use scopex_core::link::{DataBits, FlowControl, LinkError, Parity, StopBits};

pub(crate) const fn data_bits(v: DataBits) -> serialport::DataBits {
    match v {
        DataBits::Five => serialport::DataBits::Five,
        DataBits::Six => serialport::DataBits::Six,
        DataBits::Seven => serialport::DataBits::Seven,
        DataBits::Eight => serialport::DataBits::Eight,
    }
}

pub(crate) const fn parity(v: Parity) -> serialport::Parity {
    match v {
        Parity::None => serialport::Parity::None,
        Parity::Odd => serialport::Parity::Odd,
        Parity::Even => serialport::Parity::Even,
    }
}

pub(crate) const fn stop_bits(v: StopBits) -> serialport::StopBits {
    match v {
        StopBits::One => serialport::StopBits::One,
        StopBits::Two => serialport::StopBits::Two,
    }
}

pub(crate) const fn flow_control(v: FlowControl) -> serialport::FlowControl {
    match v {
        FlowControl::None => serialport::FlowControl::None,
        FlowControl::Software => serialport::FlowControl::Software,
        FlowControl::Hardware => serialport::FlowControl::Hardware,
    }
}

/// Errors after which the port is gone.
fn is_resource_error(kind: std::io::ErrorKind) -> bool {
    use std::io::ErrorKind::*;
    matches!(
        kind,
        BrokenPipe | NotConnected | NotFound | PermissionDenied | UnexpectedEof
    )
}

pub(crate) fn io_error(e: std::io::Error) -> LinkError {
    if is_resource_error(e.kind()) {
        LinkError::resource(e.to_string())
    } else {
        LinkError::io(e.to_string())
    }
}

pub(crate) fn serial_error(e: serialport::Error) -> LinkError {
    match e.kind() {
        serialport::ErrorKind::NoDevice => LinkError::resource(e.to_string()),
        serialport::ErrorKind::Io(kind) if is_resource_error(kind) => {
            LinkError::resource(e.to_string())
        }
        _ => LinkError::io(e.to_string()),
    }
}
