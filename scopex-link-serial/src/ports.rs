use scopex_core::link::PortEnumerator;

/// Lists the serial ports of the system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialPorts;

impl PortEnumerator for SerialPorts {
    fn available_ports(&self) -> Vec<String> {
        match serialport::available_ports() {
            Ok(ports) => ports.into_iter().map(|p| p.port_name).collect(),
            Err(e) => {
                tracing::warn!("Failed to enumerate serial ports: {}", e);
                Vec::new()
            }
        }
    }
}
