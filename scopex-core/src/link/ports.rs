/// Lists the ports a [`Link`](super::Link) can be opened on.
pub trait PortEnumerator {
    /// Returns the names of the available ports.
    fn available_ports(&self) -> Vec<String>;
}

impl PortEnumerator for Box<dyn PortEnumerator + Send> {
    fn available_ports(&self) -> Vec<String> {
        self.as_ref().available_ports()
    }
}

impl PortEnumerator for Vec<String> {
    fn available_ports(&self) -> Vec<String> {
        self.clone()
    }
}
