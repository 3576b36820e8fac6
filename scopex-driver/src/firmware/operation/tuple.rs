use super::Operation;

impl<O1: Operation, O2: Operation> Operation for (O1, O2) {
    fn required_size(&self) -> usize {
        if self.0.is_done() {
            self.1.required_size()
        } else {
            self.0.required_size()
        }
    }

    fn pack(&mut self, tx: &mut [u8]) -> usize {
        if self.0.is_done() {
            self.1.pack(tx)
        } else {
            self.0.pack(tx)
        }
    }

    fn is_done(&self) -> bool {
        self.0.is_done() && self.1.is_done()
    }
}
