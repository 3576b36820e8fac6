use super::Datagram;

impl<D1, D2> Datagram for (D1, D2)
where
    D1: Datagram,
    D2: Datagram,
{
    type O = (D1::O, D2::O);

    fn operation(self) -> Self::O {
        (self.0.operation(), self.1.operation())
    }
}
