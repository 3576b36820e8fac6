use derive_more::Display;
use derive_new::new;
use thiserror::Error;

/// The category of a [`LinkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkErrorKind {
    /// The port could not be opened.
    Open,
    /// A read or write failed.
    Io,
    /// The port went away. The link cannot be used anymore.
    Resource,
}

#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
/// An error produced by the link.
pub struct LinkError {
    kind: LinkErrorKind,
    #[new(into)]
    msg: String,
}

impl LinkError {
    /// Creates a new [`LinkError`] of kind [`LinkErrorKind::Open`].
    pub fn open(msg: impl Into<String>) -> Self {
        Self::new(LinkErrorKind::Open, msg)
    }

    /// Creates a new [`LinkError`] of kind [`LinkErrorKind::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(LinkErrorKind::Io, msg)
    }

    /// Creates a new [`LinkError`] of kind [`LinkErrorKind::Resource`].
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::new(LinkErrorKind::Resource, msg)
    }

    /// The category of the error.
    #[must_use]
    pub const fn kind(&self) -> LinkErrorKind {
        self.kind
    }

    /// Returns `true` if the link must be closed after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.kind, LinkErrorKind::Resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(LinkError::open("busy"), LinkErrorKind::Open, false)]
    #[case(LinkError::io("broken pipe"), LinkErrorKind::Io, false)]
    #[case(LinkError::resource("unplugged"), LinkErrorKind::Resource, true)]
    #[test]
    fn kind_(#[case] err: LinkError, #[case] kind: LinkErrorKind, #[case] fatal: bool) {
        assert_eq!(kind, err.kind());
        assert_eq!(fatal, err.is_fatal());
    }

    #[test]
    fn display() {
        assert_eq!(
            "No such file or directory",
            LinkError::open("No such file or directory").to_string()
        );
    }
}
