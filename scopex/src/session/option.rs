use std::time::Duration;

use scopex_core::common::DEFAULT_TIMEOUT;

/// Settings of a [`Session`](super::Session).
///
/// The line settings are not configurable; [`Session::connect`](super::Session::connect) always
/// opens the port with [`LinkConfig::DEFAULT`](scopex_core::link::LinkConfig::DEFAULT).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOption {
    /// How long a write may take to drain.
    pub write_timeout: Duration,
}

impl SessionOption {
    /// A write timeout of [`DEFAULT_TIMEOUT`].
    pub const DEFAULT: Self = Self {
        write_timeout: DEFAULT_TIMEOUT,
    };

    /// Sets the write timeout.
    #[must_use]
    pub const fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }
}

impl Default for SessionOption {
    fn default() -> Self {
        Self::DEFAULT
    }
}
