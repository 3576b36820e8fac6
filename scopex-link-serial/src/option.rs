use std::time::Duration;

/// Settings of a [`SerialLink`](crate::SerialLink) that the device does not dictate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialLinkOption {
    /// How long a blocking read may wait.
    pub read_timeout: Duration,
    /// Interval at which the output buffer is checked while waiting for a write to drain.
    pub drain_interval: Duration,
}

impl SerialLinkOption {
    /// A read timeout of 10 ms and a drain interval of 1 ms.
    pub const DEFAULT: Self = Self {
        read_timeout: Duration::from_millis(10),
        drain_interval: Duration::from_millis(1),
    };

    /// Sets the read timeout.
    #[must_use]
    pub const fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Sets the drain interval.
    #[must_use]
    pub const fn with_drain_interval(mut self, interval: Duration) -> Self {
        self.drain_interval = interval;
        self
    }
}

impl Default for SerialLinkOption {
    fn default() -> Self {
        Self::DEFAULT
    }
}
