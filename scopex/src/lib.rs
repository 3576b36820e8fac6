#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Host library for the scopex two-channel oscilloscope and DDS signal generator.
//!
//! A [`Session`] owns a [`Link`](scopex_core::link::Link) to the device and a
//! [`Timer`](scopex_core::timer::Timer) for frequency sweeps. Commands are methods on the
//! session; everything the device or the session reports comes back as a [`SessionEvent`] on
//! the channels returned by [`Session::subscribe`].

/// Error types.
pub mod error;
/// Links backed by the firmware emulator.
pub mod link;
/// A prelude.
pub mod prelude;
/// The session state machine.
pub mod session;

pub use scopex_core as core;
pub use scopex_driver as driver;

pub use session::{Session, SessionEvent, SessionOption};
