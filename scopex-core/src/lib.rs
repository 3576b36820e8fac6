#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for scopex.

/// Common constants and units.
pub mod common;
/// A interface to the device.
pub mod link;
/// Cancellable one-shot timers.
pub mod timer;
