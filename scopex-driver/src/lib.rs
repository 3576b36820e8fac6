#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! A protocol driver for the scopex oscilloscope and DDS signal generator.
//!
//! This crate builds the command frames understood by the device firmware, decodes its replies
//! and provides the signal processing needed to drive it: waveform tables, frequency
//! quantization, capture calibration and spectrum calculation.

/// Commands sent to the device.
pub mod datagram;
/// Spectrum and capture calibration.
pub mod dsp;
/// Error types.
pub mod error;
/// Firmware protocol definitions.
pub mod firmware;
/// Frequency sweep plans.
pub mod sweep;
/// DDS frequency quantization.
pub mod synthesizer;
/// DDS waveform tables.
pub mod waveform;

pub use scopex_core as core;
