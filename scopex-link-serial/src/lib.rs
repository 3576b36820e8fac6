#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! A [`Link`](scopex_core::link::Link) to the device over a serial port.

mod convert;
mod link;
mod option;
mod ports;

pub use link::SerialLink;
pub use option::SerialLinkOption;
pub use ports::SerialPorts;
