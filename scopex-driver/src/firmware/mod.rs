mod frame;
mod opcode;
/// Operations that pack commands into bytes.
pub mod operation;
/// Classification of device replies.
pub mod rx;

pub use frame::Frame;
pub use opcode::Opcode;
