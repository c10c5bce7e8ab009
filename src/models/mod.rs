pub mod claude;
pub mod message;

pub use message::*;
