//! The cursor-based buffer.
//!
//! - [`ByteBuffer`] - Fixed-capacity storage with position/limit bookkeeping

mod accessors;
mod byte_buffer;

pub use byte_buffer::ByteBuffer;
