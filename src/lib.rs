//! wirebuf
//!
//! A cursor-based binary buffer for Rust.
//!
//! [`ByteBuffer`] pairs a fixed-capacity byte region with a mutable cursor
//! (`position`) and a visibility bound (`limit`), and encodes/decodes
//! fixed-width primitives big-endian. It is designed as a small, composable
//! primitive for:
//!
//! - hand-rolled wire protocols
//! - binary file formats
//! - incremental parsing of framed payloads
//! - staging regions for socket reads/writes
//!
//! The crate intentionally:
//! - does NOT define a framing protocol
//! - does NOT grow or reallocate storage (capacity is fixed at construction)
//! - does NOT manage concurrency
//! - does NOT validate bounds (range discipline is a caller contract)
//!
//! It only does one thing: **typed values in ↔ big-endian bytes out, through a cursor**
//!
//! # Writing then reading
//!
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::zeroed(8);
//! buf.insert_u32(1);
//! buf.insert_u32(2);
//!
//! buf.flip();
//! assert_eq!(buf.extract_u32(), 1);
//! assert_eq!(buf.extract_u32(), 2);
//! assert!(!buf.has_remaining());
//! ```
//!
//! # Peeking without consuming
//!
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::copy_from_slice(&[0x00, 0x2A]);
//! assert_eq!(buf.peek_u16(), 42);
//! assert_eq!(buf.position(), 0);
//! assert_eq!(buf.extract_u16(), 42);
//! assert_eq!(buf.position(), 2);
//! ```
//!
//! # Bounds contract
//!
//! No operation validates ranges. Out-of-bounds access panics through the
//! underlying slice indexing, and `set_position`/`set_limit` accept any value
//! (checked by `debug_assert!` only). Callers consult [`ByteBuffer::remaining`]
//! and [`ByteBuffer::capacity`] before accessing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod codec; // internal big-endian primitive codecs

//
// Public surface (intentionally tiny)
//

pub use buffer::ByteBuffer;
