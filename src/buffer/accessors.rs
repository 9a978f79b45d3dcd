//! Typed accessors for [`ByteBuffer`].
//!
//! Every fixed-width kind gets the same five-operation contract:
//!
//! - `set_*(position, value)` / `get_*(position)` - absolute, cursor untouched
//! - `insert_*(value)` - write at the cursor, advance by the encoded width
//! - `extract_*()` - peek then remove
//! - `peek_*()` - read at the cursor without moving it
//! - `remove_*()` - advance by the encoded width without reading
//!
//! Multi-byte encodings are big-endian. Two kinds deviate from the obvious
//! mapping and must stay that way for wire compatibility:
//!
//! - `i8` is offset-biased (stored byte = `value - i8::MIN`), not two's
//!   complement - unlike `i16`/`i32`/`i64`.
//! - `bool` decodes byte `1` as `true` and every other value as `false`.
//!
//! Byte runs (`*_bytes` / `*_byte_array`) are variable-width: writes take the
//! length from the source slice, reads take an explicit length. The two are
//! matched by caller convention only.

use bytes::Bytes;

use super::ByteBuffer;
use crate::codec::Primitive;

//
// Generic core - one unchecked read/write path shared by every kind
//

impl ByteBuffer {
    fn put_at<T: Primitive>(&mut self, position: usize, value: T) {
        value.encode(&mut self.storage_mut()[position..position + T::WIDTH]);
    }

    fn read_at<T: Primitive>(&self, position: usize) -> T {
        T::decode(&self.storage()[position..position + T::WIDTH])
    }

    fn push<T: Primitive>(&mut self, value: T) {
        self.put_at(self.position(), value);
        self.advance(T::WIDTH);
    }

    fn take<T: Primitive>(&mut self) -> T {
        let value = self.read_at(self.position());
        self.advance(T::WIDTH);
        value
    }
}

macro_rules! primitive_accessors {
    ($ty:ty, $label:literal, $set:ident, $get:ident, $insert:ident, $extract:ident, $peek:ident, $remove:ident) => {
        impl ByteBuffer {
            #[doc = concat!("Writes a `", $label, "` at the given offset. The cursor does not move.")]
            pub fn $set(&mut self, position: usize, value: $ty) {
                self.put_at(position, value);
            }

            #[doc = concat!("Reads a `", $label, "` at the given offset. The cursor does not move.")]
            pub fn $get(&self, position: usize) -> $ty {
                self.read_at(position)
            }

            #[doc = concat!("Writes a `", $label, "` at the cursor and advances it by the encoded width.")]
            pub fn $insert(&mut self, value: $ty) {
                self.push(value);
            }

            #[doc = concat!("Reads a `", $label, "` at the cursor and advances it by the encoded width.")]
            pub fn $extract(&mut self) -> $ty {
                self.take()
            }

            #[doc = concat!("Reads a `", $label, "` at the cursor without moving it.")]
            pub fn $peek(&self) -> $ty {
                self.read_at(self.position())
            }

            #[doc = concat!("Advances the cursor past one `", $label, "` without reading it.")]
            pub fn $remove(&mut self) {
                self.advance(<$ty as Primitive>::WIDTH);
            }
        }
    };
}

primitive_accessors!(u8, "u8", set_u8, get_u8, insert_u8, extract_u8, peek_u8, remove_u8);
primitive_accessors!(i8, "i8", set_i8, get_i8, insert_i8, extract_i8, peek_i8, remove_i8);
primitive_accessors!(u16, "u16", set_u16, get_u16, insert_u16, extract_u16, peek_u16, remove_u16);
primitive_accessors!(i16, "i16", set_i16, get_i16, insert_i16, extract_i16, peek_i16, remove_i16);
primitive_accessors!(u32, "u32", set_u32, get_u32, insert_u32, extract_u32, peek_u32, remove_u32);
primitive_accessors!(i32, "i32", set_i32, get_i32, insert_i32, extract_i32, peek_i32, remove_i32);
primitive_accessors!(u64, "u64", set_u64, get_u64, insert_u64, extract_u64, peek_u64, remove_u64);
primitive_accessors!(i64, "i64", set_i64, get_i64, insert_i64, extract_i64, peek_i64, remove_i64);
primitive_accessors!(f32, "f32", set_f32, get_f32, insert_f32, extract_f32, peek_f32, remove_f32);
primitive_accessors!(f64, "f64", set_f64, get_f64, insert_f64, extract_f64, peek_f64, remove_f64);
primitive_accessors!(bool, "bool", set_bool, get_bool, insert_bool, extract_bool, peek_bool, remove_bool);

//
// Byte runs - variable width, caller-supplied length on the read side
//

impl ByteBuffer {
    /// Writes `source.len()` raw bytes at the given offset. The cursor does
    /// not move.
    pub fn set_bytes(&mut self, position: usize, source: &[u8]) {
        self.storage_mut()[position..position + source.len()].copy_from_slice(source);
    }

    /// Copies `length` raw bytes at the given offset into an independent
    /// immutable sequence. The cursor does not move.
    pub fn get_bytes(&self, position: usize, length: usize) -> Bytes {
        Bytes::copy_from_slice(&self.storage()[position..position + length])
    }

    /// Copies `length` raw bytes at the given offset into an independent
    /// mutable byte vector. The cursor does not move.
    pub fn get_byte_array(&self, position: usize, length: usize) -> Vec<u8> {
        self.storage()[position..position + length].to_vec()
    }

    /// Writes `source.len()` raw bytes at the cursor and advances it by that
    /// length.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::zeroed(8);
    /// buf.insert_bytes(b"abc");
    /// assert_eq!(buf.position(), 3);
    /// ```
    pub fn insert_bytes(&mut self, source: &[u8]) {
        self.set_bytes(self.position(), source);
        self.advance(source.len());
    }

    /// Reads `length` raw bytes at the cursor into an independent immutable
    /// sequence and advances the cursor by that length.
    ///
    /// `length` is matched against what was written by convention only; a
    /// mismatch silently yields different bytes than were inserted.
    pub fn extract_bytes(&mut self, length: usize) -> Bytes {
        let result = self.peek_bytes(length);
        self.remove_bytes(length);
        result
    }

    /// Reads `length` raw bytes at the cursor into an independent mutable
    /// byte vector and advances the cursor by that length.
    pub fn extract_byte_array(&mut self, length: usize) -> Vec<u8> {
        let result = self.peek_byte_array(length);
        self.remove_bytes(length);
        result
    }

    /// Reads `length` raw bytes at the cursor without moving it (immutable
    /// flavor).
    pub fn peek_bytes(&self, length: usize) -> Bytes {
        self.get_bytes(self.position(), length)
    }

    /// Reads `length` raw bytes at the cursor without moving it (mutable
    /// flavor).
    pub fn peek_byte_array(&self, length: usize) -> Vec<u8> {
        self.get_byte_array(self.position(), length)
    }

    /// Advances the cursor by `length` bytes without reading them.
    pub fn remove_bytes(&mut self, length: usize) {
        self.advance(length);
    }
}
