//! The Primitive trait - fixed-width big-endian encode/decode.
//!
//! Each implementation is a stateless pure function pair over
//! `(bytes, offset)`; no shared converter tables or process-wide state.

/// A value with a fixed encoded width and a big-endian byte representation.
///
/// `encode` writes exactly [`Primitive::WIDTH`] bytes into `dst`; `decode`
/// reads exactly [`Primitive::WIDTH`] bytes from `src`. Callers slice the
/// storage to the exact width before calling either.
pub(crate) trait Primitive: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Writes the big-endian encoding of `self` into `dst`.
    ///
    /// `dst.len()` must equal `WIDTH`.
    fn encode(self, dst: &mut [u8]);

    /// Decodes a value from the big-endian bytes in `src`.
    ///
    /// `src.len()` must equal `WIDTH`.
    fn decode(src: &[u8]) -> Self;
}

macro_rules! impl_be_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const WIDTH: usize = size_of::<$ty>();

                fn encode(self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_be_bytes());
                }

                fn decode(src: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(src);
                    <$ty>::from_be_bytes(raw)
                }
            }
        )*
    };
}

impl_be_primitive!(u16, i16, u32, i32, u64, i64, f32, f64);

impl Primitive for u8 {
    const WIDTH: usize = 1;

    fn encode(self, dst: &mut [u8]) {
        dst[0] = self;
    }

    fn decode(src: &[u8]) -> Self {
        src[0]
    }
}

/// `i8` is offset-biased on the wire: the stored byte is `value - i8::MIN`,
/// mapping `[-128, 127]` onto `[0, 255]`. This is deliberately NOT two's
/// complement (unlike `i16`/`i32`/`i64`) and must stay that way for wire
/// compatibility.
impl Primitive for i8 {
    const WIDTH: usize = 1;

    fn encode(self, dst: &mut [u8]) {
        dst[0] = (self as u8).wrapping_add(0x80);
    }

    fn decode(src: &[u8]) -> Self {
        src[0].wrapping_sub(0x80) as i8
    }
}

/// `true` encodes as byte `1`, `false` as `0`. Decoding treats exactly `1`
/// as `true` and every other byte value as `false`.
impl Primitive for bool {
    const WIDTH: usize = 1;

    fn encode(self, dst: &mut [u8]) {
        dst[0] = if self { 1 } else { 0 };
    }

    fn decode(src: &[u8]) -> Self {
        src[0] == 1
    }
}
