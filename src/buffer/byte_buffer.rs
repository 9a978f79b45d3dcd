//! The ByteBuffer type - fixed-capacity storage behind a cursor.

use bytes::Bytes;
use std::fmt;

/// A fixed-capacity byte region with a read/write cursor and a visibility
/// bound.
///
/// The buffer owns its storage exclusively. Its `capacity` is fixed at
/// construction; all mutation happens in place through cursor moves and byte
/// writes. Two accessor families share the storage:
///
/// - **Absolute** (`set_*`/`get_*`) - typed access at an explicit offset,
///   cursor untouched.
/// - **Cursor** (`insert_*`/`extract_*`/`peek_*`/`remove_*`) - typed access at
///   `position`, advancing it by the value's encoded width (except `peek`,
///   which never moves).
///
/// # Bounds contract
///
/// No operation validates ranges. Accessing outside `[0, capacity)` panics
/// through slice indexing; keeping `position <= limit <= capacity` is the
/// caller's responsibility (debug builds assert it in
/// [`set_position`](ByteBuffer::set_position) /
/// [`set_limit`](ByteBuffer::set_limit)).
///
/// # Example
///
/// ```
/// use wirebuf::ByteBuffer;
///
/// let mut buf = ByteBuffer::zeroed(16);
/// buf.insert_u16(0xBEEF);
/// buf.insert_bool(true);
///
/// buf.flip();
/// assert_eq!(buf.remaining(), 3);
/// assert_eq!(buf.extract_u16(), 0xBEEF);
/// assert!(buf.extract_bool());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    /// The owned storage. Length never changes after construction.
    storage: Vec<u8>,

    /// Cursor offset for the `insert`/`extract`/`peek`/`remove` family.
    position: usize,

    /// Bound past which bytes are not-yet-written or already-consumed.
    limit: usize,
}

impl ByteBuffer {
    fn new(storage: Vec<u8>) -> Self {
        let mut buffer = Self {
            storage,
            position: 0,
            limit: 0,
        };
        buffer.clear();
        buffer
    }

    /// Creates a zero-capacity buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::empty();
    /// assert_eq!(buf.capacity(), 0);
    /// assert!(!buf.has_remaining());
    /// ```
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a zero-filled buffer of the given capacity, ready for writing
    /// (`position = 0`, `limit = capacity`).
    pub fn zeroed(capacity: usize) -> Self {
        Self::new(vec![0; capacity])
    }

    /// Wraps an existing byte vector directly, without copying.
    ///
    /// The vector's length becomes the buffer's fixed capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from_vec(vec![0xAB, 0xCD]);
    /// assert_eq!(buf.capacity(), 2);
    /// assert_eq!(buf.get_u16(0), 0xABCD);
    /// ```
    pub fn from_vec(storage: Vec<u8>) -> Self {
        Self::new(storage)
    }

    /// Copies a borrowed byte slice into newly owned storage.
    pub fn copy_from_slice(source: &[u8]) -> Self {
        Self::new(source.to_vec())
    }

    //
    // Bounds & cursor
    //

    /// Returns the fixed storage length.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the cursor offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the cursor offset.
    ///
    /// The caller must ensure `position <= limit`; this is asserted in debug
    /// builds only.
    pub fn set_position(&mut self, position: usize) {
        debug_assert!(position <= self.limit, "position {position} > limit {}", self.limit);
        self.position = position;
    }

    /// Returns the visibility bound.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Sets the visibility bound.
    ///
    /// The caller must ensure `limit <= capacity`; this is asserted in debug
    /// builds only.
    pub fn set_limit(&mut self, limit: usize) {
        debug_assert!(limit <= self.capacity(), "limit {limit} > capacity {}", self.capacity());
        self.limit = limit;
    }

    /// Returns true if any bytes remain between the cursor and the limit.
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Returns `limit - position`, the bytes available for cursor access.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Borrows the unread range `[position, limit)`.
    ///
    /// The view lives only as long as the borrow; it is never stored.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.storage[self.position..self.limit]
    }

    /// Resets for full-range writing: `position = 0`, `limit = capacity`.
    ///
    /// The storage bytes themselves are untouched.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    /// Switches from writing to reading: `limit = position`, `position = 0`.
    ///
    /// After writing N bytes into a cleared buffer, `flip` exposes exactly
    /// those N bytes for cursor reads.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::zeroed(8);
    /// buf.insert_u32(7);
    /// buf.flip();
    /// assert_eq!((buf.position(), buf.limit()), (0, 4));
    /// ```
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Moves the cursor back to 0 with `limit` unchanged, to re-read the same
    /// visible range.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Shifts the unread range `[position, limit)` down to offset 0, then
    /// sets `position = remaining` and `limit = capacity`.
    ///
    /// Reclaims consumed space while preserving unread bytes at the front, so
    /// more data can be appended behind them.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
    /// buf.set_position(3);
    /// buf.compact();
    /// assert_eq!(buf.get_u8(0), 4);
    /// assert_eq!((buf.position(), buf.limit()), (1, 4));
    /// ```
    pub fn compact(&mut self) {
        let remaining = self.remaining();

        if remaining > 0 && self.position != 0 {
            // The shift is always downward (src >= dst), which copy_within
            // handles for overlapping ranges.
            self.storage
                .copy_within(self.position..self.position + remaining, 0);
        }

        self.position = remaining;
        self.limit = self.capacity();
    }

    /// Transfers `min(self.remaining(), other.remaining())` bytes from
    /// `other`'s cursor region into this buffer's cursor region, advancing
    /// both cursors by the transferred length.
    ///
    /// A no-op when either side has zero remaining. Neither buffer takes
    /// ownership of the other; `other` is only read for the duration of the
    /// call.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut src = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
    /// let mut dst = ByteBuffer::zeroed(2);
    ///
    /// dst.insert_buffer(&mut src);
    /// assert_eq!((dst.position(), src.position()), (2, 2));
    /// assert_eq!(dst.get_u8(0), 1);
    /// assert_eq!(dst.get_u8(1), 2);
    /// ```
    pub fn insert_buffer(&mut self, other: &mut ByteBuffer) {
        let to_copy = self.remaining().min(other.remaining());

        if to_copy > 0 {
            let dst = self.position;
            let src = other.position;

            self.storage[dst..dst + to_copy]
                .copy_from_slice(&other.storage[src..src + to_copy]);

            self.position += to_copy;
            other.position += to_copy;
        }
    }

    //
    // Copy / export
    //

    /// Copies the unread range `[position, limit)` into an independent
    /// immutable sequence. The cursor is unaffected.
    pub fn copy_bytes(&self) -> Bytes {
        self.copy_bytes_absolute(self.position, self.remaining())
    }

    /// Copies `length` bytes starting at `position` into an independent
    /// immutable sequence. The cursor is unaffected.
    pub fn copy_bytes_absolute(&self, position: usize, length: usize) -> Bytes {
        self.get_bytes(position, length)
    }

    /// Copies the unread range into an independent mutable byte vector.
    pub fn copy_byte_array(&self) -> Vec<u8> {
        self.copy_byte_array_absolute(self.position, self.remaining())
    }

    /// Copies `length` bytes starting at `position` into an independent
    /// mutable byte vector.
    pub fn copy_byte_array_absolute(&self, position: usize, length: usize) -> Vec<u8> {
        self.get_byte_array(position, length)
    }

    /// Copies the unread range into a fresh, independent buffer with
    /// `position = 0` and `limit = length`.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from_vec(vec![9, 8, 7]);
    /// buf.set_position(1);
    ///
    /// let copy = buf.copy_buffer();
    /// assert_eq!(copy.capacity(), 2);
    /// assert_eq!(copy.get_u8(0), 8);
    /// assert_eq!(buf.position(), 1);
    /// ```
    pub fn copy_buffer(&self) -> ByteBuffer {
        self.copy_buffer_absolute(self.position, self.remaining())
    }

    /// Copies an explicit range into a fresh, independent buffer.
    pub fn copy_buffer_absolute(&self, position: usize, length: usize) -> ByteBuffer {
        ByteBuffer::from_vec(self.copy_byte_array_absolute(position, length))
    }

    /// Borrows the full storage. Used internally by the typed accessors.
    pub(crate) fn storage(&self) -> &[u8] {
        &self.storage
    }

    /// Mutably borrows the full storage. Used internally by the typed
    /// accessors.
    pub(crate) fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Advances the cursor by `width` without reading.
    pub(crate) fn advance(&mut self, width: usize) {
        self.position += width;
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(storage: Vec<u8>) -> Self {
        Self::from_vec(storage)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(source: &[u8]) -> Self {
        Self::copy_from_slice(source)
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(source: Bytes) -> Self {
        Self::copy_from_slice(&source)
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ByteBuffer(capacity={}, remaining={}, position={}, limit={})",
            self.capacity(),
            self.remaining(),
            self.position,
            self.limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let buf = ByteBuffer::empty();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 0);
        assert!(!buf.has_remaining());
    }

    #[test]
    fn test_zeroed() {
        let buf = ByteBuffer::zeroed(16);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 16);
        assert_eq!(buf.remaining(), 16);
        assert_eq!(buf.storage(), &[0u8; 16]);
    }

    #[test]
    fn test_from_vec_takes_ownership() {
        let buf = ByteBuffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.storage(), &[1, 2, 3]);
    }

    #[test]
    fn test_copy_from_slice_copies() {
        let source = [5u8, 6, 7];
        let mut buf = ByteBuffer::copy_from_slice(&source);
        buf.set_u8(0, 99);
        assert_eq!(source[0], 5, "source slice must be unaffected");
    }

    #[test]
    fn test_from_bytes() {
        let buf: ByteBuffer = Bytes::from_static(&[0xAA, 0xBB]).into();
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.get_u8(1), 0xBB);
    }

    #[test]
    fn test_clear() {
        let mut buf = ByteBuffer::zeroed(8);
        buf.set_position(4);
        buf.set_limit(6);

        buf.clear();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 8);
    }

    #[test]
    fn test_flip() {
        let mut buf = ByteBuffer::zeroed(8);
        buf.set_position(5);

        buf.flip();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 5);
        assert_eq!(buf.remaining(), 5);
    }

    #[test]
    fn test_rewind_keeps_limit() {
        let mut buf = ByteBuffer::zeroed(8);
        buf.set_limit(6);
        buf.set_position(6);

        buf.rewind();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 6);
    }

    #[test]
    fn test_compact_preserves_tail() {
        let mut buf = ByteBuffer::from_vec(vec![10, 20, 30, 40, 50]);
        buf.set_limit(4);
        buf.set_position(2);

        buf.compact();
        assert_eq!(buf.storage()[..2], [30, 40], "unread bytes move to front");
        assert_eq!(buf.position(), 2);
        assert_eq!(buf.limit(), 5);
    }

    #[test]
    fn test_compact_with_nothing_unread() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3]);
        buf.set_position(3);

        buf.compact();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.limit(), 3);
        assert_eq!(buf.storage(), &[1, 2, 3], "bytes untouched");
    }

    #[test]
    fn test_compact_at_position_zero() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3]);
        buf.set_limit(2);

        buf.compact();
        assert_eq!(buf.position(), 2);
        assert_eq!(buf.limit(), 3);
        assert_eq!(buf.storage(), &[1, 2, 3]);
    }

    #[test]
    fn test_compact_overlapping_shift() {
        // remaining > position, so source and destination ranges overlap
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3, 4, 5, 6]);
        buf.set_position(1);

        buf.compact();
        assert_eq!(buf.storage()[..5], [2, 3, 4, 5, 6]);
        assert_eq!(buf.position(), 5);
    }

    #[test]
    fn test_insert_buffer_bounded_by_destination() {
        let mut src = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
        let mut dst = ByteBuffer::zeroed(2);

        dst.insert_buffer(&mut src);
        assert_eq!(dst.storage(), &[1, 2]);
        assert_eq!(dst.position(), 2);
        assert_eq!(src.position(), 2);
        assert_eq!(src.remaining(), 2);
    }

    #[test]
    fn test_insert_buffer_bounded_by_source() {
        let mut src = ByteBuffer::from_vec(vec![7, 8]);
        let mut dst = ByteBuffer::zeroed(8);

        dst.insert_buffer(&mut src);
        assert_eq!(dst.storage()[..2], [7, 8]);
        assert_eq!(dst.position(), 2);
        assert_eq!(dst.remaining(), 6);
        assert!(!src.has_remaining());
    }

    #[test]
    fn test_insert_buffer_noop_when_empty() {
        let mut src = ByteBuffer::empty();
        let mut dst = ByteBuffer::zeroed(4);

        dst.insert_buffer(&mut src);
        assert_eq!(dst.position(), 0);

        let mut full = ByteBuffer::from_vec(vec![1]);
        let mut exhausted = ByteBuffer::zeroed(4);
        exhausted.set_limit(0);

        exhausted.insert_buffer(&mut full);
        assert_eq!(exhausted.position(), 0);
        assert_eq!(full.position(), 0);
    }

    #[test]
    fn test_remaining_slice() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3, 4, 5]);
        buf.set_limit(4);
        buf.set_position(1);
        assert_eq!(buf.remaining_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_copy_bytes_leaves_cursor() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
        buf.set_position(1);

        let copy = buf.copy_bytes();
        assert_eq!(copy.as_ref(), &[2, 3, 4]);
        assert_eq!(buf.position(), 1, "cursor unaffected");
    }

    #[test]
    fn test_copy_byte_array_absolute() {
        let buf = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(buf.copy_byte_array_absolute(1, 2), vec![2, 3]);
    }

    #[test]
    fn test_copy_buffer_is_independent() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
        buf.set_position(2);

        let mut copy = buf.copy_buffer();
        assert_eq!(copy.capacity(), 2);
        assert_eq!(copy.position(), 0);
        assert_eq!(copy.limit(), 2);
        assert_eq!(copy.storage(), &[3, 4]);

        copy.set_u8(0, 0xFF);
        assert_eq!(buf.get_u8(2), 3, "source must not see the mutation");
    }

    #[test]
    fn test_copy_buffer_absolute() {
        let buf = ByteBuffer::from_vec(vec![9, 8, 7, 6]);
        let copy = buf.copy_buffer_absolute(1, 3);
        assert_eq!(copy.storage(), &[8, 7, 6]);
        assert_eq!((copy.position(), copy.limit()), (0, 3));
    }

    #[test]
    fn test_display() {
        let mut buf = ByteBuffer::zeroed(8);
        buf.set_position(3);
        let rendered = buf.to_string();
        assert!(rendered.contains("capacity=8"));
        assert!(rendered.contains("remaining=5"));
        assert!(rendered.contains("position=3"));
        assert!(rendered.contains("limit=8"));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_access_panics() {
        let buf = ByteBuffer::zeroed(2);
        buf.get_u32(0);
    }
}
