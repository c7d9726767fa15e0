/* src/cursor.rs */

use crate::error::{Motion, OutOfRange};
use crate::fixed::FixedWidth;

/// Sequential byte cursor with bounds checking.
///
/// The cursor owns an immutable buffer `B` and a read position that always
/// lies within `0..=len`. Every read and every forward movement goes
/// through a single bounds check; an operation that fails leaves the
/// position untouched.
///
/// Over a file, use [`MappedByteCursor`](crate::MappedByteCursor). Over
/// bytes already in memory, any `AsRef<[u8]>` works:
///
/// ```
/// use mapcursor::ByteCursor;
///
/// let mut cur = ByteCursor::new(&[0x01u8, 0x02, 0x03][..]);
/// assert_eq!(cur.read_fixed::<u8>().unwrap(), 0x01);
/// assert_eq!(cur.offset(), 1);
/// assert!(cur.has_remaining(2));
/// assert!(!cur.has_remaining(3));
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<B> {
	buf: B,
	pos: usize,
}

impl<B: AsRef<[u8]>> ByteCursor<B> {
	/// Create a cursor positioned at the start of `buf`.
	#[must_use]
	pub fn new(buf: B) -> Self {
		Self { buf, pos: 0 }
	}

	/// Total length of the underlying buffer.
	#[must_use]
	pub fn len(&self) -> usize {
		self.buf.as_ref().len()
	}

	/// Whether the underlying buffer is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Bytes left between the position and the end of the buffer.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.len() - self.pos
	}

	/// Whether at least `n` bytes remain.
	///
	/// Never overflows: a huge `n` simply yields `false`.
	#[must_use]
	pub fn has_remaining(&self, n: usize) -> bool {
		n <= self.remaining()
	}

	/// Number of bytes consumed since the start of the buffer.
	#[must_use]
	pub fn offset(&self) -> usize {
		self.pos
	}

	/// Read a fixed-width value in native byte order.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if fewer than `T::SIZE` bytes remain; the
	/// position is not moved.
	pub fn read_fixed<T: FixedWidth>(&mut self) -> Result<T, OutOfRange> {
		self.take(T::SIZE, Motion::Read).map(T::from_ne_slice)
	}

	/// Read a fixed-width value stored little-endian.
	///
	/// # Errors
	///
	/// Same as [`read_fixed`](Self::read_fixed).
	pub fn read_le<T: FixedWidth>(&mut self) -> Result<T, OutOfRange> {
		self.take(T::SIZE, Motion::Read).map(T::from_le_slice)
	}

	/// Read a fixed-width value stored big-endian.
	///
	/// # Errors
	///
	/// Same as [`read_fixed`](Self::read_fixed).
	pub fn read_be<T: FixedWidth>(&mut self) -> Result<T, OutOfRange> {
		self.take(T::SIZE, Motion::Read).map(T::from_be_slice)
	}

	/// Decode the next fixed-width value without moving the cursor.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if fewer than `T::SIZE` bytes remain.
	pub fn peek_fixed<T: FixedWidth>(&self) -> Result<T, OutOfRange> {
		if !self.has_remaining(T::SIZE) {
			return Err(self.out_of_range(Motion::Read, T::SIZE));
		}
		Ok(T::from_ne_slice(&self.buf.as_ref()[self.pos..]))
	}

	/// Borrow the next `n` bytes and move past them.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if fewer than `n` bytes remain; the position is
	/// not moved.
	pub fn read_bytes(&mut self, n: usize) -> Result<&[u8], OutOfRange> {
		self.take(n, Motion::Read)
	}

	/// Skip `n` bytes forward.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if that would pass the end of the buffer.
	pub fn advance(&mut self, n: usize) -> Result<(), OutOfRange> {
		self.take(n, Motion::Advance).map(|_| ())
	}

	/// Step `n` bytes back.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if that would pass the start of the buffer.
	pub fn rewind(&mut self, n: usize) -> Result<(), OutOfRange> {
		if n > self.pos {
			return Err(self.out_of_range(Motion::Rewind, n));
		}
		self.pos -= n;
		Ok(())
	}

	/// Return to the start of the buffer.
	pub fn reset(&mut self) {
		self.pos = 0;
	}

	/// Jump to absolute offset `n`. `n == len()` is allowed and leaves
	/// nothing to read.
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if `n` lies past the end of the buffer.
	pub fn reset_to(&mut self, n: usize) -> Result<(), OutOfRange> {
		if n > self.len() {
			return Err(self.out_of_range(Motion::Reset, n));
		}
		self.pos = n;
		Ok(())
	}

	/// Unread bytes from the current position to the end of the buffer.
	///
	/// This is the escape hatch for collaborators that decode in place, such
	/// as handing a script or witness blob to another parser without
	/// copying. The view is bounded by the end of the buffer, so it cannot
	/// be read past, but it is detached from the cursor: consuming bytes
	/// through it does not move [`offset`](Self::offset), and the cursor
	/// makes no further guarantee about what the caller does with it. Use
	/// [`advance`](Self::advance) to account for bytes consumed that way.
	#[must_use]
	pub fn raw_position(&self) -> &[u8] {
		&self.buf.as_ref()[self.pos..]
	}

	/// The whole underlying buffer, independent of the position.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.buf.as_ref()
	}

	/// Borrow the underlying buffer.
	#[must_use]
	pub fn get_ref(&self) -> &B {
		&self.buf
	}

	/// Consume the cursor and return the underlying buffer.
	#[must_use]
	pub fn into_inner(self) -> B {
		self.buf
	}

	/// Put the position back to an offset previously returned by
	/// [`offset`](Self::offset).
	pub(crate) fn restore(&mut self, offset: usize) {
		debug_assert!(offset <= self.len());
		self.pos = offset;
	}

	/// The one bounds check behind every forward movement.
	fn take(&mut self, n: usize, motion: Motion) -> Result<&[u8], OutOfRange> {
		if !self.has_remaining(n) {
			return Err(self.out_of_range(motion, n));
		}
		let start = self.pos;
		self.pos += n;
		Ok(&self.buf.as_ref()[start..self.pos])
	}

	fn out_of_range(&self, motion: Motion, requested: usize) -> OutOfRange {
		OutOfRange {
			motion,
			requested,
			offset: self.pos,
			len: self.len(),
		}
	}
}
