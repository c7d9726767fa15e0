/* src/varint.rs */

//! Bitcoin-style variable-length integers ("CompactSize").
//!
//! A prefix byte below [`MARKER_U16`] is the value itself. The three
//! marker bytes announce a little-endian `u16`, `u32` or `u64` that
//! follows.

use log::trace;

use crate::cursor::ByteCursor;
use crate::error::OutOfRange;

/// Prefix announcing a 2-byte value.
pub const MARKER_U16: u8 = 0xFD;
/// Prefix announcing a 4-byte value.
pub const MARKER_U32: u8 = 0xFE;
/// Prefix announcing an 8-byte value.
pub const MARKER_U64: u8 = 0xFF;

/// Number of bytes the shortest encoding of `value` occupies.
///
/// ```
/// assert_eq!(mapcursor::var_int_len(0xFC), 1);
/// assert_eq!(mapcursor::var_int_len(0xFD), 3);
/// assert_eq!(mapcursor::var_int_len(0x1_0000), 5);
/// assert_eq!(mapcursor::var_int_len(u64::MAX), 9);
/// ```
#[must_use]
pub const fn var_int_len(value: u64) -> usize {
	if value < MARKER_U16 as u64 {
		1
	} else if value <= u16::MAX as u64 {
		3
	} else if value <= u32::MAX as u64 {
		5
	} else {
		9
	}
}

impl<B: AsRef<[u8]>> ByteCursor<B> {
	/// Read a variable-length integer, narrowed to 32 bits.
	///
	/// An 8-byte encoding above `u32::MAX` keeps only its low 32 bits. Use
	/// [`read_var_int_u64`](Self::read_var_int_u64) when the full value
	/// matters.
	///
	/// ```
	/// use mapcursor::ByteCursor;
	///
	/// let mut cur = ByteCursor::new(&[0xFDu8, 0x34, 0x12, 0x99][..]);
	/// assert_eq!(cur.read_var_int().unwrap(), 0x1234);
	/// assert_eq!(cur.offset(), 3);
	/// ```
	///
	/// # Errors
	///
	/// Returns [`OutOfRange`] if the prefix or its payload is cut short. The
	/// read is atomic: on failure the position is where it was before the
	/// call, prefix byte included, and the error's `offset` is that same
	/// position. `requested` is the width of the payload that was missing.
	pub fn read_var_int(&mut self) -> Result<u32, OutOfRange> {
		self.read_var_int_u64().map(|value| value as u32)
	}

	/// Read a variable-length integer without narrowing.
	///
	/// # Errors
	///
	/// Same as [`read_var_int`](Self::read_var_int).
	pub fn read_var_int_u64(&mut self) -> Result<u64, OutOfRange> {
		let start = self.offset();
		let prefix = self.read_fixed::<u8>()?;
		let value = match prefix {
			MARKER_U16 => self.read_le::<u16>().map(u64::from),
			MARKER_U32 => self.read_le::<u32>().map(u64::from),
			MARKER_U64 => self.read_le::<u64>(),
			small => return Ok(u64::from(small)),
		};
		value.map_err(|err| {
			trace!("varint prefix {prefix:#04x} at offset {start} truncated, rolling back: {err}");
			self.restore(start);
			OutOfRange {
				offset: start,
				..err
			}
		})
	}
}
