/* src/error.rs */

use core::fmt;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// The cursor movement that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
	/// A typed or byte-slice read.
	Read,
	/// A forward skip without reading.
	Advance,
	/// A backward skip.
	Rewind,
	/// A jump to an absolute offset.
	Reset,
}

impl fmt::Display for Motion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Read => "read past end of buffer",
			Self::Advance => "advance past end of buffer",
			Self::Rewind => "rewind past start of buffer",
			Self::Reset => "reset out of buffer",
		})
	}
}

/// A cursor operation would have left the mapped region.
///
/// The cursor position is never changed by an operation that returns this
/// error. `offset` is the position at which the failing movement was
/// attempted; for a variable-length integer that is the offset of its
/// prefix byte, where the cursor is left after the rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{motion}: requested {requested} bytes at offset {offset} of {len}")]
pub struct OutOfRange {
	/// Which movement failed.
	pub motion: Motion,
	/// Byte count (or absolute offset, for [`Motion::Reset`]) that was asked for.
	pub requested: usize,
	/// Cursor offset when the request was made.
	pub offset: usize,
	/// Total length of the buffer.
	pub len: usize,
}

/// The file could not be mapped into memory.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MappingError {
	/// The file could not be opened for reading.
	#[error("failed to open {}: {source}", path.display())]
	Open {
		/// Path that was requested.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The operating system refused to map the file.
	#[error("failed to map file: {source}")]
	Map {
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The file has zero length and there is nothing to map.
	#[error("cannot map an empty file")]
	Empty,
}

/// Any error produced by this crate.
///
/// Useful for callers that open a file and decode from it in the same
/// `?` chain.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// Construction failed.
	#[cfg(feature = "std")]
	#[error(transparent)]
	Mapping(#[from] MappingError),

	/// A bounds check failed.
	#[error(transparent)]
	OutOfRange(#[from] OutOfRange),
}
