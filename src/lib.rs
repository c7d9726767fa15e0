/* src/lib.rs */

//! Bounds-checked cursor over memory-mapped blockchain data.
//!
//! [`MappedByteCursor`] maps a file (for example a `blk*.dat` block file)
//! read-only and walks it sequentially:
//!
//! - fixed-width reads with [`ByteCursor::read_fixed`] and the explicit
//!   [`read_le`](ByteCursor::read_le) / [`read_be`](ByteCursor::read_be);
//! - the wire format's variable-length integers with
//!   [`ByteCursor::read_var_int`];
//! - position control with [`advance`](ByteCursor::advance),
//!   [`rewind`](ByteCursor::rewind), [`reset`](ByteCursor::reset) and
//!   [`reset_to`](ByteCursor::reset_to).
//!
//! No operation can move the cursor outside the buffer. A refused
//! operation returns [`OutOfRange`] and leaves the position as it was.
//!
//! Without the `std` feature the crate is `no_std`; [`ByteCursor`] then
//! works over any in-memory `AsRef<[u8]>` buffer.
//!
//! ```no_run
//! # fn main() -> Result<(), mapcursor::Error> {
//! let mut blk = mapcursor::MappedByteCursor::open("blk00000.dat")?;
//! let magic = blk.read_le::<u32>()?;
//! let size = blk.read_le::<u32>()?;
//! blk.advance(80)?; // block header
//! let tx_count = blk.read_var_int()?;
//! # let _ = (magic, size, tx_count);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod cursor;
mod error;
mod fixed;
#[cfg(feature = "std")]
mod mapped;
mod varint;

pub use crate::cursor::ByteCursor;
#[cfg(feature = "std")]
pub use crate::error::MappingError;
pub use crate::error::{Error, Motion, OutOfRange};
pub use crate::fixed::FixedWidth;
#[cfg(feature = "std")]
pub use crate::mapped::MappedByteCursor;
pub use crate::varint::{MARKER_U16, MARKER_U32, MARKER_U64, var_int_len};
