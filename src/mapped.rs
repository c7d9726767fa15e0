/* src/mapped.rs */

use std::fs::File;
use std::path::Path;

use log::debug;
use memmap2::Mmap;

use crate::cursor::ByteCursor;
use crate::error::MappingError;

/// A [`ByteCursor`] over a whole file mapped read-only into memory.
///
/// The cursor owns the mapping and releases it when dropped. The mapping
/// itself is `Send + Sync`; to read one file from several threads, give
/// each thread its own `ByteCursor<&[u8]>` built from
/// [`as_slice`](ByteCursor::as_slice).
pub type MappedByteCursor = ByteCursor<Mmap>;

impl ByteCursor<Mmap> {
	/// Map the file at `path` and position the cursor at its first byte.
	///
	/// # Errors
	///
	/// Returns [`MappingError::Open`] if the file cannot be opened,
	/// [`MappingError::Map`] if it cannot be mapped, and
	/// [`MappingError::Empty`] if it has zero length.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, MappingError> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| {
			debug!("cannot open {}: {source}", path.display());
			MappingError::Open {
				path: path.to_path_buf(),
				source,
			}
		})?;
		let cursor = Self::from_file(&file)?;
		debug!("mapped {} ({} bytes)", path.display(), cursor.len());
		Ok(cursor)
	}

	/// Map an already opened file.
	///
	/// The handle only needs read access and may be closed afterwards; the
	/// mapping stays valid on its own.
	///
	/// # Errors
	///
	/// Returns [`MappingError::Map`] if the file cannot be mapped and
	/// [`MappingError::Empty`] if it has zero length.
	pub fn from_file(file: &File) -> Result<Self, MappingError> {
		let mmap = map_read_only(file).inspect_err(|err| debug!("{err}"))?;
		if mmap.is_empty() {
			return Err(MappingError::Empty);
		}
		Ok(Self::new(mmap))
	}
}

#[allow(unsafe_code)]
fn map_read_only(file: &File) -> Result<Mmap, MappingError> {
	// SAFETY: the map is read-only and only reachable through `&[u8]`.
	// Another process truncating or rewriting the file while it is mapped
	// is undefined behaviour that no userspace check can rule out.
	unsafe { Mmap::map(file) }.map_err(|source| MappingError::Map { source })
}
