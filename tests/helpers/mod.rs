#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Decode a hex string, ignoring spaces between byte groups.
pub(crate) fn bytes(hex: &str) -> Vec<u8> {
	hex::decode(hex.replace(' ', "")).unwrap()
}

/// Write `contents` to a fresh temporary file that lives as long as the
/// returned handle.
pub(crate) fn temp_file(contents: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents).unwrap();
	file.flush().unwrap();
	file
}

/// A minimal block file record: magic, size, 80-byte header, a varint
/// transaction count of 2 and two opaque 3-byte "transactions" each
/// prefixed with a varint length.
pub(crate) fn block_record() -> Vec<u8> {
	let mut payload = Vec::new();
	payload.extend_from_slice(&[0x11; 80]); // header
	payload.push(0x02); // tx count
	payload.extend_from_slice(&[0x03, 0xAA, 0xBB, 0xCC]);
	payload.extend_from_slice(&[0x03, 0xDD, 0xEE, 0xFF]);

	let mut rec = Vec::new();
	rec.extend_from_slice(&0xD9B4_BEF9u32.to_le_bytes()); // mainnet magic
	rec.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	rec.extend_from_slice(&payload);
	rec
}
