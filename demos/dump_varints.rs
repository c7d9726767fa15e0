#![allow(missing_docs)]

//! Walk a file of varint length-prefixed records and print where each
//! one starts.
//!
//! ```text
//! cargo run --example dump_varints -- path/to/file
//! ```

use mapcursor::{Error, MappedByteCursor};

fn main() {
	let Some(path) = std::env::args().nth(1) else {
		eprintln!("usage: dump_varints <file>");
		return;
	};

	if let Err(e) = dump(&path) {
		eprintln!("{path}: {e}");
	}
}

fn dump(path: &str) -> Result<(), Error> {
	let mut cur = MappedByteCursor::open(path)?;
	println!("{path}: {} bytes mapped", cur.len());

	let mut count = 0usize;
	while cur.remaining() > 0 {
		let start = cur.offset();
		let len = cur.read_var_int()? as usize;
		let body = cur.read_bytes(len)?;
		let preview: Vec<String> = body.iter().take(8).map(|b| format!("{b:02x}")).collect();
		println!("#{count:<6} @{start:<10} len {len:<8} {}", preview.join(" "));
		count += 1;
	}

	println!("{count} records, ended at offset {}", cur.offset());
	Ok(())
}
