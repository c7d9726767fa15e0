#![allow(missing_docs, clippy::unwrap_used)]

mod helpers;

use mapcursor::{ByteCursor, MARKER_U16, MARKER_U32, MARKER_U64, Motion};

#[test]
fn single_byte_values() {
	for v in 0..MARKER_U16 {
		let data = [v, 0xEE];
		let mut cur = ByteCursor::new(data.as_slice());
		assert_eq!(cur.read_var_int().unwrap(), u32::from(v));
		assert_eq!(cur.offset(), 1);
	}
}

#[test]
fn two_byte_value() {
	let data = helpers::bytes("fd 3412");
	let mut cur = ByteCursor::new(data.as_slice());
	assert_eq!(cur.read_var_int().unwrap(), 0x1234);
	assert_eq!(cur.offset(), 3);
}

#[test]
fn four_byte_value() {
	let data = helpers::bytes("fe 78563412");
	let mut cur = ByteCursor::new(data.as_slice());
	assert_eq!(cur.read_var_int().unwrap(), 0x1234_5678);
	assert_eq!(cur.offset(), 5);
}

#[test]
fn eight_byte_value_keeps_low_half() {
	let data = helpers::bytes("ff 78563412 efcdab89");
	let mut cur = ByteCursor::new(data.as_slice());
	assert_eq!(cur.read_var_int().unwrap(), 0x1234_5678);
	assert_eq!(cur.offset(), 9);

	cur.reset();
	assert_eq!(cur.read_var_int_u64().unwrap(), 0x89AB_CDEF_1234_5678);
	assert_eq!(cur.offset(), 9);
}

#[test]
fn truncated_payload_rolls_back_prefix() {
	for (marker, width) in [(MARKER_U16, 2), (MARKER_U32, 4), (MARKER_U64, 8)] {
		for available in 0..width {
			let mut data = vec![0x07, marker];
			data.extend(std::iter::repeat_n(0xAB, available));
			let mut cur = ByteCursor::new(data.as_slice());
			cur.advance(1).unwrap();

			let before = cur.offset();
			let err = cur.read_var_int().unwrap_err();
			assert_eq!(err.motion, Motion::Read);
			assert_eq!(err.requested, width);
			assert_eq!(err.offset, before);
			assert_eq!(cur.offset(), before, "marker {marker:#04x} with {available} bytes");

			let err = cur.read_var_int_u64().unwrap_err();
			assert_eq!(err.requested, width);
			assert_eq!(err.offset, before);
			assert_eq!(cur.offset(), before);
		}
	}
}

#[test]
fn missing_prefix_fails_in_place() {
	let data = [0x01];
	let mut cur = ByteCursor::new(data.as_slice());
	cur.advance(1).unwrap();
	let err = cur.read_var_int().unwrap_err();
	assert_eq!(err.requested, 1);
	assert_eq!(cur.offset(), 1);
}

#[test]
fn retry_after_rollback_sees_same_prefix() {
	let data = helpers::bytes("fd 34");
	let mut cur = ByteCursor::new(data.as_slice());
	assert!(cur.read_var_int().is_err());
	assert_eq!(cur.read_fixed::<u8>().unwrap(), MARKER_U16);
}

#[test]
fn varint_then_fixed_then_end() {
	let data = [0xFD, 0x34, 0x12, 0x99];
	let mut cur = ByteCursor::new(data.as_slice());
	assert_eq!(cur.read_var_int().unwrap(), 0x1234);
	assert_eq!(cur.offset(), 3);
	assert_eq!(cur.read_fixed::<u8>().unwrap(), 0x99);
	assert_eq!(cur.offset(), 4);
	let err = cur.read_fixed::<u8>().unwrap_err();
	assert_eq!(err.motion, Motion::Read);
	assert_eq!(cur.offset(), 4);
}

#[test]
fn length_prefixed_records() {
	let data = helpers::bytes("02 aabb 00 fd0300 ccddee");
	let mut cur = ByteCursor::new(data.as_slice());
	let mut records = Vec::new();
	while cur.remaining() > 0 {
		let len = cur.read_var_int().unwrap() as usize;
		records.push(cur.read_bytes(len).unwrap().to_vec());
	}
	assert_eq!(records, vec![vec![0xAA, 0xBB], vec![], vec![0xCC, 0xDD, 0xEE]]);
}

#[test]
fn rollback_error_reports_prefix_offset() {
	let data = helpers::bytes("00 00 fe 0102");
	let mut cur = ByteCursor::new(data.as_slice());
	cur.advance(2).unwrap();
	let err = cur.read_var_int().unwrap_err();
	assert_eq!(
		err.to_string(),
		"read past end of buffer: requested 4 bytes at offset 2 of 5"
	);
	assert_eq!(cur.offset(), 2);
}
