/* src/fixed.rs */

/// A plain value that can be decoded from a fixed number of raw bytes.
///
/// Implemented for the primitive integers, `f32`, `f64` and `[u8; N]`. The
/// trait is sealed: decoding only happens through
/// [`ByteCursor`](crate::ByteCursor), after its bounds check, so the raw
/// decoders are not callable from outside the crate.
///
/// ```compile_fail
/// use mapcursor::FixedWidth;
///
/// let _ = u32::from_le_slice(&[0x01]);
/// ```
pub trait FixedWidth: sealed::Decode {
	/// Encoded width in bytes.
	const SIZE: usize;
}

pub(crate) mod sealed {
	/// Raw decoders. Every slice passed in is exactly `SIZE` bytes long.
	pub trait Decode: Sized + Copy {
		fn from_ne_slice(bytes: &[u8]) -> Self;

		fn from_le_slice(bytes: &[u8]) -> Self;

		fn from_be_slice(bytes: &[u8]) -> Self;
	}
}

macro_rules! impl_fixed_width {
	($($ty:ty),* $(,)?) => {
		$(
			impl FixedWidth for $ty {
				const SIZE: usize = core::mem::size_of::<$ty>();
			}

			impl sealed::Decode for $ty {
				fn from_ne_slice(bytes: &[u8]) -> Self {
					<$ty>::from_ne_bytes(to_array(bytes))
				}

				fn from_le_slice(bytes: &[u8]) -> Self {
					<$ty>::from_le_bytes(to_array(bytes))
				}

				fn from_be_slice(bytes: &[u8]) -> Self {
					<$ty>::from_be_bytes(to_array(bytes))
				}
			}
		)*
	};
}

impl_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<const N: usize> FixedWidth for [u8; N] {
	const SIZE: usize = N;
}

impl<const N: usize> sealed::Decode for [u8; N] {
	fn from_ne_slice(bytes: &[u8]) -> Self {
		to_array(bytes)
	}

	fn from_le_slice(bytes: &[u8]) -> Self {
		to_array(bytes)
	}

	fn from_be_slice(bytes: &[u8]) -> Self {
		to_array(bytes)
	}
}

fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let mut raw = [0u8; N];
	raw.copy_from_slice(&bytes[..N]);
	raw
}
