//! Multi-rate padding: `0x80`, a run of zero bytes, then `0x01`.

use core::iter;

use super::RATE;

pub const PAD_FIRST: u8 = 0x80;
pub const PAD_LAST: u8 = 0x01;

/// The padding appended after a message of a given length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
	zero_count: usize,
}

impl Padding {
	pub fn for_message_len(message_len: usize) -> Self {
		// same as `RATE - (message_len + 2) % RATE` without the overflow
		let zero_count = RATE - (message_len % RATE + 2) % RATE;

		Self {zero_count}
	}

	pub fn zero_count(self) -> usize {
		self.zero_count
	}

	/// Total padding bytes, markers included. Always in `3 ..= RATE + 2`.
	pub fn byte_len(self) -> usize {
		self.zero_count + 2
	}

	pub fn bytes(self) -> impl Iterator<Item = u8> {
		iter::once(PAD_FIRST)
			.chain(iter::repeat(0).take(self.zero_count))
			.chain(iter::once(PAD_LAST))
	}
}

/// Length of the message once padded, or `None` if it does not fit in a
/// `usize`.
pub fn padded_len(message_len: usize) -> Option<usize> {
	message_len.checked_add(Padding::for_message_len(message_len).byte_len())
}

#[test]
fn test_padding_lengths_around_block_boundary() {
	assert_eq!(Padding::for_message_len(0).byte_len(), 136);
	assert_eq!(Padding::for_message_len(133).byte_len(), 3);
	assert_eq!(Padding::for_message_len(134).byte_len(), 138);
	assert_eq!(Padding::for_message_len(135).byte_len(), 137);
	assert_eq!(Padding::for_message_len(136).byte_len(), 136);

	assert_eq!(padded_len(0), Some(136));
	assert_eq!(padded_len(133), Some(136));
	assert_eq!(padded_len(134), Some(272));
	assert_eq!(padded_len(135), Some(272));
	assert_eq!(padded_len(136), Some(272));
}

#[test]
fn test_padding_alignment() {
	for message_len in 0 .. 4 * RATE {
		let total = padded_len(message_len).unwrap();

		assert!(total > message_len);
		assert_eq!(total % RATE, 0);
	}
}

#[test]
fn test_padding_bytes() {
	let padding = Padding::for_message_len(130);
	let mut bytes = padding.bytes();

	assert_eq!(padding.zero_count(), 4);
	assert_eq!(bytes.next(), Some(PAD_FIRST));

	for _ in 0 .. 4 {
		assert_eq!(bytes.next(), Some(0));
	}

	assert_eq!(bytes.next(), Some(PAD_LAST));
	assert_eq!(bytes.next(), None);

	assert_eq!(Padding::for_message_len(7).bytes().count(), Padding::for_message_len(7).byte_len());
}

#[test]
fn test_huge_lengths_do_not_overflow() {
	let padding = Padding::for_message_len(usize::MAX);

	assert!(padding.byte_len() >= 3 && padding.byte_len() <= RATE + 2);
	assert_eq!(padded_len(usize::MAX), None);
	assert_eq!(padded_len(usize::MAX - 2), None);
}
