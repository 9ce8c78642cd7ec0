//! The sponge front end: pads a message, absorbs it one block at a time and
//! reads the digest out of the final state.

use tracing::{debug, trace};

use super::codec::{bytes_to_lanes, lanes_to_bytes};
use super::padding::Padding;
use super::{keccak, State, RATE, STATE_BYTES, STATE_LANES};

pub const DIGEST_BYTES: usize = 32;

pub type Digest = [u8; DIGEST_BYTES];

/// XORs one rate-sized block into `state`, then permutes it. The capacity
/// part of the frame is zero, so only the first 17 lanes can change before
/// the permutation runs.
fn absorb_block(state: &mut State, block: &[u8]) {
	let mut frame = [0; STATE_BYTES];
	frame[.. RATE].copy_from_slice(block);

	let mut lanes = [0; STATE_LANES];
	bytes_to_lanes(&frame, &mut lanes);

	for (lane, block_lane) in state.iter_mut().zip(lanes) {
		*lane ^= block_lane;
	}

	keccak(state);
}

fn squeeze(state: &State) -> Digest {
	let mut state_bytes = [0; STATE_BYTES];
	lanes_to_bytes(state, &mut state_bytes);

	let mut out = [0; DIGEST_BYTES];
	out.copy_from_slice(&state_bytes[.. DIGEST_BYTES]);

	out
}

/// Returns the 256-bit digest of the byte slice passed to it.
pub fn hash(message: &[u8]) -> Digest {
	let padding = Padding::for_message_len(message.len());

	debug!(
		message_len = message.len(),
		padding_len = padding.byte_len(),
		"hashing message"
	);

	let mut state = [0; STATE_LANES];
	let mut absorbed = 0usize;

	let mut blocks = message.chunks_exact(RATE);

	for block in &mut blocks {
		absorb_block(&mut state, block);
		absorbed += 1;
		trace!(block = absorbed, "absorbed message block");
	}

	// the remainder is under one block and the padding at most RATE + 2
	// bytes, so the tail always fits in two blocks
	let remainder = blocks.remainder();
	let tail_len = remainder.len() + padding.byte_len();
	let mut tail = [0; 2 * RATE];

	tail[.. remainder.len()].copy_from_slice(remainder);

	for (slot, byte) in tail[remainder.len() .. tail_len].iter_mut().zip(padding.bytes()) {
		*slot = byte;
	}

	debug_assert_eq!(tail_len % RATE, 0);

	for block in tail[.. tail_len].chunks_exact(RATE) {
		absorb_block(&mut state, block);
		absorbed += 1;
		trace!(block = absorbed, "absorbed padded block");
	}

	squeeze(&state)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hex_hash(message: &[u8]) -> String {
		hex::encode(hash(message))
	}

	#[test]
	fn test_pinned_digests() {
		assert_eq!(
			hex_hash(b""),
			"0adadb387bbc320b2a3a9ab56ac9b1e73ca0a173f560bdafbeb253a4f67322b0",
		);

		assert_eq!(
			hex_hash(b"2025"),
			"7099b892d11a3203d908e83ce2240852977bdede7051e90027152e0c540f9319",
		);

		assert_eq!(
			hex_hash(b"a"),
			"b968e058a59ca76513c27e3b6956b0232b11e180466e1220cc368c88c2835ed4",
		);

		assert_eq!(
			hex_hash(b"abc"),
			"8555e212ec798c917c32719cfcebc0438ef3cdabb62fcbeb908c994af9f5c4dd",
		);

		assert_eq!(
			hex_hash(b"The quick brown fox jumps over the lazy dog"),
			"88b4af3ced98db8517563b3712851a1698f2accea907657a6c94dcda683b29d8",
		);
	}

	#[test]
	fn test_block_boundary_digests() {
		assert_eq!(
			hex_hash(&[0; 135]),
			"a1fb3dbb4a9ba0b6c82e825b5c68cc5c5ca093f63d969bc2d4be02d12bb3cf0b",
		);

		assert_eq!(
			hex_hash(&[0; 136]),
			"69bfdab55259b9a15f3cfbd1f8198ff7a2da505687f348bb8ea837ce000d00ac",
		);

		assert_eq!(
			hex_hash(&[0; 3 * RATE]),
			"41b52deab0aac4f4deb82f41dd76a3f407f6e3c8a2dfd4a6deb0b400517dca4c",
		);
	}

	#[test]
	fn test_deterministic() {
		let message = b"the same bytes in, the same digest out";

		assert_eq!(hash(message), hash(message));
		assert_eq!(hash(b""), hash(b""));
	}

	#[test]
	fn test_no_collisions_across_block_boundaries() {
		let lengths = [0, 1, 133, 134, 135, 136, 137, 271, 272, 3 * RATE];
		let digests: Vec<Digest> = lengths.iter().map(|&len| hash(&vec![0; len])).collect();

		for (i, a) in digests.iter().enumerate() {
			for b in &digests[i + 1 ..] {
				assert_ne!(a, b);
			}
		}
	}

	#[test]
	fn test_long_message() {
		let message: Vec<u8> = (0 .. 10_000u32).map(|i| (i % 251) as u8).collect();

		assert_eq!(hash(&message).len(), DIGEST_BYTES);
		assert_ne!(hash(&message), hash(&message[.. 9_999]));
	}

	#[test]
	fn test_single_bit_flips_avalanche() {
		let message = *b"2025";
		let base = hash(&message);

		for bit in 0 .. 8 * message.len() {
			let mut flipped = message;
			flipped[bit / 8] ^= 1 << (bit % 8);

			let changed: u32 = base
				.iter()
				.zip(hash(&flipped).iter())
				.map(|(a, b)| (a ^ b).count_ones())
				.sum();

			assert!(changed >= 64, "bit {} changed only {} output bits", bit, changed);
		}
	}

	#[test]
	fn test_independent_calls_in_parallel() {
		let expected = hash(b"2025");

		let handles: Vec<_> = (0 .. 4)
			.map(|_| std::thread::spawn(|| hash(b"2025")))
			.collect();

		for handle in handles {
			assert_eq!(handle.join().unwrap(), expected);
		}
	}
}
