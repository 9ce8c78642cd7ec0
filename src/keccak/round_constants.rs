use super::NUM_ROUNDS;

const LFSR_SEED: u64 = 0x01;
const LFSR_TAPS: u64 = 0xc000_0000_0000_0001;

const fn step_lfsr(register: u64) -> u64 {
	let new_bit = register >> 63 != 0;
	let shifted = register << 1;

	if new_bit {
		shifted ^ LFSR_TAPS
	} else {
		shifted
	}
}

/// Yields the constant for each round in order, advancing a 64-bit LFSR
/// after every value handed out. Stops after `NUM_ROUNDS` values.
#[derive(Clone, Debug)]
pub struct RoundConstants {
	register: u64,
	remaining: usize,
}

impl RoundConstants {
	pub const fn new() -> Self {
		Self {register: LFSR_SEED, remaining: NUM_ROUNDS}
	}
}

impl Default for RoundConstants {
	fn default() -> Self {
		Self::new()
	}
}

impl Iterator for RoundConstants {
	type Item = u64;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		let out = self.register;
		self.register = step_lfsr(self.register);
		self.remaining -= 1;

		Some(out)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl ExactSizeIterator for RoundConstants {}

const fn compute_round_constants() -> [u64; NUM_ROUNDS] {
	let mut register = LFSR_SEED;
	let mut out = [0; NUM_ROUNDS];

	let mut i = 0;

	while i < NUM_ROUNDS {
		out[i] = register;
		register = step_lfsr(register);

		i += 1;
	}

	out
}

pub const ROUND_CONSTANTS: [u64; NUM_ROUNDS] = compute_round_constants();

#[test]
fn test_round_constant_sequence() {
	assert_eq!(
		ROUND_CONSTANTS,
		[
			0x000001, 0x000002, 0x000004, 0x000008,
			0x000010, 0x000020, 0x000040, 0x000080,
			0x000100, 0x000200, 0x000400, 0x000800,
			0x001000, 0x002000, 0x004000, 0x008000,
			0x010000, 0x020000, 0x040000, 0x080000,
			0x100000, 0x200000, 0x400000, 0x800000,
		],
	);
}

#[test]
fn test_generator_matches_table() {
	let mut generated = RoundConstants::new();

	assert_eq!(generated.len(), NUM_ROUNDS);

	for &expected in ROUND_CONSTANTS.iter() {
		assert_eq!(generated.next(), Some(expected));
	}

	assert_eq!(generated.next(), None);
}

#[test]
fn test_round_constants_distinct() {
	for (i, a) in ROUND_CONSTANTS.iter().enumerate() {
		for b in &ROUND_CONSTANTS[i + 1 ..] {
			assert_ne!(a, b);
		}
	}
}

#[test]
fn test_feedback_on_high_bit() {
	assert_eq!(step_lfsr(1 << 63), LFSR_TAPS);
	assert_eq!(step_lfsr((1 << 63) | 1), LFSR_TAPS ^ 0b10);
	assert_eq!(step_lfsr(0x40), 0x80);
}
