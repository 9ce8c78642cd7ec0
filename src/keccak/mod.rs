pub mod codec;
pub mod padding;
pub mod round_constants;
pub mod sponge;

use round_constants::RoundConstants;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub use components::rho::ROTATION_OFFSETS;

/// Bytes absorbed per permutation call.
pub const RATE: usize = 136;
/// Bytes of state never written by input directly.
pub const CAPACITY: usize = 64;
pub const STATE_BYTES: usize = RATE + CAPACITY;
pub const STATE_LANES: usize = STATE_BYTES / 8;
pub const NUM_ROUNDS: usize = 24;

/// The 1600-bit state. Lane `i` sits at `x = i % 5`, `y = i / 5`.
pub type State = [u64; STATE_LANES];

/// Applies a single round to `state`.
pub fn keccak_round(state: &mut State, round_constant: u64) {
	theta(state);
	rho(state);
	pi(state);
	chi(state);
	iota(state, round_constant);
}

/// Applies the full 24-round permutation to `state`.
pub fn keccak(state: &mut State) {
	for round_constant in RoundConstants::new() {
		keccak_round(state, round_constant);
	}
}

#[test]
fn test_zero_state_permutation() {
	let mut state = [0; STATE_LANES];

	keccak(&mut state);

	assert_eq!(state[0], 0x3c5dc051d48f3bf7);
	assert_eq!(state[1], 0x402f268e6b6eac2c);
	assert_eq!(state[2], 0xa6d47732859f42e6);
}

#[test]
fn test_permutation_is_rounds_in_order() {
	let mut by_rounds = [0; STATE_LANES];
	by_rounds[3] = 0x0123456789abcdef;
	let mut by_keccak = by_rounds;

	for &round_constant in round_constants::ROUND_CONSTANTS.iter() {
		keccak_round(&mut by_rounds, round_constant);
	}

	keccak(&mut by_keccak);

	assert_eq!(by_rounds, by_keccak);
}
