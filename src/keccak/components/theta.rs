use super::super::State;

/// Mixes each group of five consecutive lanes with the parities of its
/// neighbouring groups.
pub fn theta(state: &mut State) {
	let mut parities = [0u64; 5];

	for g in 0 .. 5 {
		for lane in &state[5 * g ..][.. 5] {
			parities[g] ^= *lane;
		}
	}

	for g in 0 .. 5 {
		let gm1 = (g + 4) % 5;
		let gp1 = (g + 1) % 5;

		let crossed_parities = parities[gm1] ^ parities[gp1].rotate_right(1);

		for lane in &mut state[5 * g ..][.. 5] {
			*lane ^= crossed_parities;
		}
	}
}

#[test]
fn test_single_bit_spreads_to_neighbour_groups() {
	let mut state = [0; 25];
	state[0] = 1;

	theta(&mut state);

	assert_eq!(state[0], 1);
	assert!(state[1 .. 5].iter().all(|&lane| lane == 0));
	assert!(state[5 .. 10].iter().all(|&lane| lane == 1));
	assert!(state[10 .. 20].iter().all(|&lane| lane == 0));
	assert!(state[20 .. 25].iter().all(|&lane| lane == 1 << 63));
}

#[test]
fn test_even_parity_is_fixed_point() {
	let mut state = [0; 25];
	state[7] = 0xdead_beef;
	state[8] = 0xdead_beef;

	let before = state;
	theta(&mut state);

	assert_eq!(state, before);
}
