use super::super::State;

pub fn chi(state: &mut State) {
	for y in 0 .. 5 {
		let row = &mut state[5 * y ..][.. 5];
		let mut new_row = [0u64; 5];

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			new_row[x] = !row[xp1] & row[xp2];
		}

		for x in 0 .. 5 {
			row[x] ^= new_row[x];
		}
	}
}

#[test]
fn test_zero_state_is_fixed_point() {
	let mut state = [0; 25];

	chi(&mut state);

	assert_eq!(state, [0; 25]);
}

#[test]
fn test_single_lane_within_row() {
	let mut state = [0; 25];
	state[12] = 1;

	chi(&mut state);

	// row y = 2 covers lanes 10 .. 15
	assert_eq!(state[10], 1);
	assert_eq!(state[11], 0);
	assert_eq!(state[12], 1);
	assert_eq!(state[13], 0);
	assert_eq!(state[14], 0);
	assert!(state[.. 10].iter().chain(&state[15 ..]).all(|&lane| lane == 0));
}
