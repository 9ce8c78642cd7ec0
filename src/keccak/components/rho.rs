use super::super::{State, STATE_LANES};

/// Right-rotation amount for each lane, by linear index.
pub const ROTATION_OFFSETS: [u32; STATE_LANES] = [
	 0, 36,  3, 41, 18,
	 1, 44, 10, 45,  2,
	62,  6, 43, 15, 61,
	28, 55, 25, 21, 56,
	27, 20, 39,  8, 14,
];

pub fn rho(state: &mut State) {
	for (lane, &offset) in state.iter_mut().zip(ROTATION_OFFSETS.iter()) {
		*lane = lane.rotate_right(offset);
	}
}

#[test]
fn test_rotates_each_lane_right() {
	let mut state = [1; 25];

	rho(&mut state);

	assert_eq!(state[0], 1);
	assert_eq!(state[1], 1 << 28);
	assert_eq!(state[5], 1 << 63);
	assert_eq!(state[24], 1 << 50);
}

#[test]
fn test_all_ones_lanes_unchanged() {
	let mut state = [u64::MAX; 25];

	rho(&mut state);

	assert_eq!(state, [u64::MAX; 25]);
}
