use super::super::State;

pub fn iota(state: &mut State, round_constant: u64) {
	state[0] ^= round_constant;
}

#[test]
fn test_touches_only_first_lane() {
	let mut state = [0xff; 25];

	iota(&mut state, 0x8000_0000_0000_0001);

	assert_eq!(state[0], 0x8000_0000_0000_00fe);
	assert!(state[1 ..].iter().all(|&lane| lane == 0xff));
}
