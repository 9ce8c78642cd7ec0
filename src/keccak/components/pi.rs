use super::super::{State, STATE_LANES};

pub fn pi(state: &mut State) {
	let mut new_state = [0; STATE_LANES];

	for (i, new_lane) in new_state.iter_mut().enumerate() {
		let x = i % 5;
		let y = i / 5;

		*new_lane = state[5 * x + (x + 3 * y) % 5];
	}

	*state = new_state;
}

#[test]
fn test_reads_from_snapshot() {
	let mut state = [0; 25];

	for (i, lane) in state.iter_mut().enumerate() {
		*lane = i as u64;
	}

	pi(&mut state);

	for (i, &lane) in state.iter().enumerate() {
		let x = (i % 5) as u64;
		let y = (i / 5) as u64;

		assert_eq!(lane, 5 * x + (x + 3 * y) % 5);
	}
}

#[test]
fn test_moves_every_lane_exactly_once() {
	let mut state = [0; 25];

	for (i, lane) in state.iter_mut().enumerate() {
		*lane = i as u64;
	}

	pi(&mut state);

	let mut seen = [false; 25];

	for &lane in state.iter() {
		assert!(!seen[lane as usize]);
		seen[lane as usize] = true;
	}
}
