//! Conversion between bytes and little-endian 64-bit lanes.

/// Decodes `bytes` into `lanes`, eight bytes per lane, least significant
/// byte first.
///
/// Panics unless `bytes.len() == 8 * lanes.len()`.
pub fn bytes_to_lanes(bytes: &[u8], lanes: &mut [u64]) {
	assert_eq!(bytes.len(), 8 * lanes.len());

	for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(8)) {
		let mut buf = [0; 8];
		buf.copy_from_slice(chunk);

		*lane = u64::from_le_bytes(buf);
	}
}

/// Encodes `lanes` into `bytes`, the inverse of [`bytes_to_lanes`].
///
/// Panics unless `bytes.len() == 8 * lanes.len()`.
pub fn lanes_to_bytes(lanes: &[u64], bytes: &mut [u8]) {
	assert_eq!(bytes.len(), 8 * lanes.len());

	for (chunk, lane) in bytes.chunks_exact_mut(8).zip(lanes) {
		chunk.copy_from_slice(&lane.to_le_bytes());
	}
}

#[test]
fn test_little_endian_lanes() {
	let bytes = [
		0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
		0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
	];
	let mut lanes = [0; 2];

	bytes_to_lanes(&bytes, &mut lanes);

	assert_eq!(lanes, [0x0807060504030201, 0x80000000000000ff]);
}

#[test]
fn test_lanes_back_to_bytes() {
	let mut frame = [0u8; 200];

	for (i, byte) in frame.iter_mut().enumerate() {
		*byte = (i * 7) as u8;
	}

	let mut lanes = [0; 25];
	let mut bytes = [0; 200];

	bytes_to_lanes(&frame, &mut lanes);
	lanes_to_bytes(&lanes, &mut bytes);

	assert_eq!(bytes, frame);
}

#[test]
fn test_empty_input() {
	let mut lanes: [u64; 0] = [];

	bytes_to_lanes(&[], &mut lanes);
}

#[test]
#[should_panic]
fn test_rejects_partial_lane() {
	let mut lanes = [0; 2];

	bytes_to_lanes(&[0; 12], &mut lanes);
}
