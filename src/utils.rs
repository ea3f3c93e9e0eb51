/// Renders a buffer as space-separated hex octets for log output.
///
/// Wire structures handled by this crate are at most a couple dozen bytes, so
/// a single line is enough; no offsets, no ascii gutter.
pub fn hexdump(data: &[u8]) -> String {
	// 3× len for "xx " minus the trailing separator
	let mut dump = String::with_capacity(3 * data.len());
	for byte in data {
		if !dump.is_empty() {
			dump.push(' ');
		}
		dump.push_str(&format!("{:02x}", byte));
	}
	dump
}

#[cfg(test)]
mod tests {
	use super::hexdump;

	#[test]
	fn test_hexdump() {
		assert_eq!(hexdump(&[]), "");
		assert_eq!(hexdump(&[0x70]), "70");
		assert_eq!(hexdump(&[0x70, 0x00, 0x0a, 0xff]), "70 00 0a ff");
	}
}
