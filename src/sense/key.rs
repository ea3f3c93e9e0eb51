/// Sense keys, as seen in SPC-4, 4.5.6, table 43
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub enum SenseKey {
	/// Either nothing to report, or a CHECK CONDITION caused by one of the FILEMARK/EOM/ILI bits
	NoSense = 0,
	/// Command completed, but only after some recovery action was performed
	RecoveredError = 1,
	/// The logical unit is not accessible
	NotReady = 2,
	/// Unrecoverable error most likely caused by damaged media
	MediumError = 3,
	/// Unrecoverable non-medium failure (controller, CRC, …)
	HardwareError = 4,
	/// Invalid opcode/LUN/CDB field/parameter; see the sense-key-specific field for the offending byte
	IllegalRequest = 5,
	/// Removable medium change, reset, or another condition that needs attention; see SAM-4
	UnitAttention = 6,
	/// Prohibited read or write on a protected block
	DataProtect = 7,
	/// Blank medium (or format-defined end-of-data) hit while reading, or non-blank medium while writing
	BlankCheck = 8,
	VendorSpecific = 9,
	/// An EXTENDED COPY command was aborted
	CopyAborted = 10,
	/// Any other aborted command; the client may recover by retrying
	AbortedCommand = 11,
	Reserved = 12,
	/// A buffered device reached the end of partition; unwritten data may still be recoverable
	VolumeOverflow = 13,
	/// Source data did not match the data read back from the medium
	Miscompare = 14,
	/// Completion sense data report
	Completed = 15,
}

impl SenseKey {
	/// Maps the low nibble of a byte to a sense key. Total: all 16 patterns are assigned.
	pub fn from_nibble(value: u8) -> SenseKey {
		match value & 0b1111 {
			0 => SenseKey::NoSense,
			1 => SenseKey::RecoveredError,
			2 => SenseKey::NotReady,
			3 => SenseKey::MediumError,
			4 => SenseKey::HardwareError,
			5 => SenseKey::IllegalRequest,
			6 => SenseKey::UnitAttention,
			7 => SenseKey::DataProtect,
			8 => SenseKey::BlankCheck,
			9 => SenseKey::VendorSpecific,
			10 => SenseKey::CopyAborted,
			11 => SenseKey::AbortedCommand,
			12 => SenseKey::Reserved,
			13 => SenseKey::VolumeOverflow,
			14 => SenseKey::Miscompare,
			_ => SenseKey::Completed,
		}
	}

	pub fn value(&self) -> u8 {
		*self as u8
	}
}

#[cfg(test)]
mod tests {
	use super::SenseKey;

	#[test]
	fn test_from_nibble_round_trip() {
		for nibble in 0..16 {
			assert_eq!(SenseKey::from_nibble(nibble).value(), nibble);
		}
	}

	#[test]
	fn test_from_nibble_masks_upper_bits() {
		// FILEMARK/EOM/ILI bits share the byte with the sense key
		assert_eq!(SenseKey::from_nibble(0b1110_0101), SenseKey::IllegalRequest);
	}
}
