use byteorder::{BigEndian, ByteOrder};

use sense::key::SenseKey;

/// SKSV, top bit of the first trailer byte; clear means the trailer carries no data
const SKSV: u8 = 0b1000_0000;
/// C/D: set if the field pointer refers to the CDB rather than the parameter list
const COMMAND_DATA: u8 = 0b0100_0000;
/// BPV: set if the bit pointer is meaningful
const BIT_POINTER_VALID: u8 = 0b0000_1000;

/// Decoded sense-key-specific field (SPC-4, 4.5.2.4).
///
/// The 3-byte trailer at the end of fixed-format sense data has no layout of
/// its own: its interpretation depends on the sense key the block was
/// classified under, which is why [`decode`](#method.decode) runs as a second,
/// later step over the retained raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub enum SenseKeySpecific {
	/// SKSV is clear: nothing to report
	NoData,
	/// Illegal Request: which CDB or parameter-list byte (and bit) the device objected to
	FieldPointer {
		/// points into the CDB if set, into the parameter list otherwise
		command_data: bool,
		/// offending bit within the offending byte, when the device cares to say
		bit_pointer: Option<u8>,
		field_pointer: u16,
	},
	/// No Sense / Not Ready: how far a long-running operation has come, in 1/65536ths of completion
	ProgressIndication { progress: u16 },
	/// Sense keys this layer knows no trailer layout for; raw bytes, left to the caller
	VendorOpaque([u8; 3]),
}

impl SenseKeySpecific {
	/// Interprets a raw trailer in the context of `key`.
	pub fn decode(key: SenseKey, raw: &[u8; 3]) -> SenseKeySpecific {
		if raw[0] & SKSV == 0 {
			return SenseKeySpecific::NoData;
		}

		match key {
			SenseKey::IllegalRequest => SenseKeySpecific::FieldPointer {
				command_data: raw[0] & COMMAND_DATA != 0,
				bit_pointer: if raw[0] & BIT_POINTER_VALID != 0 {
					Some(raw[0] & 0b111)
				} else {
					None
				},
				field_pointer: BigEndian::read_u16(&raw[1..3]),
			},
			SenseKey::NoSense | SenseKey::NotReady => SenseKeySpecific::ProgressIndication {
				progress: BigEndian::read_u16(&raw[1..3]),
			},
			_ => SenseKeySpecific::VendorOpaque(*raw),
		}
	}

	/// Produces the 3 wire bytes of this field.
	pub fn encode(&self) -> [u8; 3] {
		match *self {
			SenseKeySpecific::NoData => [0; 3],
			SenseKeySpecific::FieldPointer { command_data, bit_pointer, field_pointer } => {
				let mut head = SKSV;
				if command_data {
					head |= COMMAND_DATA;
				}
				if let Some(bit) = bit_pointer {
					head |= BIT_POINTER_VALID | (bit & 0b111);
				}
				let mut out = [head, 0, 0];
				BigEndian::write_u16(&mut out[1..3], field_pointer);
				out
			}
			SenseKeySpecific::ProgressIndication { progress } => {
				let mut out = [SKSV, 0, 0];
				BigEndian::write_u16(&mut out[1..3], progress);
				out
			}
			SenseKeySpecific::VendorOpaque(raw) => raw,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::SenseKeySpecific;
	use sense::key::SenseKey;

	#[test]
	fn test_sksv_clear_means_no_data() {
		// non-zero garbage in bytes 1..3 must not matter when SKSV is clear
		let raw = [0b0111_1111, 0xde, 0xad];
		assert_eq!(SenseKeySpecific::decode(SenseKey::IllegalRequest, &raw), SenseKeySpecific::NoData);
		assert_eq!(SenseKeySpecific::decode(SenseKey::MediumError, &raw), SenseKeySpecific::NoData);
	}

	#[test]
	fn test_field_pointer() {
		let raw = [0b1100_1010, 0x01, 0x02];
		let field = SenseKeySpecific::decode(SenseKey::IllegalRequest, &raw);
		assert_eq!(field, SenseKeySpecific::FieldPointer {
			command_data: true,
			bit_pointer: Some(2),
			field_pointer: 0x0102,
		});
		assert_eq!(field.encode(), raw);
	}

	#[test]
	fn test_field_pointer_without_bit_pointer() {
		let field = SenseKeySpecific::decode(SenseKey::IllegalRequest, &[0b1000_0000, 0x00, 0x07]);
		assert_eq!(field, SenseKeySpecific::FieldPointer {
			command_data: false,
			bit_pointer: None,
			field_pointer: 7,
		});
	}

	#[test]
	fn test_progress_indication() {
		// half-way: 0x8000 / 65536
		let field = SenseKeySpecific::decode(SenseKey::NotReady, &[0b1000_0000, 0x80, 0x00]);
		assert_eq!(field, SenseKeySpecific::ProgressIndication { progress: 0x8000 });
		assert_eq!(field.encode(), [0b1000_0000, 0x80, 0x00]);
	}

	#[test]
	fn test_vendor_opaque_for_other_keys() {
		let raw = [0b1010_0101, 0x11, 0x22];
		let field = SenseKeySpecific::decode(SenseKey::HardwareError, &raw);
		assert_eq!(field, SenseKeySpecific::VendorOpaque(raw));
		assert_eq!(field.encode(), raw);
	}

	#[test]
	fn test_no_data_encodes_to_zeroes() {
		assert_eq!(SenseKeySpecific::NoData.encode(), [0; 3]);
	}
}
