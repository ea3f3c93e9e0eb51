/*!
Fixed-format sense data (SPC-4, 4.5.3): the 18-byte block a device returns
under CHECK CONDITION status to describe what went wrong.

[`decode`](fn.decode.html) turns a raw reply buffer into a
[`FixedSenseData`](struct.FixedSenseData.html); `FixedSenseData::encode`
produces the exact 18 wire bytes back. The 3-byte sense-key-specific trailer
is retained raw and interpreted on demand, since its layout depends on the
sense key (see the [`field` types](enum.SenseKeySpecific.html)).
*/

pub mod key;
pub use self::key::SenseKey;

mod kcq;
pub use self::kcq::Kcq;

mod field;
pub use self::field::SenseKeySpecific;

use error::Error;
use utils::hexdump;

/// Total encoded length of a fixed-format sense data block.
pub const FIXED_SENSE_DATA_LENGTH: usize = 18;

/// RESPONSE CODE for current errors, fixed format.
pub const RESPONSE_CODE_CURRENT: u8 = 0x70;
/// RESPONSE CODE for deferred errors, fixed format.
pub const RESPONSE_CODE_DEFERRED: u8 = 0x71;

// bytes 0..8: response byte, reserved, sense key, information, additional length
const HEAD_LENGTH: usize = 8;
// command-specific information, ASC, ASCQ, FRUC, sense-key-specific trailer
const ADDITIONAL_LENGTH: usize = 10;

const VALID: u8 = 0b1000_0000;

/// Decoded fixed-format sense data.
///
/// A pure value: constructed per decoded error condition (or per encode
/// request), immutable afterwards, no state shared with the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct FixedSenseData {
	/// 7-bit RESPONSE CODE; the VALID bit is not part of it, see `information`
	pub response_code: u8,
	/// The recognized (sense key, ASC, ASCQ) combination
	pub kcq: Kcq,
	/// INFORMATION field; `Some` iff the VALID bit was set on the wire
	pub information: Option<[u8; 4]>,
	pub command_specific_information: [u8; 4],
	/// Raw sense-key-specific trailer; interpret via [`sense_key_specific_field`](#method.sense_key_specific_field)
	pub sense_key_specific: [u8; 3],
}

/// Decodes an 18-byte (or longer; extra vendor bytes are ignored) sense buffer.
///
/// Fails with `BufferUnderflow` if `data` is shorter than the fixed layout
/// requires, and with `InvalidFormat` if the key/ASC/ASCQ triple is not a
/// recognized combination.
pub fn decode(data: &[u8]) -> Result<FixedSenseData, Error> {
	if data.len() < HEAD_LENGTH {
		return Err(Error::BufferUnderflow(HEAD_LENGTH, data.len()));
	}

	let valid = data[0] & VALID != 0;
	let response_code = data[0] & !VALID;
	// data[1] is reserved
	// FILEMARK, EOM and ILI in data[2] are unsupported
	let key = data[2] & 0b1111;

	let mut information = [0; 4];
	information.copy_from_slice(&data[3..7]);

	// data[7] delimits the additional sense bytes, starting at data[8]
	let additional = data[7] as usize;
	if additional < ADDITIONAL_LENGTH {
		return Err(Error::BufferUnderflow(
			HEAD_LENGTH + ADDITIONAL_LENGTH,
			HEAD_LENGTH + additional,
		));
	}
	if data.len() < HEAD_LENGTH + additional {
		return Err(Error::BufferUnderflow(HEAD_LENGTH + additional, data.len()));
	}
	let rest = &data[HEAD_LENGTH..];

	let mut cmd_info = [0; 4];
	cmd_info.copy_from_slice(&rest[0..4]);
	let (asc, ascq) = (rest[4], rest[5]);
	// rest[6] is the field replaceable unit code; not retained
	let mut sks = [0; 3];
	sks.copy_from_slice(&rest[7..10]);
	// the rest of the additional sense bytes are vendor-specific and are skipped

	let kcq = match Kcq::lookup(key, asc, ascq) {
		Ok(kcq) => kcq,
		Err(err) => {
			debug!("rejecting sense buffer [{}]: {}", hexdump(data), err);
			return Err(err);
		}
	};

	Ok(FixedSenseData {
		response_code: response_code,
		kcq: kcq,
		// bytes may well be present and non-zero, but they only mean something when VALID is set
		information: if valid { Some(information) } else { None },
		command_specific_information: cmd_info,
		sense_key_specific: sks,
	})
}

impl FixedSenseData {
	/// Builds sense data for an error condition, the way a target would.
	///
	/// `current` selects between the current (70h) and deferred (71h) response
	/// codes. Optional fields are normalized permissively: `information` of
	/// over-length is dropped (the field is zero-filled and VALID stays
	/// clear), as is `command_specific_information` of the wrong length.
	///
	/// ## Panics
	///
	/// Panics if `information` is shorter than 4 bytes. That cannot come from
	/// the wire, only from broken caller code, so it is treated as a defect
	/// rather than a recoverable error.
	pub fn new(
		current: bool,
		kcq: Kcq,
		information: Option<&[u8]>,
		command_specific_information: &[u8],
		field: SenseKeySpecific,
	) -> FixedSenseData {
		let information = match information {
			Some(info) if info.len() == 4 => {
				let mut fixed = [0; 4];
				fixed.copy_from_slice(info);
				Some(fixed)
			}
			Some(info) if info.len() < 4 => {
				panic!("sense information has invalid length: {}", info.len());
			}
			_ => None,
		};

		let mut cmd_info = [0; 4];
		if command_specific_information.len() == 4 {
			cmd_info.copy_from_slice(command_specific_information);
		}

		FixedSenseData {
			response_code: if current { RESPONSE_CODE_CURRENT } else { RESPONSE_CODE_DEFERRED },
			kcq: kcq,
			information: information,
			command_specific_information: cmd_info,
			sense_key_specific: field.encode(),
		}
	}

	/// Sense key this block was classified under.
	pub fn key(&self) -> SenseKey {
		self.kcq.key()
	}

	/// Interprets the retained 3-byte trailer.
	///
	/// Deferred decode step: the trailer layout is selected by the sense key,
	/// so it only makes sense once the block itself has been decoded.
	pub fn sense_key_specific_field(&self) -> SenseKeySpecific {
		SenseKeySpecific::decode(self.key(), &self.sense_key_specific)
	}

	/// Encodes this block into its wire form, always exactly
	/// [`FIXED_SENSE_DATA_LENGTH`](constant.FIXED_SENSE_DATA_LENGTH.html) bytes.
	pub fn encode(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(FIXED_SENSE_DATA_LENGTH);

		let mut response = self.response_code & !VALID;
		if self.information.is_some() {
			response |= VALID;
		}

		out.push(response);
		out.push(0); // reserved
		out.push(self.kcq.key().value()); // FILEMARK, EOM and ILI stay clear
		out.extend_from_slice(&self.information.unwrap_or([0; 4]));
		out.push(ADDITIONAL_LENGTH as u8); // no vendor-specific bytes follow
		out.extend_from_slice(&self.command_specific_information);
		out.push(self.kcq.code());
		out.push(self.kcq.qualifier());
		out.push(0); // field replaceable unit code
		out.extend_from_slice(&self.sense_key_specific);

		assert_eq!(
			out.len(),
			FIXED_SENSE_DATA_LENGTH,
			"encoded sense data has invalid length"
		);
		out
	}
}
