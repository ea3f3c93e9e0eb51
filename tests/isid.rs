extern crate iscsi_wire;

use iscsi_wire::{Error, Format, Isid};

#[test]
fn known_value_packing() {
	// T=00b (OUI) | A=010101b | B=abcdh | C=42h, then D=1234h in the top
	// half of the second line
	let isid = Isid::new(Format::Oui, 0x15, 0xabcd, 0x42, 0x1234);
	assert_eq!(isid.serialize().unwrap(), 0x15ab_cd42_1234_0000);
}

#[test]
fn format_tag_occupies_the_top_two_bits() {
	let isid = Isid::new(Format::Random, 0, 0xbeef, 0x07, 0);
	let packed = isid.serialize().unwrap();
	assert_eq!(packed >> 62, 0b10);

	let isid = Isid::new(Format::IanaEnterpriseNumber, 0, 0x0afe, 0x01, 0x9999);
	assert_eq!(isid.serialize().unwrap() >> 62, 0b01);
}

#[test]
fn round_trip_all_formats() {
	let fixtures = [
		Isid::new(Format::Oui, 0x3f, 0xffff, 0xff, 0xffff),
		Isid::new(Format::Oui, 0, 0, 0, 0),
		Isid::new(Format::IanaEnterpriseNumber, 0x2a, 0x1234, 0x56, 0x789a),
		Isid::new(Format::Random, 0, 0x4242, 0x17, 0),
		Isid::new(Format::Reserved, 0, 0, 0, 0),
	];

	for isid in fixtures.iter() {
		let packed = isid.serialize().unwrap();
		assert_eq!(&Isid::deserialize(packed).unwrap(), isid);
	}
}

#[test]
fn random_format_requires_unused_d() {
	let isid = Isid::new(Format::Random, 0, 0x4242, 0x17, 1);
	match isid.check_integrity() {
		Err(Error::IntegrityViolation(_)) => (),
		other => panic!("expected IntegrityViolation, got {:?}", other),
	}
	assert!(isid.serialize().is_err());

	// the same constraint holds on the way in
	let packed = 0x8042_4217_0001_0000u64;
	assert!(Isid::deserialize(packed).is_err());
}

// The RFC reserves each of A/B/C/D individually under T=11b, so a single
// nonzero field is already a violation; requiring *all* fields to be nonzero
// before complaining would let almost every misuse through.
#[test]
fn reserved_format_rejects_any_nonzero_field() {
	assert!(Isid::new(Format::Reserved, 0, 0, 0, 0).check_integrity().is_ok());

	let violations = [
		Isid::new(Format::Reserved, 1, 0, 0, 0),
		Isid::new(Format::Reserved, 0, 1, 0, 0),
		Isid::new(Format::Reserved, 0, 0, 1, 0),
		Isid::new(Format::Reserved, 0, 0, 0, 1),
	];
	for isid in violations.iter() {
		match isid.check_integrity() {
			Err(Error::IntegrityViolation(_)) => (),
			other => panic!("expected IntegrityViolation for {:?}, got {:?}", isid, other),
		}
	}
}

#[test]
fn create_random_is_deterministic() {
	let first = Isid::create_random(0x1234);
	let second = Isid::create_random(0x1234);
	assert_eq!(first, second);

	let other = Isid::create_random(0x4321);
	assert!(first.b != other.b || first.c != other.c);
}

#[test]
fn create_random_respects_the_format() {
	let isid = Isid::create_random(7);
	assert_eq!(isid.format, Format::Random);
	assert_eq!(isid.a, 0);
	assert_eq!(isid.d, 0);
	assert!(isid.check_integrity().is_ok());

	let packed = isid.serialize().unwrap();
	assert_eq!(Isid::deserialize(packed).unwrap(), isid);
}

#[test]
fn wire_bytes_layout() {
	let isid = Isid::new(Format::Oui, 0x15, 0xabcd, 0x42, 0x1234);
	assert_eq!(isid.wire_bytes().unwrap(), [0x15, 0xab, 0xcd, 0x42, 0x12, 0x34]);

	let read_back = Isid::from_wire_bytes(&[0x15, 0xab, 0xcd, 0x42, 0x12, 0x34]).unwrap();
	assert_eq!(read_back, isid);
}

#[test]
fn wire_bytes_underflow() {
	match Isid::from_wire_bytes(&[0x15, 0xab, 0xcd]) {
		Err(Error::BufferUnderflow(6, 3)) => (),
		other => panic!("expected BufferUnderflow, got {:?}", other),
	}
}

#[test]
fn equality_is_field_for_field() {
	let isid = Isid::new(Format::Oui, 1, 2, 3, 4);
	assert_eq!(isid, Isid::new(Format::Oui, 1, 2, 3, 4));
	assert!(isid != Isid::new(Format::Oui, 1, 2, 3, 5));
	assert!(isid != Isid::new(Format::IanaEnterpriseNumber, 1, 2, 3, 4));
}
