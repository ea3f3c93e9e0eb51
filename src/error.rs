use std::io;

quick_error! {
	/// Things that can go wrong while decoding or validating wire structures.
	///
	/// Internal invariant failures (e.g. an encoder producing a buffer of the
	/// wrong length) are *not* represented here: those can only arise from
	/// broken code, not from untrusted input, and panic instead.
	#[derive(Debug)]
	pub enum Error {
		/// Fewer bytes were available than the fixed layout requires.
		BufferUnderflow(need: usize, have: usize) {
			display("buffer underflow: needed {} bytes, got only {}", need, have)
		}
		/// A decoded enumerated value matches no known variant.
		InvalidFormat(what: String) {
			display("invalid format: {}", what)
		}
		/// Structurally decodable, but violates a standard-mandated constraint.
		IntegrityViolation(what: &'static str) {
			display("integrity violation: {}", what)
		}
	}
}

impl From<Error> for io::Error {
	fn from(err: Error) -> Self {
		io::Error::new(io::ErrorKind::InvalidData, err)
	}
}
