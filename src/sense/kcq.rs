/*!
Key-Code-Qualifier taxonomy: every error condition a device can report through
fixed-format sense data is a recognized combination of sense key, additional
sense code and additional sense code qualifier. Combinations are drawn from
the SPC-4 additional sense code assignments; triples outside the table fail to
decode with [`Error::InvalidFormat`](../../enum.Error.html).
*/

use error::Error;
use sense::key::SenseKey;

// The whole mapping is spelled out as `match` tables so that it is immutable,
// fully built at compile time and involves no first-use initialization.
macro_rules! kcq_table {
	($($(#[$attr:meta])* $name:ident = ($key:literal, $code:literal, $qualifier:literal),)+) => {
		/// Recognized (sense key, ASC, ASCQ) combinations.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[cfg_attr(feature = "serializable", derive(Serialize))]
		pub enum Kcq {
			$($(#[$attr])* $name,)+
		}

		impl Kcq {
			/// Resolves a raw triple against the table.
			pub fn lookup(key: u8, code: u8, qualifier: u8) -> Result<Kcq, Error> {
				match (key & 0b1111, code, qualifier) {
					$(($key, $code, $qualifier) => Ok(Kcq::$name),)+
					(key, code, qualifier) => Err(Error::InvalidFormat(format!(
						"unknown KCQ {:#04x}/{:#04x}/{:#04x}", key, code, qualifier
					))),
				}
			}

			/// Sense key part of this combination.
			pub fn key(&self) -> SenseKey {
				SenseKey::from_nibble(match *self {
					$(Kcq::$name => $key,)+
				})
			}

			/// Additional sense code part of this combination.
			pub fn code(&self) -> u8 {
				match *self {
					$(Kcq::$name => $code,)+
				}
			}

			/// Additional sense code qualifier part of this combination.
			pub fn qualifier(&self) -> u8 {
				match *self {
					$(Kcq::$name => $qualifier,)+
				}
			}
		}
	}
}

kcq_table! {
	// key 0h: NO SENSE
	NoAdditionalSenseInformation = (0x0, 0x00, 0x00),

	// key 1h: RECOVERED ERROR
	WriteErrorRecoveredWithAutoReallocation = (0x1, 0x0c, 0x01),
	RecoveredDataWithRetries = (0x1, 0x17, 0x01),
	RecoveredDataWithEcc = (0x1, 0x18, 0x00),

	// key 2h: NOT READY
	LogicalUnitNotReadyCauseNotReportable = (0x2, 0x04, 0x00),
	LogicalUnitIsInProcessOfBecomingReady = (0x2, 0x04, 0x01),
	LogicalUnitNotReadyInitializingCommandRequired = (0x2, 0x04, 0x02),
	LogicalUnitNotReadyManualInterventionRequired = (0x2, 0x04, 0x03),
	/// Expect a progress indication in the sense-key-specific field
	LogicalUnitNotReadyFormatInProgress = (0x2, 0x04, 0x04),
	MediumNotPresent = (0x2, 0x3a, 0x00),

	// key 3h: MEDIUM ERROR
	PeripheralDeviceWriteFault = (0x3, 0x03, 0x00),
	UnrecoveredReadError = (0x3, 0x11, 0x00),
	AddressMarkNotFoundForIdField = (0x3, 0x12, 0x00),
	RecordNotFound = (0x3, 0x14, 0x01),
	MediumFormatCorrupted = (0x3, 0x31, 0x00),

	// key 4h: HARDWARE ERROR
	LogicalUnitCommunicationFailure = (0x4, 0x08, 0x00),
	MechanicalPositioningError = (0x4, 0x15, 0x01),
	TimeoutOnLogicalUnit = (0x4, 0x3e, 0x02),
	InternalTargetFailure = (0x4, 0x44, 0x00),

	// key 5h: ILLEGAL REQUEST
	ParameterListLengthError = (0x5, 0x1a, 0x00),
	InvalidCommandOperationCode = (0x5, 0x20, 0x00),
	LogicalBlockAddressOutOfRange = (0x5, 0x21, 0x00),
	InvalidFieldInCdb = (0x5, 0x24, 0x00),
	LogicalUnitNotSupported = (0x5, 0x25, 0x00),
	InvalidFieldInParameterList = (0x5, 0x26, 0x00),
	CommandSequenceError = (0x5, 0x2c, 0x00),
	SavingParametersNotSupported = (0x5, 0x39, 0x00),
	InvalidMessageError = (0x5, 0x49, 0x00),
	MediumRemovalPrevented = (0x5, 0x53, 0x02),

	// key 6h: UNIT ATTENTION
	NotReadyToReadyChangeMediumMayHaveChanged = (0x6, 0x28, 0x00),
	PowerOnResetOrBusDeviceResetOccurred = (0x6, 0x29, 0x00),
	PowerOnOccurred = (0x6, 0x29, 0x01),
	ScsiBusResetOccurred = (0x6, 0x29, 0x02),
	BusDeviceResetFunctionOccurred = (0x6, 0x29, 0x03),
	ParametersChanged = (0x6, 0x2a, 0x00),
	ModeParametersChanged = (0x6, 0x2a, 0x01),
	InquiryDataHasChanged = (0x6, 0x3f, 0x03),
	ReportedLunsDataHasChanged = (0x6, 0x3f, 0x0e),

	// key 7h: DATA PROTECT
	WriteProtected = (0x7, 0x27, 0x00),
	HardwareWriteProtected = (0x7, 0x27, 0x01),
	LogicalUnitSoftwareWriteProtected = (0x7, 0x27, 0x02),

	// key 8h: BLANK CHECK
	EndOfDataDetected = (0x8, 0x00, 0x05),

	// key Ah: COPY ABORTED
	CopyTargetDeviceNotReachable = (0xa, 0x0d, 0x02),

	// key Bh: ABORTED COMMAND
	ScsiParityError = (0xb, 0x47, 0x00),
	OverlappedCommandsAttempted = (0xb, 0x4e, 0x00),

	// key Dh: VOLUME OVERFLOW
	EndOfPartitionMediumDetected = (0xd, 0x00, 0x02),

	// key Eh: MISCOMPARE
	MiscompareDuringVerifyOperation = (0xe, 0x1d, 0x00),
}
