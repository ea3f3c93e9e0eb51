/*!
Codecs for small binary structures from the iSCSI/SCSI wire: the fixed-format
sense data block that carries device errors back to an initiator (SPC-4), and
the Initiator Session Identifier from the Login PDU (RFC 3720).

Both codecs are pure transformations over caller-owned buffers: decoding
returns a structured value or a typed [`Error`](enum.Error.html), encoding
returns an exact-length byte sequence. No I/O, no internal state, safe to call
concurrently over independent buffers.

## Example

```
use iscsi_wire::sense;

// CHECK CONDITION reply: ILLEGAL REQUEST, INVALID FIELD IN CDB
let buf = [
	0x70, 0x00, 0x05,             // current error, sense key
	0x00, 0x00, 0x00, 0x00,       // information (VALID not set)
	0x0a,                         // additional sense length
	0x00, 0x00, 0x00, 0x00,       // command-specific information
	0x24, 0x00,                   // ASC, ASCQ
	0x00,                         // field replaceable unit code
	0xc0, 0x00, 0x01,             // sense key specific: CDB byte 1
];

let data = sense::decode(&buf).unwrap();
assert_eq!(data.kcq, sense::Kcq::InvalidFieldInCdb);
assert_eq!(data.information, None);
```
*/

#![warn(missing_debug_implementations)]

#[cfg(feature = "serializable")]
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate log;
extern crate byteorder;
extern crate rand;
extern crate rand_xoshiro;

mod error;
pub use error::Error;

mod utils;

pub mod sense;

pub mod isid;
pub use isid::{Format, Isid};
