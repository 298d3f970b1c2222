//! nexus-codec: issue and validate nexus membership keys.
//!
//! A key is five separator-delimited segments, all glued together with the
//! separator glyph of the member's tier:
//!
//! ```text
//! ARK4E4-AQ7X#-1830F-K2P!AS-AM
//! ^^^^^^ ^^^^^ ^^^^^ ^^^^^^ ^^
//!   A      B     C   D+Pers  checksum
//! ```
//!
//! - A: tier prefix + first three digits of the user hash fragment
//! - B: tier rank letter + four pattern characters
//! - C: registration date time signature (`YY M DD`, hex)
//! - D: four more pattern characters, then the two-character personal element
//! - checksum: two base-36 digits over everything before it
//!
//! The checksum only guards against typos and casual edits. It is not
//! cryptographic and keys are not a security boundary.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use nexus_codec::{decode, encode};
//! use nexus_types::KeyAttributes;
//!
//! let registered = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
//! let attrs = KeyAttributes::with_name("Alice Smith");
//! let key = encode("alice123", "Archivist", &registered, Some(&attrs)).unwrap();
//!
//! let identity = decode(&key).unwrap();
//! assert_eq!(identity.tier_name(), "ARCHIVIST");
//! assert_eq!(identity.personal_element, "AS");
//! ```

pub mod checksum;
pub mod decode;
pub mod encode;
pub mod error;
pub mod hash;
pub mod pattern;
pub mod personal;
pub mod report;
pub mod segments;
pub mod signature;

pub use decode::decode;
pub use encode::{encode, encode_for_tier};
pub use error::{EncodeError, ValidationError};
pub use report::{IdentityFields, ValidationReport, validate};
pub use segments::{KeySegments, parse_segments};
