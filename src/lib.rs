//! RFC 4122 UUID generation and formatting
//!
//! ```rust
//! use uuid_rfc4122::{uuid1, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4(None)?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid1(None)?;
//! println!("{}", uuid); // e.g. "7c8bd7e6-a6e4-11ed-b6ac-3d2f4a1c9e20"
//!
//! # #[cfg(feature = "v5")]
//! # {
//! let uuid = uuid5(&Uuid::NAMESPACE_DNS, b"python.org")?;
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! # }
//! # Ok::<(), uuid_rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Version 1 identifiers carry a 60-bit timestamp, the count of 100-nanosecond intervals since
//! 1582-10-15 00:00:00 UTC, split into three fields with the least significant one first:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |        time_hi        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|        clock_seq          |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - `time_low`, `time_mid` and `time_hi` hold the low 32, the middle 16 and the high 12 bits of
//!   the timestamp.
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The `clock_seq` and `node` fields are filled with random bytes. No MAC address is read and
//!   no clock sequence state is kept between calls.
//!
//! The time-ordered variant produced by [`uuid_ordered()`] stores the same timestamp with the
//! most significant field first and without a version nibble, so that the byte order and the
//! string order both follow the creation time:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |0 0 0 0|       time_hi         |           time_mid            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Version 3 and 5 identifiers are the first 16 bytes of the MD5 or SHA-1 hash of a namespace
//! UUID followed by a name, and version 4 identifiers are 16 random bytes; both have their
//! version and variant bits overwritten and every other bit kept.
//!
//! # Random sources
//!
//! Every function that needs randomness takes an optional [`RandSource`]. With `None`, a
//! [`DefaultRandSource`] seeded from the operating system is created for that call and dropped
//! before it returns. Callers generating many identifiers can lend their own source, or hold one
//! in a [`Generator`]:
//!
//! ```rust
//! use uuid_rfc4122::{uuid4, with_rand08, DefaultRandSource, Generator};
//!
//! let mut rng = with_rand08::Adapter(rand::thread_rng());
//! let uuid = uuid4(Some(&mut rng))?;
//! assert_eq!(uuid.version(), Some(4));
//!
//! let mut g = Generator::new(DefaultRandSource::new()?);
//! println!("{}", g.generate_ordered()?);
//! # Ok::<(), uuid_rfc4122::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `v3` enables [`uuid3()`] through the `md-5` crate.
//! - `v5` enables [`uuid5()`] through the `sha1` crate.
//!
//! Without them, the corresponding versions report [`Error::NotImplemented`].
//!
//! Optional features:
//!
//! - `serde` enables serialization of [`Uuid`] through the `serde` crate.
//! - `uuid` enables conversion from and to the `uuid` crate's `Uuid` type.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ErrorKind};

mod format;
pub use format::{format_into, FORMATTED_SIZE, SIZE};

mod id;
pub use id::{Uuid, Variant};

pub mod generator;
#[doc(inline)]
pub use generator::{
    with_rand08, DefaultRandSource, Generator, RandSource, StdSystemTime, TimeSource,
    GREGORIAN_OFFSET,
};

mod v1;
mod v4;

mod named;
pub use named::uuid_from_digest;

mod entry;
pub use entry::{uuid1, uuid3, uuid4, uuid5, uuid_ordered, uuidn, uuidn_into, Version};
