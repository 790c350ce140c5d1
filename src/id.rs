use std::fmt;

use crate::format::{write_canonical, SIZE};
use fstr::FStr;

/// Represents a Universally Unique IDentifier.
///
/// The derived ordering compares the underlying bytes as an unsigned big-endian integer, which is
/// what makes [`uuid_ordered()`](crate::uuid_ordered) values sort by creation time.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; SIZE]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv1 byte array from a 60-bit timestamp (100-nanosecond intervals since
    /// 1582-10-15) and the eight bytes that fill the clock sequence and node fields.
    ///
    /// The two most significant bits of `clock_seq_node[0]` are replaced by the variant.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` does not fit in 60 bits.
    pub const fn from_fields_v1(timestamp: u64, clock_seq_node: [u8; 8]) -> Self {
        if timestamp >= 1 << 60 {
            panic!("invalid field value");
        }

        let time_low = timestamp as u32;
        let time_mid = (timestamp >> 32) as u16;
        let time_hi_and_version = ((timestamp >> 48) as u16 & 0x0fff) | 0x1000;

        Self([
            (time_low >> 24) as u8,
            (time_low >> 16) as u8,
            (time_low >> 8) as u8,
            time_low as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            (time_hi_and_version >> 8) as u8,
            time_hi_and_version as u8,
            0x80 | (clock_seq_node[0] & 0x3f),
            clock_seq_node[1],
            clock_seq_node[2],
            clock_seq_node[3],
            clock_seq_node[4],
            clock_seq_node[5],
            clock_seq_node[6],
            clock_seq_node[7],
        ])
    }

    /// Creates a time-ordered UUID byte array from a 60-bit timestamp and eight trailing bytes.
    ///
    /// The timestamp fields are stored most significant first (time_hi, time_mid, time_low) and no
    /// version nibble is written, so the byte order of two such UUIDs follows their timestamps.
    /// The two most significant bits of `tail[0]` are replaced by the variant.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` does not fit in 60 bits.
    pub const fn from_fields_ordered(timestamp: u64, tail: [u8; 8]) -> Self {
        if timestamp >= 1 << 60 {
            panic!("invalid field value");
        }

        let time_low = timestamp as u32;
        let time_mid = (timestamp >> 32) as u16;
        let time_hi = (timestamp >> 48) as u16 & 0x0fff;

        Self([
            (time_hi >> 8) as u8,
            time_hi as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            (time_low >> 24) as u8,
            (time_low >> 16) as u8,
            (time_low >> 8) as u8,
            time_low as u8,
            0x80 | (tail[0] & 0x3f),
            tail[1],
            tail[2],
            tail[3],
            tail[4],
            tail[5],
            tail[6],
            tail[7],
        ])
    }

    /// Creates a UUID from arbitrary bytes, overwriting the version nibble with `version` and the
    /// variant bits with `10` while keeping every other bit.
    pub(crate) const fn from_bytes_with_version(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    ///
    /// For convenience, this method reports [`Variant::VarNil`] or [`Variant::VarMax`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if self == &Self::NIL => Variant::VarNil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ if self == &Self::MAX => Variant::VarMax,
            _ => Variant::Var111,
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the variant
    /// field value of `0b10`.
    ///
    /// UUIDs from [`uuid_ordered()`](crate::uuid_ordered) report whatever timestamp bits occupy
    /// the version position.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_DNS;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert!(y.ends_with("4fd430c8"));
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        write_canonical(&mut buffer, &self.0);
        // SAFETY: ok because `write_canonical` only writes ASCII hex digits and hyphens
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

/// The reserved variants of UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Nil UUID.
    VarNil,
    /// The variant field value of `0b0`.
    Var0,
    /// The variant field value of `0b10`, used by every UUID this crate generates.
    Var10,
    /// The variant field value of `0b110`.
    Var110,
    /// The variant field value of `0b111`.
    Var111,
    /// Max UUID.
    VarMax,
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.encode().to_string()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use serde::Serializer;

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

}
