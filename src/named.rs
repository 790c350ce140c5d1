//! Name-based builders: UUIDv3 (MD5) and UUIDv5 (SHA-1)
//!
//! Both versions hash the 16 bytes of a namespace UUID followed by the raw bytes of a name and
//! keep the first 16 bytes of the digest. The hash is any [`Digest`] implementation; the `v3` and
//! `v5` crate features bind the standard MD5 and SHA-1 implementations.

use crate::{Error, Uuid};
use digest::Digest;

/// Builds a name-based UUID with the digest `D`, stamping `version` into the version nibble.
///
/// This is the injection point for hash implementations other than the ones bundled with the
/// `v3` and `v5` features.
///
/// # Errors
///
/// Returns [`Error::Hash`] if `D` produces fewer than 16 bytes, or [`Error::InvalidArgs`] if
/// `version` does not fit in four bits.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "v5")]
/// # {
/// use uuid_rfc4122::{uuid_from_digest, Uuid};
///
/// let e = uuid_from_digest::<sha1::Sha1>(5, &Uuid::NAMESPACE_DNS, b"python.org")?;
/// assert_eq!(e.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # }
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuid_from_digest<D: Digest>(
    version: u8,
    namespace: &Uuid,
    name: &[u8],
) -> Result<Uuid, Error> {
    if version > 0x0f {
        return Err(Error::InvalidArgs("version does not fit in four bits"));
    }

    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let bytes = digest
        .get(..16)
        .and_then(|e| <[u8; 16]>::try_from(e).ok())
        .ok_or(Error::Hash("digest is shorter than 16 bytes"))?;
    Ok(Uuid::from_bytes_with_version(bytes, version))
}

/// Builds a UUIDv3 from the MD5 hash of `namespace` and `name`.
#[cfg(feature = "v3")]
pub(crate) fn build_v3(namespace: &Uuid, name: &[u8]) -> Result<Uuid, Error> {
    uuid_from_digest::<md5::Md5>(3, namespace, name)
}

#[cfg(not(feature = "v3"))]
pub(crate) fn build_v3(_: &Uuid, _: &[u8]) -> Result<Uuid, Error> {
    Err(Error::NotImplemented("version 3 requires the `v3` feature"))
}

/// Builds a UUIDv5 from the SHA-1 hash of `namespace` and `name`.
#[cfg(feature = "v5")]
pub(crate) fn build_v5(namespace: &Uuid, name: &[u8]) -> Result<Uuid, Error> {
    uuid_from_digest::<sha1::Sha1>(5, namespace, name)
}

#[cfg(not(feature = "v5"))]
pub(crate) fn build_v5(_: &Uuid, _: &[u8]) -> Result<Uuid, Error> {
    Err(Error::NotImplemented("version 5 requires the `v5` feature"))
}

/// Reports whether the hash behind `version` is compiled in.
pub(crate) const fn is_available(version: u8) -> bool {
    match version {
        3 => cfg!(feature = "v3"),
        5 => cfg!(feature = "v5"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::uuid_from_digest;
    use crate::{Error, Uuid};

    /// Truncated digest that only yields eight bytes.
    #[derive(Clone, Default)]
    struct Short(Vec<u8>);

    impl digest::HashMarker for Short {}

    impl digest::OutputSizeUser for Short {
        type OutputSize = digest::consts::U8;
    }

    impl digest::Update for Short {
        fn update(&mut self, data: &[u8]) {
            self.0.extend_from_slice(data);
        }
    }

    impl digest::FixedOutput for Short {
        fn finalize_into(self, out: &mut digest::Output<Self>) {
            for (i, e) in self.0.iter().enumerate() {
                out[i % 8] ^= e;
            }
        }
    }

    /// Rejects digests shorter than 16 bytes
    #[test]
    fn rejects_digests_shorter_than_16_bytes() {
        let r = uuid_from_digest::<Short>(3, &Uuid::NAMESPACE_DNS, b"python.org");
        assert!(matches!(r, Err(Error::Hash(_))));
    }

    /// Rejects version numbers wider than four bits
    #[test]
    fn rejects_version_numbers_wider_than_four_bits() {
        let r = uuid_from_digest::<Short>(16, &Uuid::NAMESPACE_DNS, b"python.org");
        assert!(matches!(r, Err(Error::InvalidArgs(_))));
    }

    #[cfg(feature = "v3")]
    mod v3 {
        use super::super::build_v3;
        use crate::{Uuid, Variant};

        /// Encodes prepared cases correctly
        #[test]
        fn encodes_prepared_cases_correctly() {
            let cases = [
                (
                    Uuid::NAMESPACE_DNS,
                    &b"python.org"[..],
                    "6fa459ea-ee8a-3ca4-894e-db77e160355e",
                ),
                (
                    Uuid::NAMESPACE_DNS,
                    &b"www.widgets.com"[..],
                    "3d813cbb-47fb-32ba-91df-831e1593ac29",
                ),
            ];

            for (namespace, name, text) in cases {
                assert_eq!(build_v3(&namespace, name).unwrap().to_string(), text);
            }
        }

        /// Matches an independent implementation
        #[test]
        fn matches_an_independent_implementation() {
            let names: [&[u8]; 5] = [
                b"Hello, World!",
                b"",
                b"python.org",
                "\u{1f980}".as_bytes(),
                &[0xff; 300],
            ];
            let namespaces = [
                Uuid::NAMESPACE_DNS,
                Uuid::NAMESPACE_URL,
                Uuid::NAMESPACE_OID,
                Uuid::NAMESPACE_X500,
                Uuid::NIL,
            ];
            for namespace in namespaces {
                let reference_ns = uuid::Uuid::from_bytes(*namespace.as_bytes());
                for name in names {
                    let e = build_v3(&namespace, name).unwrap();
                    let reference = uuid::Uuid::new_v3(&reference_ns, name);
                    assert_eq!(e.as_bytes(), reference.as_bytes());
                    assert_eq!(e.variant(), Variant::Var10);
                    assert_eq!(e.version(), Some(3));
                }
            }
        }

        /// Returns identical output for identical input
        #[test]
        fn returns_identical_output_for_identical_input() {
            let first = build_v3(&Uuid::NAMESPACE_URL, b"Hello, World!").unwrap();
            for _ in 0..1_000 {
                assert_eq!(build_v3(&Uuid::NAMESPACE_URL, b"Hello, World!").unwrap(), first);
            }
            assert_ne!(build_v3(&Uuid::NAMESPACE_DNS, b"Hello, World!").unwrap(), first);
            assert_ne!(build_v3(&Uuid::NAMESPACE_URL, b"Hello, World").unwrap(), first);
        }
    }

    #[cfg(feature = "v5")]
    mod v5 {
        use super::super::build_v5;
        use crate::{Uuid, Variant};

        /// Encodes a known name correctly
        #[test]
        fn encodes_a_known_name_correctly() {
            let e = build_v5(&Uuid::NAMESPACE_DNS, b"python.org").unwrap();
            assert_eq!(e.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
        }

        /// Matches an independent implementation
        #[test]
        fn matches_an_independent_implementation() {
            let names: [&[u8]; 5] = [
                b"Hello, World!",
                b"",
                b"python.org",
                "\u{1f980}".as_bytes(),
                &[0xff; 300],
            ];
            let namespaces = [
                Uuid::NAMESPACE_DNS,
                Uuid::NAMESPACE_URL,
                Uuid::NAMESPACE_OID,
                Uuid::NAMESPACE_X500,
                Uuid::NIL,
            ];
            for namespace in namespaces {
                let reference_ns = uuid::Uuid::from_bytes(*namespace.as_bytes());
                for name in names {
                    let e = build_v5(&namespace, name).unwrap();
                    let reference = uuid::Uuid::new_v5(&reference_ns, name);
                    assert_eq!(e.as_bytes(), reference.as_bytes());
                    assert_eq!(e.variant(), Variant::Var10);
                    assert_eq!(e.version(), Some(5));
                }
            }
        }

        /// Returns identical output for identical input
        #[test]
        fn returns_identical_output_for_identical_input() {
            let first = build_v5(&Uuid::NAMESPACE_URL, b"Hello, World!").unwrap();
            for _ in 0..1_000 {
                assert_eq!(build_v5(&Uuid::NAMESPACE_URL, b"Hello, World!").unwrap(), first);
            }
            assert_ne!(build_v5(&Uuid::NAMESPACE_DNS, b"Hello, World!").unwrap(), first);
        }
    }

    /// Sets version and variant for arbitrary digests
    #[cfg(feature = "v5")]
    #[test]
    fn sets_version_and_variant_for_arbitrary_digests() {
        use crate::Variant;
        for version in [0u8, 3, 5, 8, 15] {
            let e = uuid_from_digest::<sha1::Sha1>(version, &Uuid::NAMESPACE_OID, b"1.3.6.1")
                .unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(version));
        }
    }
}
