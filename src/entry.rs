//! Version router and entry point functions

use crate::{generator::StdSystemTime, named, v1, v4};
use crate::{DefaultRandSource, Error, RandSource, Uuid};

/// The generation algorithms the router can dispatch to.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Version {
    /// Time-based.
    V1,
    /// DCE security; always reports [`Error::NotImplemented`].
    V2,
    /// Name-based with MD5 hashing.
    V3,
    /// Random.
    V4,
    /// Name-based with SHA-1 hashing.
    V5,
    /// Unofficial. The UUIDv1 timestamp stored most significant field first, so that the byte
    /// order follows the creation time. Carries no version nibble.
    Ordered,
}

impl Version {
    /// Returns the version nibble written into the generated UUIDs, or `None` for
    /// [`Version::Ordered`].
    pub const fn nibble(self) -> Option<u8> {
        match self {
            Version::V1 => Some(1),
            Version::V2 => Some(2),
            Version::V3 => Some(3),
            Version::V4 => Some(4),
            Version::V5 => Some(5),
            Version::Ordered => None,
        }
    }
}

impl From<Version> for u8 {
    /// Returns the numeric version tag; [`Version::Ordered`] is tagged 100.
    fn from(src: Version) -> Self {
        src.nibble().unwrap_or(100)
    }
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            1 => Ok(Version::V1),
            2 => Ok(Version::V2),
            3 => Ok(Version::V3),
            4 => Ok(Version::V4),
            5 => Ok(Version::V5),
            100 => Ok(Version::Ordered),
            _ => Err(Error::InvalidArgs("unknown or unsupported UUID version")),
        }
    }
}

/// Runs `f` with the caller's random source, or with a default one created for this call only.
///
/// The default source is dropped on every exit path; a caller's source is only borrowed.
fn with_rand_source<F>(rng: Option<&mut dyn RandSource>, f: F) -> Result<Uuid, Error>
where
    F: FnOnce(&mut dyn RandSource) -> Result<Uuid, Error>,
{
    match rng {
        Some(rng) => f(rng),
        None => {
            let mut rng = DefaultRandSource::new()?;
            log::trace!("created default random source");
            let result = f(&mut rng);
            drop(rng);
            log::trace!("released default random source");
            result
        }
    }
}

/// Takes the namespace and name required by the name-based versions.
fn require_name<'a>(
    namespace: Option<&'a Uuid>,
    name: Option<&'a [u8]>,
) -> Result<(&'a Uuid, &'a [u8]), Error> {
    let namespace = namespace.ok_or(Error::InvalidArgs("namespace UUID is required"))?;
    let name = name.ok_or(Error::InvalidArgs("name is required"))?;
    Ok((namespace, name))
}

/// Generates a UUID of the given version.
///
/// Inputs a version does not use are ignored: `rng` serves [`Version::V1`], [`Version::V4`] and
/// [`Version::Ordered`], while `namespace` and `name` serve [`Version::V3`] and [`Version::V5`].
/// When a random source is needed and `rng` is `None`, a [`DefaultRandSource`] is created for the
/// duration of the call.
///
/// # Errors
///
/// - [`Error::NotImplemented`] for [`Version::V2`], and for [`Version::V3`] or [`Version::V5`]
///   when the `v3` or `v5` feature is disabled. This takes precedence over missing arguments.
/// - [`Error::InvalidArgs`] if a name-based version is missing its namespace or name.
/// - Any failure of the clock or the random source, unchanged.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{uuidn, Uuid, Version};
///
/// let e = uuidn(Version::V4, None, None, None)?;
/// assert_eq!(e.version(), Some(4));
///
/// # #[cfg(feature = "v5")]
/// # {
/// let e = uuidn(Version::V5, None, Some(&Uuid::NAMESPACE_DNS), Some(b"python.org"))?;
/// assert_eq!(e.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # }
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuidn(
    version: Version,
    rng: Option<&mut dyn RandSource>,
    namespace: Option<&Uuid>,
    name: Option<&[u8]>,
) -> Result<Uuid, Error> {
    match version {
        Version::V1 => with_rand_source(rng, |rng| v1::build_v1(&mut StdSystemTime, rng)),
        Version::V2 => Err(Error::NotImplemented("version 2 (DCE security) UUIDs")),
        Version::V3 if !named::is_available(3) => {
            Err(Error::NotImplemented("version 3 requires the `v3` feature"))
        }
        Version::V3 => require_name(namespace, name).and_then(|(ns, n)| named::build_v3(ns, n)),
        Version::V4 => with_rand_source(rng, v4::build_v4),
        Version::V5 if !named::is_available(5) => {
            Err(Error::NotImplemented("version 5 requires the `v5` feature"))
        }
        Version::V5 => require_name(namespace, name).and_then(|(ns, n)| named::build_v5(ns, n)),
        Version::Ordered => {
            with_rand_source(rng, |rng| v1::build_ordered(&mut StdSystemTime, rng))
        }
    }
}

/// Generates a UUID of the given version into `dst`.
///
/// `dst` is zeroed before anything else and stays zeroed on any failure, so that a partial or
/// stale value is never mistaken for a valid UUID. Otherwise it behaves like [`uuidn()`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgs`] if `dst` is not exactly 16 bytes long, or any error
/// [`uuidn()`] returns.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{uuidn_into, Version};
///
/// let mut buf = [0u8; 16];
/// uuidn_into(&mut buf, Version::V4, None, None, None)?;
/// assert_eq!(buf[6] >> 4, 4);
///
/// let mut short = [0xaau8; 15];
/// assert!(uuidn_into(&mut short, Version::V4, None, None, None).is_err());
/// assert_eq!(short, [0u8; 15]);
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuidn_into(
    dst: &mut [u8],
    version: Version,
    rng: Option<&mut dyn RandSource>,
    namespace: Option<&Uuid>,
    name: Option<&[u8]>,
) -> Result<(), Error> {
    dst.fill(0);
    let dst = <&mut [u8; 16]>::try_from(dst)
        .map_err(|_| Error::InvalidArgs("output buffer must be exactly 16 bytes"))?;
    *dst = uuidn(version, rng, namespace, name)?.into();
    Ok(())
}

/// Generates a UUIDv1 object.
///
/// The clock sequence and node fields are filled with random bytes from `rng`, or from a
/// [`DefaultRandSource`] created for this call if `rng` is `None`.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_rfc4122::uuid1(None)?;
/// println!("{}", uuid); // e.g., "7c8bd7e6-a6e4-11ed-b6ac-3d2f4a1c9e20"
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuid1(rng: Option<&mut dyn RandSource>) -> Result<Uuid, Error> {
    uuidn(Version::V1, rng, None, None)
}

/// Generates a UUIDv3 object from the MD5 hash of `namespace` and `name`.
///
/// An empty `name` is allowed.
///
/// # Errors
///
/// Returns [`Error::NotImplemented`] if the `v3` feature is disabled.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "v3")]
/// # {
/// use uuid_rfc4122::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_DNS, b"python.org")?;
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// # }
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuid3(namespace: &Uuid, name: &[u8]) -> Result<Uuid, Error> {
    uuidn(Version::V3, None, Some(namespace), Some(name))
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_rfc4122::uuid4(None)?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let mut rng = uuid_rfc4122::with_rand08::Adapter(rand::rngs::OsRng);
/// let uuid = uuid_rfc4122::uuid4(Some(&mut rng))?;
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuid4(rng: Option<&mut dyn RandSource>) -> Result<Uuid, Error> {
    uuidn(Version::V4, rng, None, None)
}

/// Generates a UUIDv5 object from the SHA-1 hash of `namespace` and `name`.
///
/// An empty `name` is allowed.
///
/// # Errors
///
/// Returns [`Error::NotImplemented`] if the `v5` feature is disabled.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "v5")]
/// # {
/// use uuid_rfc4122::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_DNS, b"python.org")?;
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # }
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuid5(namespace: &Uuid, name: &[u8]) -> Result<Uuid, Error> {
    uuidn(Version::V5, None, Some(namespace), Some(name))
}

/// Generates a time-ordered UUID object.
///
/// This is not a standard RFC 4122 version: no version nibble is written because it would break
/// the ordering. The variant bits are set as usual.
///
/// # Examples
///
/// ```rust
/// let a = uuid_rfc4122::uuid_ordered(None)?;
/// let b = uuid_rfc4122::uuid_ordered(None)?;
/// assert!(a.as_bytes()[..8] <= b.as_bytes()[..8]);
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn uuid_ordered(rng: Option<&mut dyn RandSource>) -> Result<Uuid, Error> {
    uuidn(Version::Ordered, rng, None, None)
}
