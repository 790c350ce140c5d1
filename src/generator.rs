//! Random and time sources, and a generator that reuses them across calls.

use crate::{v1, v4, Error, Uuid};
use rand::{rngs::OsRng, RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

pub mod with_rand08;

/// Offset between the Unix epoch and the UUID epoch (1582-10-15) in 100-nanosecond intervals.
pub const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// A trait that defines the random number generator interface consumed by the constructors.
///
/// Implementations are borrowed for the duration of a call and are never dropped by this crate.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the system clock interface consumed by the time-based constructors.
pub trait TimeSource {
    /// Returns the current time as a count of 100-nanosecond intervals since 1582-10-15 UTC.
    fn uuid_timestamp(&mut self) -> Result<u64, Error>;
}

/// The default [`TimeSource`] implementation that uses [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn uuid_timestamp(&mut self) -> Result<u64, Error> {
        use std::time;
        let since = time::SystemTime::now().duration_since(time::UNIX_EPOCH)?;
        Ok(since.as_secs() * 10_000_000 + u64::from(since.subsec_nanos()) / 100 + GREGORIAN_OFFSET)
    }
}

/// The cryptographically secure [`RandSource`] used when the caller supplies none.
///
/// Each instance is a [`ChaCha12Rng`] seeded from the operating system's entropy source at
/// creation.
#[derive(Debug)]
pub struct DefaultRandSource(ChaCha12Rng);

impl DefaultRandSource {
    /// Creates a random source seeded from [`OsRng`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rand`] if the operating system cannot provide entropy.
    pub fn new() -> Result<Self, Error> {
        ChaCha12Rng::from_rng(OsRng).map(Self).map_err(Error::Rand)
    }
}

impl RandSource for DefaultRandSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(Error::Rand)
    }
}

/// Represents a UUID generator that owns a random source and a time source, so that many UUIDs
/// can be generated without creating a default random source for each of them.
///
/// The entry point functions such as [`uuid4()`](crate::uuid4) build the same UUIDs; this type
/// only changes where the random bytes and timestamps come from.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{DefaultRandSource, Generator};
///
/// let mut g = Generator::new(DefaultRandSource::new()?);
/// for _ in 0..4 {
///     println!("{}", g.generate_v4()?);
/// }
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
///
/// A custom [`TimeSource`] fixes the clock, which is useful to reproduce time-based layouts:
///
/// ```rust
/// use uuid_rfc4122::{Error, Generator, TimeSource};
///
/// struct Frozen(u64);
///
/// impl TimeSource for Frozen {
///     fn uuid_timestamp(&mut self) -> Result<u64, Error> {
///         Ok(self.0)
///     }
/// }
///
/// let mut g = Generator::with_rand_and_time_sources(
///     uuid_rfc4122::with_rand08::Adapter(rand::thread_rng()),
///     Frozen(0x01ed_6b8c_0e5f_1a2b),
/// );
/// assert!(g.generate_v1()?.to_string().starts_with("0e5f1a2b-6b8c-11ed-"));
/// assert!(g.generate_ordered()?.to_string().starts_with("01ed6b8c-0e5f-1a2b-"));
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    /// The random number generator used by the generator.
    rng: R,

    /// The system clock used by the generator.
    time_source: T,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator object with a specified random number generator and the system clock.
    pub const fn new(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rng: R, time_source: T) -> Self {
        Self { rng, time_source }
    }

    /// Generates a new UUIDv1 object.
    pub fn generate_v1(&mut self) -> Result<Uuid, Error> {
        v1::build_v1(&mut self.time_source, &mut self.rng)
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Result<Uuid, Error> {
        v4::build_v4(&mut self.rng)
    }

    /// Generates a new time-ordered UUID object.
    pub fn generate_ordered(&mut self) -> Result<Uuid, Error> {
        v1::build_ordered(&mut self.time_source, &mut self.rng)
    }
}
