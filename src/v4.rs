//! UUIDv4-related functionality

use crate::{Error, RandSource, Uuid};

/// Builds a UUIDv4 from 16 random bytes, keeping every bit except the version and variant.
pub(crate) fn build_v4(rng: &mut dyn RandSource) -> Result<Uuid, Error> {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes)?;
    Ok(Uuid::from_bytes_with_version(bytes, 4))
}
