//! Time-based builders: UUIDv1 and the time-ordered variant

use crate::{Error, RandSource, TimeSource, Uuid};

/// Reads a timestamp and rejects one that does not fit the 60-bit time fields.
fn read_timestamp(time_source: &mut dyn TimeSource) -> Result<u64, Error> {
    let timestamp = time_source.uuid_timestamp()?;
    if timestamp >= 1 << 60 {
        return Err(Error::Clock("timestamp does not fit in 60 bits".into()));
    }
    Ok(timestamp)
}

/// Builds a UUIDv1 whose clock sequence and node fields are random.
pub(crate) fn build_v1(
    time_source: &mut dyn TimeSource,
    rng: &mut dyn RandSource,
) -> Result<Uuid, Error> {
    let timestamp = read_timestamp(time_source)?;
    let mut clock_seq_node = [0u8; 8];
    rng.fill_bytes(&mut clock_seq_node)?;
    Ok(Uuid::from_fields_v1(timestamp, clock_seq_node))
}

/// Builds a time-ordered UUID: the UUIDv1 timestamp stored most significant field first, without
/// a version nibble, followed by random bytes.
pub(crate) fn build_ordered(
    time_source: &mut dyn TimeSource,
    rng: &mut dyn RandSource,
) -> Result<Uuid, Error> {
    let timestamp = read_timestamp(time_source)?;
    let mut tail = [0u8; 8];
    rng.fill_bytes(&mut tail)?;
    Ok(Uuid::from_fields_ordered(timestamp, tail))
}
