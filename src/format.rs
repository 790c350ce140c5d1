//! Canonical 8-4-4-4-12 string formatting.

use crate::Error;
use std::str;

/// Size of a binary UUID in bytes.
pub const SIZE: usize = 16;

/// Buffer size required by [`format_into()`]: 36 characters plus a NUL terminator.
pub const FORMATTED_SIZE: usize = 37;

/// Each `x` consumes one input byte and emits two lowercase hex digits; anything else is copied.
const TEMPLATE: &[u8; 20] = b"xxxx-xx-xx-xx-xxxxxx";

/// Writes the 36-character canonical form of `src` into `dst`.
pub(crate) fn write_canonical(dst: &mut [u8; 36], src: &[u8; SIZE]) {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let (mut d, mut s) = (0, 0);
    for &t in TEMPLATE {
        if t == b'x' {
            let e = src[s] as usize;
            dst[d] = DIGITS[e >> 4];
            dst[d + 1] = DIGITS[e & 15];
            d += 2;
            s += 1;
        } else {
            dst[d] = t;
            d += 1;
        }
    }
    debug_assert!(dst.is_ascii());
}

/// Formats the 16-byte UUID `src` into `dst` as a NUL-terminated canonical string and returns the
/// written text without the terminator.
///
/// `dst` must hold at least [`FORMATTED_SIZE`] bytes. On failure, `dst[0]` is set to NUL (if `dst`
/// is not empty) so that the buffer reads as an empty string.
///
/// # Errors
///
/// Returns [`Error::InvalidArgs`] if `dst` is too small or `src` is not exactly 16 bytes long. The
/// capacity is checked first.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{format_into, Uuid, FORMATTED_SIZE};
///
/// let mut buf = [0u8; FORMATTED_SIZE];
/// let text = format_into(&mut buf, Uuid::NAMESPACE_URL.as_bytes())?;
/// assert_eq!(text, "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
/// assert_eq!(buf[36], 0);
/// # Ok::<(), uuid_rfc4122::Error>(())
/// ```
pub fn format_into<'a>(dst: &'a mut [u8], src: &[u8]) -> Result<&'a str, Error> {
    if dst.len() < FORMATTED_SIZE {
        if let Some(first) = dst.first_mut() {
            *first = 0;
        }
        return Err(Error::InvalidArgs("destination buffer too small"));
    }

    let Ok(src) = <&[u8; SIZE]>::try_from(src) else {
        dst[0] = 0;
        return Err(Error::InvalidArgs("source UUID must be 16 bytes"));
    };

    let mut buffer = [0u8; 36];
    write_canonical(&mut buffer, src);
    dst[..36].copy_from_slice(&buffer);
    dst[36] = 0;

    debug_assert!(dst[..36].is_ascii());
    Ok(unsafe { str::from_utf8_unchecked(&dst[..36]) })
}
