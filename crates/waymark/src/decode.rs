//! # Strict Percent Decoding

use crate::errors::{WaymarkError, WmResult};

/// Strictly percent-decode a captured path segment.
///
/// Every `%` must be followed by two hex digits, and the decoded octets must
/// form valid UTF-8. Anything else is a [`WaymarkError::Decode`], never a
/// best-effort passthrough; `exec` failures stay observable instead of
/// returning corrupted param values.
///
/// ## Arguments
/// * `segment` - The captured segment text.
///
/// ## Returns
/// The decoded segment.
pub fn percent_decode(segment: &str) -> WmResult<String> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                }
                _ => {
                    return Err(WaymarkError::Decode {
                        segment: segment.to_string(),
                    });
                }
            }
        } else {
            i += 1;
        }
    }

    match urlencoding::decode(segment) {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(_) => Err(WaymarkError::Decode {
            segment: segment.to_string(),
        }),
    }
}
