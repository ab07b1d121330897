//! # Raw Pattern Literals

use std::sync::LazyLock;

use crate::compiler::{CompiledRoute, RouteFlags};

/// Recognizer for `/^body/flags` raw-pattern literals.
static RAW_PATTERN_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^/(\^.*)/([gimsx]*)$").expect("raw pattern recognizer"));

/// Unpack a raw-pattern literal, if the string is one.
///
/// A raw pattern is a `/`-delimited, `^`-led regex body with an optional
/// flag-letter run, e.g. `/^\/(?<name>\d+)\/foo/im`. The body is used as
/// the route pattern without further transformation; named captures inside
/// it are recovered at exec time from engine metadata, not param names.
///
/// ## Arguments
/// * `source` - The candidate literal.
///
/// ## Returns
/// The unpacked pattern and flags, or `None` when the string is not a
/// raw-pattern literal and should be treated as a path template.
pub fn parse_raw_pattern(source: &str) -> Option<CompiledRoute> {
    let caps = RAW_PATTERN_RE.captures(source)?;
    Some(CompiledRoute {
        pattern: caps[1].to_string(),
        flags: RouteFlags::from_letters(&caps[2]),
        param_names: Vec::new(),
    })
}
