//! # Pattern Compiler
//!
//! Turns a route source into a `(pattern, flags, param_names)` triple,
//! dispatching on the source's shape:
//!
//! 1. a pre-compiled regex value - its body is reused verbatim;
//! 2. a raw-pattern literal (`/^body/flags`) - unpacked by the
//!    [`raw_pattern`] recognizer;
//! 3. a path template (`/foo/:bar?`) - the general case, compiled by
//!    [`template`].
//!
//! The compiled triple feeds the route's engine matcher; it is rebuilt only
//! when the route's source is reassigned.

pub mod raw_pattern;
pub mod template;
pub mod url_path;

use core::fmt;

use crate::{
    errors::{WaymarkError, WmResult},
    regex::RegexWrapper,
};

/// Route source provenance.
///
/// The provenance picks the param extraction strategy in
/// [`Route::exec`](crate::route::Route::exec): declared template names,
/// numbered groups of a native regex, or the pattern's own named groups.
#[derive(Debug, Clone)]
pub enum RouteSource {
    /// A path template, e.g. `/foo/:bar?`.
    Template(String),

    /// A raw-pattern literal, e.g. `/^\/v(\d+)\/foo/i`.
    Raw(String),

    /// A pre-compiled regex value.
    Regex(RegexWrapper),
}

impl From<&str> for RouteSource {
    fn from(source: &str) -> Self {
        if raw_pattern::parse_raw_pattern(source).is_some() {
            Self::Raw(source.to_string())
        } else {
            Self::Template(source.to_string())
        }
    }
}

impl From<String> for RouteSource {
    fn from(source: String) -> Self {
        Self::from(source.as_str())
    }
}

impl From<regex::Regex> for RouteSource {
    fn from(regex: regex::Regex) -> Self {
        Self::Regex(RegexWrapper::from(regex))
    }
}

impl From<fancy_regex::Regex> for RouteSource {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Regex(RegexWrapper::from(regex))
    }
}

impl From<RegexWrapper> for RouteSource {
    fn from(regex: RegexWrapper) -> Self {
        Self::Regex(regex)
    }
}

impl RouteSource {
    /// The source's string form.
    ///
    /// ## Returns
    /// The template or raw literal as given, or a native regex's pattern
    /// body.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Template(source) | Self::Raw(source) => source,
            Self::Regex(regex) => regex.as_str(),
        }
    }
}

impl fmt::Display for RouteSource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regex flags in effect for a route.
///
/// Compiled templates carry only `x`; raw-pattern literals carry whatever
/// their flag run names. `g` is recorded for fidelity with the source
/// dialect but never forwarded to the engines, which have no
/// global-iteration concept in single-shot anchored matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteFlags {
    /// `g`: global matching. Recorded, never forwarded.
    pub global: bool,

    /// `i`: case-insensitive matching.
    pub ignore_case: bool,

    /// `m`: multi-line anchors.
    pub multiline: bool,

    /// `s`: `.` matches newlines.
    pub dot_all: bool,

    /// `x`: extended, free-spacing pattern syntax.
    pub extended: bool,
}

impl RouteFlags {
    /// Flags for compiled templates: extended mode only.
    pub fn extended() -> Self {
        Self {
            extended: true,
            ..Self::default()
        }
    }

    /// Parse a flag-letter run, e.g. `"gim"`.
    ///
    /// ## Arguments
    /// * `letters` - Letters from the `gimsx` alphabet; anything else is
    ///   ignored (the raw-pattern recognizer only admits that alphabet).
    pub fn from_letters(letters: &str) -> Self {
        let mut flags = Self::default();
        for letter in letters.chars() {
            match letter {
                'g' => flags.global = true,
                'i' => flags.ignore_case = true,
                'm' => flags.multiline = true,
                's' => flags.dot_all = true,
                'x' => flags.extended = true,
                _ => {}
            }
        }
        flags
    }

    /// Canonical flag-letter rendering, e.g. `"gix"`.
    pub fn letters(&self) -> String {
        let mut letters = String::new();
        for (set, letter) in [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.extended, 'x'),
        ] {
            if set {
                letters.push(letter);
            }
        }
        letters
    }

    /// Inline flag group for the engines, e.g. `"(?ix)"`.
    ///
    /// ## Returns
    /// The leading group to prepend to the pattern; empty when no
    /// engine-visible flag is set. `g` never appears here.
    pub fn inline_group(&self) -> String {
        let mut letters = String::new();
        for (set, letter) in [
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.extended, 'x'),
        ] {
            if set {
                letters.push(letter);
            }
        }

        if letters.is_empty() {
            letters
        } else {
            format!("(?{letters})")
        }
    }

    /// Whether no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for RouteFlags {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

/// Output of the pattern compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRoute {
    /// The compiled regex body.
    pub pattern: String,

    /// The flags in effect.
    pub flags: RouteFlags,

    /// Param names declared by named template segments, in declaration
    /// order. Empty for raw-pattern and native-regex sources.
    pub param_names: Vec<String>,
}

/// Compile a route source into pattern, flags, and param names.
///
/// ## Arguments
/// * `source` - The route source.
///
/// ## Returns
/// The compiled triple. Fails with [`WaymarkError::MissingUrl`] when the
/// source string is empty.
pub fn compile(source: &RouteSource) -> WmResult<CompiledRoute> {
    let compiled = match source {
        RouteSource::Regex(regex) => CompiledRoute {
            pattern: regex.as_str().to_string(),
            flags: RouteFlags::default(),
            param_names: Vec::new(),
        },
        RouteSource::Template(source) | RouteSource::Raw(source) => {
            if source.is_empty() {
                return Err(WaymarkError::MissingUrl);
            }
            match raw_pattern::parse_raw_pattern(source) {
                Some(compiled) => compiled,
                None => template::compile_template(source),
            }
        }
    };

    log::debug!(
        "compiled route source {:?} to /{}/{}",
        source.as_str(),
        compiled.pattern,
        compiled.flags
    );

    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_classification() {
        assert!(matches!(
            RouteSource::from("/foo/:bar"),
            RouteSource::Template(_)
        ));
        assert!(matches!(
            RouteSource::from(r"/^\/v(\d+)/i"),
            RouteSource::Raw(_)
        ));
        assert!(matches!(
            RouteSource::from(regex::Regex::new(r"^\/foo$").unwrap()),
            RouteSource::Regex(_)
        ));
    }

    #[test]
    fn test_template_compilation() {
        let compiled = compile(&RouteSource::from("/foo/:bar")).unwrap();
        assert_eq!(compiled.pattern, r"^\/+foo\/+([A-Za-z0-9\-_~.%]+)$");
        assert_eq!(compiled.flags.letters(), "x");
        assert_eq!(compiled.param_names, vec!["bar"]);
    }

    #[test]
    fn test_raw_compilation() {
        let compiled = compile(&RouteSource::from(r"/^\/v(\d+)/i")).unwrap();
        assert_eq!(compiled.pattern, r"^\/v(\d+)");
        assert_eq!(compiled.flags.letters(), "i");
        assert!(compiled.param_names.is_empty());
    }

    #[test]
    fn test_native_regex_compilation() {
        let source = RouteSource::from(regex::Regex::new(r"(?i)^\/foo$").unwrap());
        let compiled = compile(&source).unwrap();
        // Native values keep their flags inline in the body.
        assert_eq!(compiled.pattern, r"(?i)^\/foo$");
        assert!(compiled.flags.is_empty());
        assert!(compiled.param_names.is_empty());
    }

    #[test]
    fn test_empty_source_is_missing_url() {
        assert!(matches!(
            compile(&RouteSource::from("")),
            Err(WaymarkError::MissingUrl)
        ));
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let first = compile(&RouteSource::from("/foo/:bar?")).unwrap();
        let second = compile(&RouteSource::from("/foo/:bar?")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_flag_letters_roundtrip() {
        let flags = RouteFlags::from_letters("gimsx");
        assert_eq!(flags.letters(), "gimsx");
        assert_eq!(flags.inline_group(), "(?imsx)");

        assert_eq!(RouteFlags::extended().inline_group(), "(?x)");
        assert_eq!(RouteFlags::default().inline_group(), "");
        assert!(RouteFlags::default().is_empty());
    }
}
