//! # Regex Wrapper
//! This module provides mechanisms to mix `regex` and `fancy_regex` types.

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug, thiserror::Error)]
pub enum PatternError {
    /// Error from `regex`.
    #[error(transparent)]
    Basic(#[from] regex::Error),

    /// Error from `fancy_regex`.
    #[error(transparent)]
    Fancy(#[from] fancy_regex::Error),
}

/// Label for route patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RoutePattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RoutePattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RoutePattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or a `PatternError`.
    pub fn compile(&self) -> Result<RegexWrapper, PatternError> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(PatternError::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(PatternError::from),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(PatternError::from)
                }),
        }
    }
}

/// Wrapper for compiled regexes.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Fancy(_) => true,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Wrapper for `is_match`.
    ///
    /// `fancy_regex` queries can fail at match time (backtrack limits);
    /// such failures report as no-match here.
    ///
    /// ## Arguments
    /// * `haystack` - The string to match against.
    ///
    /// ## Returns
    /// `true` if the pattern matches the haystack.
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> bool {
        match self {
            Self::Basic(regex) => regex.is_match(haystack),
            Self::Fancy(regex) => regex.is_match(haystack).unwrap_or(false),
        }
    }

    /// Wrapper for `captures`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to match against.
    ///
    /// ## Returns
    /// The captures of the first match, `None` when the pattern does not
    /// match, or a `PatternError` when the fancy engine fails at match time.
    pub fn captures<'h>(
        &self,
        haystack: &'h str,
    ) -> Result<Option<CapturesWrapper<'h>>, PatternError> {
        match self {
            Self::Basic(regex) => Ok(regex.captures(haystack).map(CapturesWrapper::from)),
            Self::Fancy(regex) => regex
                .captures(haystack)
                .map(|caps| caps.map(CapturesWrapper::from))
                .map_err(PatternError::from),
        }
    }

    /// Names of the pattern's named capture groups, in group order.
    ///
    /// ## Returns
    /// The names declared by `(?<name>...)` groups; empty when the pattern
    /// has none.
    pub fn capture_names(&self) -> Vec<&str> {
        match self {
            Self::Basic(regex) => regex.capture_names().flatten().collect(),
            Self::Fancy(regex) => regex.capture_names().flatten().collect(),
        }
    }
}

/// Wrapper for capture results.
pub enum CapturesWrapper<'h> {
    /// Wrapper for `regex::Captures`.
    Basic(regex::Captures<'h>),

    /// Wrapper for `fancy_regex::Captures`.
    Fancy(fancy_regex::Captures<'h>),
}

impl<'h> From<regex::Captures<'h>> for CapturesWrapper<'h> {
    fn from(captures: regex::Captures<'h>) -> Self {
        Self::Basic(captures)
    }
}

impl<'h> From<fancy_regex::Captures<'h>> for CapturesWrapper<'h> {
    fn from(captures: fancy_regex::Captures<'h>) -> Self {
        Self::Fancy(captures)
    }
}

impl<'h> CapturesWrapper<'h> {
    /// Total number of capture groups, including the implicit whole-match
    /// group 0.
    ///
    /// ## Returns
    /// The group count; always at least 1.
    pub fn len(&self) -> usize {
        match self {
            Self::Basic(captures) => captures.len(),
            Self::Fancy(captures) => captures.len(),
        }
    }

    /// Whether there are no groups; never true, group 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text of capture group `i`, when it participated in the match.
    ///
    /// ## Arguments
    /// * `i` - The group index; 0 is the whole match.
    ///
    /// ## Returns
    /// The matched text, or `None` for a group that did not participate.
    pub fn get(
        &self,
        i: usize,
    ) -> Option<&'h str> {
        match self {
            Self::Basic(captures) => captures.get(i).map(|m| m.as_str()),
            Self::Fancy(captures) => captures.get(i).map(|m| m.as_str()),
        }
    }

    /// Text of named group `name`, when it participated in the match.
    ///
    /// ## Arguments
    /// * `name` - The group name.
    ///
    /// ## Returns
    /// The matched text, or `None` for an unknown or non-participating group.
    pub fn name(
        &self,
        name: &str,
    ) -> Option<&'h str> {
        match self {
            Self::Basic(captures) => captures.name(name).map(|m| m.as_str()),
            Self::Fancy(captures) => captures.name(name).map(|m| m.as_str()),
        }
    }
}
