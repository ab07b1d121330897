//! # Regex Engine Wrapper
//!
//! Raw route patterns may use extended regex machinery (named groups,
//! free-spacing mode, lookaround, backreferences) provided by the
//! [`fancy_regex`] crate; but naturally, this has performance costs. We'd
//! prefer to avoid using the [`fancy_regex`] crate when possible, falling
//! back on the standard [`regex`] crate when patterns permit this.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RoutePattern`]
//!   * [`RoutePattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RoutePattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RoutePattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! Route matching is single-shot anchored matching, so [`RegexWrapper`]
//! supports boolean `is_match()` and group-extracting `captures()` queries,
//! plus `capture_names()` metadata for patterns with `(?<name>...)` groups.

pub mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::{CapturesWrapper, PatternError, RegexWrapper, RoutePattern};
