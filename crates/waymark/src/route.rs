//! # Route

use core::fmt;
use std::collections::HashMap;

use crate::{
    compiler::{self, url_path, CompiledRoute, RouteFlags, RouteSource},
    decode,
    errors::{WaymarkError, WmResult},
    params::{Params, TransformError, TransformFn},
    regex::{RegexWrapper, RoutePattern},
};

/// A single compiled route.
///
/// A route is built from a path template, a raw-pattern literal, or a
/// pre-compiled regex value, and answers two queries: [`Route::test`] for a
/// boolean match, and [`Route::exec`] for param extraction. The engine
/// matcher is compiled once and reused for every query; it is rebuilt only
/// by [`Route::set_url`].
///
/// ```
/// use waymark::Route;
///
/// let route = Route::new("/foo/:bar?")?;
///
/// assert!(route.test("/foo/banana"));
/// assert!(route.test("/foo"));
///
/// let params = route.exec("/foo/banana")?.unwrap();
/// assert_eq!(params.value("bar"), Some("banana"));
/// # Ok::<(), waymark::WaymarkError>(())
/// ```
///
/// Querying takes `&self` and mutates nothing, so a route can be shared
/// across threads; transform registration and source reassignment take
/// `&mut self` and are thereby excluded from racing those queries.
pub struct Route {
    /// Original input, replaced wholesale by [`Route::set_url`].
    source: RouteSource,

    /// Compiled regex body.
    pattern: String,

    /// Flags in effect.
    flags: RouteFlags,

    /// Param names from named template segments, in declaration order.
    param_names: Vec<String>,

    /// Param transforms; the last registration for a name wins.
    transforms: HashMap<String, TransformFn>,

    /// Engine-compiled matcher; rebuilt whenever pattern or flags change.
    matcher: RegexWrapper,

    /// Optional externally-assigned version tag, rendered by `Display`.
    version: Option<String>,
}

impl Route {
    /// Build a route from a source.
    ///
    /// ## Arguments
    /// * `source` - A path template (`/foo/:bar?`), a raw-pattern literal
    ///   (`/^\/v(\d+)\/foo/i`), or a pre-compiled regex value.
    ///
    /// ## Returns
    /// The compiled route. Fails with [`WaymarkError::MissingUrl`] on an
    /// empty source, and with [`WaymarkError::Pattern`] when the engines
    /// reject the pattern.
    pub fn new(source: impl Into<RouteSource>) -> WmResult<Self> {
        let source = source.into();
        let (compiled, matcher) = Self::build(&source)?;

        Ok(Self {
            source,
            pattern: compiled.pattern,
            flags: compiled.flags,
            param_names: compiled.param_names,
            transforms: HashMap::new(),
            matcher,
            version: None,
        })
    }

    /// Compile a source and construct the engine matcher for it.
    fn build(source: &RouteSource) -> WmResult<(CompiledRoute, RegexWrapper)> {
        let compiled = compiler::compile(source)?;

        let matcher = match source {
            // Reuse the caller's already-compiled value; its flags are
            // inline in its pattern body.
            RouteSource::Regex(regex) => regex.clone(),
            _ => {
                let pattern = format!("{}{}", compiled.flags.inline_group(), compiled.pattern);
                RoutePattern::from(&pattern).compile()?
            }
        };

        Ok((compiled, matcher))
    }

    /// The current source's string form.
    pub fn url(&self) -> String {
        self.source.to_string()
    }

    /// Reassign the route's source and recompile.
    ///
    /// The pattern, flags, param names, and engine matcher are rebuilt from
    /// the new source. Registered transforms and the version tag persist;
    /// they are route identity, not pattern state. On failure the route is
    /// left unchanged.
    ///
    /// ## Arguments
    /// * `source` - The new source.
    pub fn set_url(
        &mut self,
        source: impl Into<RouteSource>,
    ) -> WmResult<&mut Self> {
        let source = source.into();
        let (compiled, matcher) = Self::build(&source)?;

        self.source = source;
        self.pattern = compiled.pattern;
        self.flags = compiled.flags;
        self.param_names = compiled.param_names;
        self.matcher = matcher;

        Ok(self)
    }

    /// The route's source.
    pub fn source(&self) -> &RouteSource {
        &self.source
    }

    /// The compiled regex body.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The flags in effect.
    pub fn flags(&self) -> RouteFlags {
        self.flags
    }

    /// Param names declared by the template, in declaration order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// The version tag, if one was assigned.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Assign a version tag; rendered by the `Display` form.
    ///
    /// ## Arguments
    /// * `version` - The version string.
    pub fn set_version(
        &mut self,
        version: impl Into<String>,
    ) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// Whether the uri's path component matches the route.
    ///
    /// Query and fragment are not part of matching and are stripped from
    /// the uri first. No extraction is performed.
    ///
    /// ## Arguments
    /// * `uri` - The request uri.
    pub fn test(
        &self,
        uri: &str,
    ) -> bool {
        self.matcher.is_match(url_path::request_path(uri))
    }

    /// Match the uri's path component and extract params.
    ///
    /// Returns `Ok(None)` when the path does not match; a matching path
    /// always yields a params mapping, possibly empty. Params come from one
    /// of three strategies, by source provenance:
    ///
    /// 1. declared template names, percent-decoded, with a null entry for
    ///    each unset optional segment;
    /// 2. numbered keys (`"0"`, `"1"`, ...) over a native regex source's
    ///    capture groups, undecoded;
    /// 3. the pattern's `(?<name>...)` capture groups, undecoded.
    ///
    /// Registered transforms then run over every present key.
    ///
    /// ## Arguments
    /// * `uri` - The request uri.
    ///
    /// ## Returns
    /// The extracted params, or `None` on no match.
    pub fn exec(
        &self,
        uri: &str,
    ) -> WmResult<Option<Params>> {
        let path = url_path::request_path(uri);

        let Some(caps) = self.matcher.captures(path)? else {
            return Ok(None);
        };

        let mut params = Params::default();

        if !self.param_names.is_empty() {
            for (i, name) in self.param_names.iter().enumerate() {
                let value = match caps.get(i + 1) {
                    Some(raw) => Some(decode::percent_decode(raw)?),
                    None => None,
                };
                params.insert(name.as_str(), value);
            }
        } else if matches!(self.source, RouteSource::Regex(_)) {
            for i in 1..caps.len() {
                params.insert((i - 1).to_string(), caps.get(i).map(str::to_string));
            }
        } else {
            for name in self.matcher.capture_names() {
                params.insert(name, caps.name(name).map(str::to_string));
            }
        }

        self.apply_transforms(&mut params, path)?;

        Ok(Some(params))
    }

    /// Register a transform for a named param.
    ///
    /// The transform is called during [`Route::exec`] as
    /// `transform(value, path, name)` and its result replaces the extracted
    /// value; an unset optional param arrives as `None`. Registering again
    /// under the same name replaces the previous transform.
    ///
    /// ```
    /// use waymark::Route;
    ///
    /// let mut route = Route::new("/user/:id")?;
    /// route.param("id", |value, _path, _name| {
    ///     Ok(value.map(|v| v.to_uppercase()))
    /// });
    ///
    /// let params = route.exec("/user/ab12")?.unwrap();
    /// assert_eq!(params.value("id"), Some("AB12"));
    /// # Ok::<(), waymark::WaymarkError>(())
    /// ```
    ///
    /// ## Arguments
    /// * `name` - The param name to transform.
    /// * `transform` - The transform function.
    pub fn param<F>(
        &mut self,
        name: impl Into<String>,
        transform: F,
    ) -> &mut Self
    where
        F: Fn(Option<&str>, &str, &str) -> Result<Option<String>, TransformError>
            + Send
            + Sync
            + 'static,
    {
        self.transforms.insert(name.into(), Box::new(transform));
        self
    }

    /// Run registered transforms over the extracted params.
    fn apply_transforms(
        &self,
        params: &mut Params,
        path: &str,
    ) -> WmResult<()> {
        if self.transforms.is_empty() {
            return Ok(());
        }

        for (name, value) in params.entries_mut() {
            if let Some(transform) = self.transforms.get(name.as_str()) {
                *value = transform(value.as_deref(), path, name.as_str()).map_err(|source| {
                    WaymarkError::Transform {
                        name: name.clone(),
                        source,
                    }
                })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Route {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Route")
            .field("source", &self.source)
            .field("pattern", &self.pattern)
            .field("flags", &self.flags)
            .field("param_names", &self.param_names)
            .field("transforms", &self.transforms.keys())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Route {
    /// The url, suffixed with `" (version=<v>)"` when a version is set.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} (version={version})", self.source),
            None => write!(f, "{}", self.source),
        }
    }
}
