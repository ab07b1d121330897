//! # `waymark` Single-Route Pattern Matching
//!
//! Waymark compiles one route description into a reusable matcher: given a
//! url path template (`/foo/:bar?`), a raw regex literal
//! (`/^\/v(\d+)\/foo/i`), or a pre-compiled regex value, it can test
//! whether a request path satisfies the route and extract named or
//! positional params from a matching path, optionally passing each value
//! through a registered transform.
//!
//! See:
//! * [`Route`] to build and query routes.
//! * [`compiler`] for the template grammar and pattern compilation.
//! * [`regex`] for the two-engine pattern wrapper.
//! * [`params`] for extracted params and transform registration.
//!
//! ```
//! use waymark::Route;
//!
//! let route = Route::new("/books/:title?")?;
//!
//! assert!(route.test("/books/dune"));
//! assert!(route.test("/books"));
//!
//! let params = route.exec("/books/dune")?.unwrap();
//! assert_eq!(params.value("title"), Some("dune"));
//! # Ok::<(), waymark::WaymarkError>(())
//! ```
//!
//! Multi-route registries, dispatch precedence, and HTTP handling live
//! outside this crate. A route only ever matches the path component of a
//! uri; query and fragment are stripped before matching.
//!
//! Literal template fragments are inserted into the pattern without
//! escaping regex metacharacters. Callers must pre-escape literal segments
//! that contain them, both for matching fidelity and because an unescaped
//! pathological literal carries the usual backtracking risks.
#![warn(missing_docs, unused)]

pub mod compiler;
pub mod decode;
pub mod errors;
pub mod params;
pub mod regex;
pub mod route;

#[doc(inline)]
pub use crate::compiler::{CompiledRoute, RouteFlags, RouteSource};
#[doc(inline)]
pub use crate::errors::{WaymarkError, WmResult};
#[doc(inline)]
pub use crate::params::{Params, TransformError, TransformFn};
#[doc(inline)]
pub use crate::regex::{RegexWrapper, RoutePattern};
#[doc(inline)]
pub use crate::route::Route;
