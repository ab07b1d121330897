//! # Path Template Compilation

use crate::compiler::{url_path, CompiledRoute, RouteFlags};

/// Capturing group for named segment values: url-unreserved characters plus
/// the `%` needed for percent-encoded octets (RFC 3986).
const SEGMENT_GROUP: &str = r"([A-Za-z0-9\-_~.%]+)";

/// Compile a path template into an anchored pattern.
///
/// The template is reduced to its path component, split on `/` (empty
/// fragments collapse, so duplicate slashes are harmless), and rebuilt
/// fragment by fragment. A fragment starting with `:` captures a named
/// param; a fragment ending with `?` is optional, preceded by `\/*` instead
/// of `\/+` so it also matches with the slash absent or trailing.
///
/// Literal fragment text is inserted verbatim, without escaping regex
/// metacharacters; callers pre-escape literals that contain them.
///
/// ## Arguments
/// * `template` - The route template, e.g. `/foo/:bar?`.
///
/// ## Returns
/// The compiled pattern, flags, and declared param names.
pub fn compile_template(template: &str) -> CompiledRoute {
    let path = url_path::template_path(template);

    let mut pattern = String::from("^");
    let mut param_names = Vec::new();

    for fragment in path.split('/').filter(|fragment| !fragment.is_empty()) {
        let named = fragment.starts_with(':');
        let optional = fragment.ends_with('?');

        pattern.push_str(if optional { r"\/*" } else { r"\/+" });

        let body = if optional {
            &fragment[..fragment.len() - 1]
        } else {
            fragment
        };

        if named {
            pattern.push_str(SEGMENT_GROUP);
            param_names.push(body[1..].to_string());
        } else if optional {
            // A bare `?` would only quantify the last literal character;
            // group the fragment so the whole of it is optional.
            pattern.push_str("(?:");
            pattern.push_str(body);
            pattern.push(')');
        } else {
            pattern.push_str(body);
        }

        if optional {
            pattern.push('?');
        }
    }

    if pattern == "^" {
        pattern.push_str(r"\/");
    }
    pattern.push('$');

    CompiledRoute {
        pattern,
        flags: RouteFlags::extended(),
        param_names,
    }
}
