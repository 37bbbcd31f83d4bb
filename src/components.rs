//! Component boundary extraction.
//!
//! Two independent pattern scans locate declarations:
//! - `function Name(params)` with optional `export` / `export default`.
//! - `const|let Name[: Type] = (params) => {` or `= param => {`.
//!
//! Each candidate's body is carved out with [`match_brace`]. Output keeps
//! scan order (all function declarations first, then arrow bindings), so a
//! declaration matched by both scans appears twice.

use crate::models::Component;
use crate::scan::{line_at, match_brace};
use once_cell::sync::Lazy;
use regex::{Match, Regex};
use tracing::trace;

static FUNCTION_DECL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:export\s+(?:default\s+)?)?function\s+([A-Z]\w*)\s*\(([^)]*)\)")
        .unwrap()
});

static ARROW_DECL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?m)^[ \t]*(?:export\s+(?:default\s+)?)?(?:const|let)\s+([A-Z]\w*)",
        r"(?:\s*:\s*[^=]+?)?\s*=\s*(?:\([^)]*\)|[a-z_]\w*)\s*(?::[^=]*?)?\s*=>\s*\{",
    ))
    .unwrap()
});

static ARROW_PARAMS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"=\s*\(([^)]*)\)").unwrap());

/// Find component declarations in `text`.
pub fn extract_components(text: &str) -> Vec<Component> {
    let mut comps = Vec::new();

    for caps in FUNCTION_DECL_REGEX.captures_iter(text) {
        let (Some(m), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let params = caps.get(2).map_or("", |p| p.as_str());
        push_component(&mut comps, text, m, name.as_str(), params);
    }

    for caps in ARROW_DECL_REGEX.captures_iter(text) {
        let (Some(m), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let params = ARROW_PARAMS_REGEX
            .captures(m.as_str())
            .and_then(|c| c.get(1))
            .map_or("", |p| p.as_str());
        push_component(&mut comps, text, m, name.as_str(), params);
    }

    comps
}

/// Resolve the body span for one candidate and record it.
///
/// The body search starts at the last byte of the match, which is the `{`
/// itself for arrow bindings and the closing `)` for function declarations.
fn push_component(comps: &mut Vec<Component>, text: &str, m: Match<'_>, name: &str, params: &str) {
    let from = m.end().saturating_sub(1);
    let brace = text[from..]
        .find('{')
        .map(|p| from + p)
        .or_else(|| text[m.start()..].find('{').map(|p| m.start() + p));
    let Some(brace) = brace else {
        trace!(component = name, "no body brace; skipped");
        return;
    };
    let Some(end) = match_brace(text, brace) else {
        trace!(component = name, "unbalanced body; skipped");
        return;
    };
    comps.push(Component {
        name: name.to_string(),
        start_line: line_at(text, m.start()),
        end_line: line_at(text, end),
        params: params.trim().to_string(),
        body: text[brace..=end].to_string(),
    });
}
