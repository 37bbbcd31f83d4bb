//! Context providers fed an inline `value` object.

use super::ScanContext;
use crate::models::{Issue, IssueKind, Severity};
use crate::scan::line_at;
use once_cell::sync::Lazy;
use regex::Regex;

static PROVIDER_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(\w*(?:Context\.Provider|Provider))\s[^>]*value\s*=\s*\{\s*\{").unwrap()
});

/// `<XContext.Provider value={{ ... }}>`: every consumer re-renders on every
/// parent render.
pub fn detect_context_provider_value(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for caps in PROVIDER_VALUE_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(provider)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let provider = provider.as_str();
        issues.push(
            Issue::new(
                IssueKind::ContextInlineValue,
                Severity::Error,
                line_at(ctx.text, m.start()),
                ctx.file,
                format!(
                    "'{provider}' value is inline object, ALL consumers re-render on every parent render"
                ),
            )
            .with_provider(provider)
            .with_suggestion("Wrap with useMemo: const value = useMemo(() => ({ ... }), [deps])"),
        );
    }
    issues
}
