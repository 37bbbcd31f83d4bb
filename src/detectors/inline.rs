//! Inline object/array/function/instance creation inside prop assignments.

use super::{is_skipped_prop, ScanContext};
use crate::models::{Issue, IssueKind, Severity};
use crate::scan::{line_at, window_before};
use once_cell::sync::Lazy;
use regex::Regex;

/// Bytes inspected before an arrow-function match to rule out plain
/// variable assignments.
const ASSIGNMENT_LOOKBACK: usize = 30;

static INLINE_OBJECT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*=\s*\{\s*\{").unwrap());

static INLINE_ARRAY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*=\s*\{\s*\[").unwrap());

static INLINE_ARROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*=\s*\{\s*(?:\([^)]*\)|[a-z_]\w*)\s*=>").unwrap()
});

static INLINE_FN_EXPR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*=\s*\{\s*function\s*\(").unwrap());

static INLINE_NEW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w*)\s*=\s*\{\s*new\s+(\w+)\s*\(").unwrap());

/// `prop={{ ... }}`: a new object reference on every render.
pub fn detect_inline_objects(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for caps in INLINE_OBJECT_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(prop)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let prop = prop.as_str();
        if is_skipped_prop(prop) {
            continue;
        }
        // style objects are common and cheap to diff
        let severity = if prop == "style" {
            Severity::Warning
        } else {
            Severity::Error
        };
        issues.push(
            Issue::new(
                IssueKind::InlineObject,
                severity,
                line_at(ctx.text, m.start()),
                ctx.file,
                format!("Inline object in prop '{prop}' creates new reference every render"),
            )
            .with_prop(prop)
            .with_suggestion(format!(
                "Extract to a variable outside render, or useMemo if dynamic: \
                 const {prop}Value = useMemo(() => ({{ ... }}), [deps])"
            )),
        );
    }
    issues
}

/// `prop={[ ... ]}`: a new array reference on every render.
pub fn detect_inline_arrays(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for caps in INLINE_ARRAY_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(prop)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let prop = prop.as_str();
        if is_skipped_prop(prop) {
            continue;
        }
        issues.push(
            Issue::new(
                IssueKind::InlineArray,
                Severity::Error,
                line_at(ctx.text, m.start()),
                ctx.file,
                format!("Inline array in prop '{prop}' creates new reference every render"),
            )
            .with_prop(prop)
            .with_suggestion(format!(
                "Extract to a constant or useMemo: const {prop}Value = useMemo(() => [...], [deps])"
            )),
        );
    }
    issues
}

/// `prop={() => ...}` and `prop={function() ...}`.
pub fn detect_inline_functions(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for caps in INLINE_ARROW_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(prop)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let prop = prop.as_str();
        if is_skipped_prop(prop) || prop == "className" || prop == "children" {
            continue;
        }
        if is_variable_assignment(window_before(ctx.text, m.start(), ASSIGNMENT_LOOKBACK)) {
            continue;
        }
        issues.push(
            Issue::new(
                IssueKind::InlineFunction,
                Severity::Warning,
                line_at(ctx.text, m.start()),
                ctx.file,
                format!("Inline function in prop '{prop}' creates new reference every render"),
            )
            .with_prop(prop)
            .with_suggestion(
                "Extract to useCallback: const handler = useCallback((...) => { ... }, [deps])",
            ),
        );
    }
    for caps in INLINE_FN_EXPR_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(prop)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let prop = prop.as_str();
        if is_skipped_prop(prop) {
            continue;
        }
        issues.push(
            Issue::new(
                IssueKind::InlineFunction,
                Severity::Warning,
                line_at(ctx.text, m.start()),
                ctx.file,
                format!("Inline function expression in prop '{prop}' creates new reference every render"),
            )
            .with_prop(prop)
            .with_suggestion("Extract to useCallback or a const handler"),
        );
    }
    issues
}

/// `prop={new Thing(...)}`: a new instance on every render.
pub fn detect_new_in_jsx(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for caps in INLINE_NEW_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(class)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let prop = caps.get(1).map_or("", |p| p.as_str());
        if is_skipped_prop(prop) {
            continue;
        }
        let class = class.as_str();
        let mut issue = Issue::new(
            IssueKind::InlineNew,
            Severity::Warning,
            line_at(ctx.text, m.start()),
            ctx.file,
            format!("new {class}() in JSX prop creates a new instance every render"),
        )
        .with_suggestion(format!(
            "Move to useMemo: const inst = useMemo(() => new {class}(...), [])"
        ));
        if !prop.is_empty() {
            issue = issue.with_prop(prop);
        }
        issues.push(issue);
    }
    issues
}

/// Does the text before a match end like `const x` / `let` / `var` / `=`?
fn is_variable_assignment(before: &str) -> bool {
    let before = before.trim();
    ["const", "let", "var", "="]
        .iter()
        .any(|kw| before.ends_with(kw))
}
