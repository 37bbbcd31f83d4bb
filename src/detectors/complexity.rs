//! Component size, prop count, state count, and prop spreading.

use super::ScanContext;
use crate::models::{Component, Issue, IssueKind, Severity};
use crate::scan::line_at;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static DESTRUCTURED_PROPS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*([^}]+)\}").unwrap());

static USE_STATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\buseState\s*[<(]").unwrap());

static SPREAD_PROPS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Z]\w*[^>]*\{\s*\.\.\.(\w+)\s*\}").unwrap());

/// Spread names that conventionally carry "everything else".
const SPREAD_NAMES: [&str; 4] = ["props", "rest", "restProps", "otherProps"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Complexity thresholds. Counts strictly above `max_*` / `large_lines` are
/// warnings; strictly above `warn_*` are info hints.
pub struct ComplexityLimits {
    pub large_lines: usize,
    pub warn_lines: usize,
    pub max_props: usize,
    pub warn_props: usize,
    pub max_state: usize,
    pub warn_state: usize,
}

impl Default for ComplexityLimits {
    fn default() -> Self {
        Self {
            large_lines: 250,
            warn_lines: 150,
            max_props: 10,
            warn_props: 7,
            max_state: 5,
            warn_state: 3,
        }
    }
}

/// Size, prop count, and `useState` count for every extracted component.
pub fn detect_component_complexity(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for comp in ctx.components {
        check_size(ctx, comp, &mut issues);
        check_props(ctx, comp, &mut issues);
        check_state(ctx, comp, &mut issues);
    }
    issues
}

fn check_size(ctx: &ScanContext<'_>, comp: &Component, issues: &mut Vec<Issue>) {
    let lines = comp.line_count();
    let name = &comp.name;
    let (severity, message, suggestion) = if lines > ctx.limits.large_lines {
        (
            Severity::Warning,
            format!("Component '{name}' is {lines} lines, consider splitting"),
            "Extract sub-components, custom hooks, or utilities",
        )
    } else if lines > ctx.limits.warn_lines {
        (
            Severity::Info,
            format!("Component '{name}' is {lines} lines, approaching threshold"),
            "Consider extracting custom hooks or sub-components",
        )
    } else {
        return;
    };
    issues.push(
        Issue::new(IssueKind::LargeComponent, severity, comp.start_line, ctx.file, message)
            .with_component(name.as_str())
            .with_suggestion(suggestion),
    );
}

fn check_props(ctx: &ScanContext<'_>, comp: &Component, issues: &mut Vec<Issue>) {
    let Some(count) = count_destructured_props(&comp.params) else {
        return;
    };
    let name = &comp.name;
    let (severity, message, suggestion) = if count > ctx.limits.max_props {
        (
            Severity::Warning,
            format!("Component '{name}' has {count} props, API too complex"),
            "Group related props, use composition, or split component",
        )
    } else if count > ctx.limits.warn_props {
        (
            Severity::Info,
            format!("Component '{name}' has {count} props"),
            "Consider grouping related props",
        )
    } else {
        return;
    };
    issues.push(
        Issue::new(IssueKind::TooManyProps, severity, comp.start_line, ctx.file, message)
            .with_component(name.as_str())
            .with_suggestion(suggestion),
    );
}

fn check_state(ctx: &ScanContext<'_>, comp: &Component, issues: &mut Vec<Issue>) {
    let count = USE_STATE_REGEX.find_iter(&comp.body).count();
    let name = &comp.name;
    let (severity, message, suggestion) = if count > ctx.limits.max_state {
        (
            Severity::Warning,
            format!("Component '{name}' has {count} useState hooks, excessive state"),
            "Combine with useReducer or extract into custom hook",
        )
    } else if count > ctx.limits.warn_state {
        (
            Severity::Info,
            format!("Component '{name}' has {count} useState hooks"),
            "Consider combining related state",
        )
    } else {
        return;
    };
    issues.push(
        Issue::new(IssueKind::TooManyState, severity, comp.start_line, ctx.file, message)
            .with_component(name.as_str())
            .with_suggestion(suggestion),
    );
}

/// Count entries of the first `{ a, b, ... }` group in a parameter list,
/// ignoring rest entries. `None` when the parameters are not destructured.
fn count_destructured_props(params: &str) -> Option<usize> {
    let inner = DESTRUCTURED_PROPS_REGEX.captures(params)?.get(1)?.as_str();
    Some(
        inner
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty() && !p.starts_with("..."))
            .count(),
    )
}

/// `<Child {...props} />` with a catch-all spread name.
pub fn detect_spread_props(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for caps in SPREAD_PROPS_REGEX.captures_iter(ctx.text) {
        let (Some(m), Some(var)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let var = var.as_str();
        if !SPREAD_NAMES.contains(&var) {
            continue;
        }
        issues.push(
            Issue::new(
                IssueKind::PropSpreading,
                Severity::Info,
                line_at(ctx.text, m.start()),
                ctx.file,
                format!("Spreading {{...{var}}} forwards unknown props and may trigger child re-renders"),
            )
            .with_suggestion("Destructure only needed props explicitly"),
        );
    }
    issues
}
