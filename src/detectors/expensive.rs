//! Expensive work done directly in the render body.
//!
//! "Already memoized" is approximated by looking for `useMemo` or
//! `useCallback` in the [`MEMO_LOOKBACK`] bytes before a match. This is not
//! scope analysis: a memo hook just above an unrelated call also suppresses it.

use super::ScanContext;
use crate::models::{Issue, IssueKind, Severity};
use crate::scan::{line_at, window_before};
use once_cell::sync::Lazy;
use regex::Regex;

/// Bytes before a match searched for a memoization hook.
pub const MEMO_LOOKBACK: usize = 300;

const MEMO_MARKERS: [&str; 2] = ["useMemo", "useCallback"];

struct ExpensivePattern {
    regex: Regex,
    /// `{op}` is replaced with the first capture group, if any
    message: &'static str,
    suggestion: &'static str,
}

static EXPENSIVE_PATTERNS: Lazy<Vec<ExpensivePattern>> = Lazy::new(|| {
    vec![
        ExpensivePattern {
            regex: Regex::new(r"\bJSON\.(parse|stringify)\s*\(").unwrap(),
            message: "JSON.{op}() in render runs on every render",
            suggestion: "Wrap with useMemo: useMemo(() => JSON.{op}(...), [deps])",
        },
        ExpensivePattern {
            regex: Regex::new(r"\.sort\s*\(").unwrap(),
            message: ".sort() in render mutates the array and runs every render",
            suggestion: "Memoize: useMemo(() => [...items].sort(...), [items])",
        },
        ExpensivePattern {
            regex: Regex::new(r"\bnew\s+RegExp\s*\(").unwrap(),
            message: "new RegExp() in render is recreated every render",
            suggestion: "Move to module scope or useMemo",
        },
        ExpensivePattern {
            regex: Regex::new(r"\.filter\s*\([^)]*\)\s*\.map\s*\(").unwrap(),
            message: ".filter().map() chain iterates the array twice every render",
            suggestion: "Memoize filtered result: useMemo(() => items.filter(...), [items])",
        },
    ]
});

/// JSON parse/stringify, `.sort()`, `new RegExp()` and `.filter().map()`
/// outside a memo hook.
pub fn detect_expensive_render_ops(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for pat in EXPENSIVE_PATTERNS.iter() {
        for caps in pat.regex.captures_iter(ctx.text) {
            let Some(m) = caps.get(0) else {
                continue;
            };
            let preceding = window_before(ctx.text, m.start(), MEMO_LOOKBACK);
            if MEMO_MARKERS.iter().any(|mk| preceding.contains(mk)) {
                continue;
            }
            let op = caps.get(1).map_or("", |c| c.as_str());
            issues.push(
                Issue::new(
                    IssueKind::ExpensiveRenderOp,
                    Severity::Warning,
                    line_at(ctx.text, m.start()),
                    ctx.file,
                    pat.message.replace("{op}", op),
                )
                .with_suggestion(pat.suggestion.replace("{op}", op)),
            );
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run;
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_each_pattern_is_reported() {
        let src = indoc! {r#"
            const cfg = JSON.parse(raw);
            const list = items.sort((a, b) => a - b);
            const re = new RegExp(query);
            const names = users.filter(u => u.active).map(u => u.name);
        "#};
        let issues = run(detect_expensive_render_ops, src);
        let lines: Vec<_> = issues.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
        assert!(issues[0].message.starts_with("JSON.parse()"));
        assert!(issues[0].suggestion.as_deref().unwrap().contains("JSON.parse(...)"));
    }

    #[test]
    fn test_memo_hook_in_lookback_suppresses() {
        let src = "const sorted = useMemo(() => [...items].sort(byName), [items]);";
        assert!(run(detect_expensive_render_ops, src).is_empty());
    }

    #[test]
    fn test_memo_hook_outside_lookback_does_not_suppress() {
        let src = format!(
            "const a = useMemo(() => 1, []);\n{}\nconst b = JSON.stringify(obj);",
            "x".repeat(MEMO_LOOKBACK)
        );
        let issues = run(detect_expensive_render_ops, &src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 3);
    }
}
