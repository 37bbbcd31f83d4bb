//! `useEffect` misuse: async callbacks and state updates that loop or cascade.
//!
//! The dependency-array check is a text heuristic, not argument parsing:
//! after the callback's closing brace we look at the next
//! [`DEPS_LOOKAHEAD`] bytes, trimmed. If they start with `)` or `;` the call
//! has no dependency array. Anything else (`, [deps]`, `, )`, a newline
//! followed by an array) counts as "has deps". Multi-line formatting or
//! comments between the brace and the array are therefore misread only in
//! the direction of fewer reports.

use super::ScanContext;
use crate::models::{Issue, IssueKind, Severity};
use crate::scan::{line_at, match_brace, window_after};
use once_cell::sync::Lazy;
use regex::Regex;

/// Bytes after the callback's closing brace inspected for a dependency array.
pub const DEPS_LOOKAHEAD: usize = 19;

/// Setter calls at or above this count in one effect are reported as cascading.
const MULTI_SETSTATE_MIN: usize = 3;

static EFFECT_ASYNC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"useEffect\s*\(\s*async\s").unwrap());

static EFFECT_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"useEffect\s*\(\s*(?:\(\)\s*=>|function\s*\(\))\s*\{").unwrap()
});

static SETTER_CALL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bset[A-Z]\w*\s*\(").unwrap());

/// Async effect callbacks plus setState-without-deps and multi-setState.
pub fn detect_useeffect_issues(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    // The callback returns a Promise instead of a cleanup function.
    for m in EFFECT_ASYNC_REGEX.find_iter(ctx.text) {
        issues.push(
            Issue::new(
                IssueKind::UseeffectAsync,
                Severity::Error,
                line_at(ctx.text, m.start()),
                ctx.file,
                "useEffect callback is async, returns Promise instead of cleanup function",
            )
            .with_suggestion(
                "Define async fn inside: useEffect(() => { const fn = async () => { ... }; fn(); }, [deps])",
            ),
        );
    }

    for m in EFFECT_BLOCK_REGEX.find_iter(ctx.text) {
        let brace = m.end() - 1;
        let Some(end) = match_brace(ctx.text, brace) else {
            tracing::trace!(file = ctx.file, offset = brace, "unbalanced effect body; skipped");
            continue;
        };
        let body = &ctx.text[brace..=end];
        let set_calls = SETTER_CALL_REGEX.find_iter(body).count();
        if set_calls == 0 {
            continue;
        }
        let line = line_at(ctx.text, m.start());
        if has_no_deps(ctx.text, end) {
            issues.push(
                Issue::new(
                    IssueKind::UseeffectSetstateNoDeps,
                    Severity::Error,
                    line,
                    ctx.file,
                    "useEffect with setState and NO dependency array causes infinite re-render loop",
                )
                .with_suggestion("Add dependency array: useEffect(() => { ... }, [deps])"),
            );
        } else if set_calls >= MULTI_SETSTATE_MIN {
            issues.push(
                Issue::new(
                    IssueKind::UseeffectMultiSetstate,
                    Severity::Warning,
                    line,
                    ctx.file,
                    format!("useEffect with {set_calls} setState calls causes cascading re-renders"),
                )
                .with_suggestion("Batch with useReducer or combine into single state object"),
            );
        }
    }

    issues
}

/// Lookahead after the callback's closing brace at `close`.
fn has_no_deps(text: &str, close: usize) -> bool {
    let after = window_after(text, close + 1, DEPS_LOOKAHEAD).trim();
    after.starts_with(')') || after.starts_with(';')
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run;
    use super::*;
    use indoc::indoc;

    fn kinds(src: &str) -> Vec<IssueKind> {
        run(detect_useeffect_issues, src).iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_async_callback() {
        let src = "useEffect(async () => { await load(); }, []);";
        assert_eq!(kinds(src), vec![IssueKind::UseeffectAsync]);
    }

    #[test]
    fn test_setstate_without_deps() {
        let src = indoc! {r#"
            useEffect(() => {
              setCount(count + 1);
            });
        "#};
        let issues = run(detect_useeffect_issues, src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UseeffectSetstateNoDeps);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].line, 1);
    }

    #[test]
    fn test_function_callback_followed_by_semicolon() {
        // unusual, but the lookahead rule treats a leading `;` like `)`
        let src = "useEffect(function() { setOpen(true) };";
        assert_eq!(kinds(src), vec![IssueKind::UseeffectSetstateNoDeps]);
    }

    #[test]
    fn test_trailing_comma_is_not_no_deps() {
        // `, )` does not start with `)` or `;`, and one setter is below the
        // cascade threshold: nothing is reported.
        let src = "useEffect(() => { setCount(1); }, )";
        assert!(kinds(src).is_empty());
    }

    #[test]
    fn test_lookahead_window_boundary() {
        // Whitespace is trimmed, so a `)` anywhere inside the window counts.
        let inside = format!("useEffect(() => {{ setA(1); }}{})", " ".repeat(DEPS_LOOKAHEAD - 1));
        assert_eq!(kinds(&inside), vec![IssueKind::UseeffectSetstateNoDeps]);
        // One byte further and the paren falls outside the window.
        let outside = format!("useEffect(() => {{ setA(1); }}{})", " ".repeat(DEPS_LOOKAHEAD));
        assert!(kinds(&outside).is_empty());
    }

    #[test]
    fn test_multiple_setters_with_deps() {
        let src = indoc! {r#"
            useEffect(() => {
              setA(1);
              setB(2);
              setC(3);
            }, [id]);
        "#};
        let issues = run(detect_useeffect_issues, src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UseeffectMultiSetstate);
        assert!(issues[0].message.contains("3 setState calls"));
    }

    #[test]
    fn test_no_setters_and_lowercase_set_are_ignored() {
        let src = "useEffect(() => { settings.load(); reset(); });";
        assert!(kinds(src).is_empty());
    }

    #[test]
    fn test_unbalanced_effect_is_skipped() {
        let src = "useEffect(() => { setA(\"}\"); ";
        assert!(kinds(src).is_empty());
    }
}
