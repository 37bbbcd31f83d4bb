//! Re-render detector pipeline.
//!
//! Each rule is a plain function from a [`ScanContext`] to a list of issues.
//! Rules share no state; the pipeline runs them in declaration order and
//! sorts each rule's output by line, which makes the combined list
//! deterministic for a given input. New rules are added by appending to
//! [`DETECTORS`].

pub mod complexity;
pub mod context;
pub mod effects;
pub mod expensive;
pub mod inline;

pub use complexity::ComplexityLimits;

use crate::models::{Component, Issue};

/// Tokens of which at least one must occur for a file to be scanned at all.
pub const FRAMEWORK_MARKERS: [&str; 5] = ["React", "useState", "useEffect", "jsx", "className"];

/// Props never reported by the prop-assignment rules.
pub(crate) const SKIP_PROPS: [&str; 2] = ["key", "ref"];

/// Everything a rule may look at for one file.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub text: &'a str,
    pub file: &'a str,
    pub components: &'a [Component],
    pub limits: &'a ComplexityLimits,
}

/// A single detection rule.
pub type Detector = fn(&ScanContext<'_>) -> Vec<Issue>;

/// All rules, in report order.
pub const DETECTORS: [(&str, Detector); 9] = [
    ("inline-objects", inline::detect_inline_objects),
    ("inline-arrays", inline::detect_inline_arrays),
    ("inline-functions", inline::detect_inline_functions),
    ("context-provider-value", context::detect_context_provider_value),
    ("useeffect", effects::detect_useeffect_issues),
    ("expensive-render-ops", expensive::detect_expensive_render_ops),
    ("component-complexity", complexity::detect_component_complexity),
    ("inline-new", inline::detect_new_in_jsx),
    ("prop-spreading", complexity::detect_spread_props),
];

/// Cheap pre-filter: does the text look like framework code at all?
pub fn looks_like_react(text: &str) -> bool {
    FRAMEWORK_MARKERS.iter().any(|m| text.contains(m))
}

/// Run every rule over one file and concatenate the results.
///
/// Within a rule issues are ordered by ascending line (stable, so matches on
/// the same line keep scan order).
pub fn run_detectors(ctx: &ScanContext<'_>) -> Vec<Issue> {
    let mut all = Vec::new();
    for (name, detect) in DETECTORS.iter() {
        let mut found = detect(ctx);
        found.sort_by_key(|is| is.line);
        tracing::trace!(rule = *name, file = ctx.file, count = found.len(), "rule finished");
        all.extend(found);
    }
    all
}

pub(crate) fn is_skipped_prop(prop: &str) -> bool {
    SKIP_PROPS.contains(&prop)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::extract_components;
    use crate::models::IssueKind;
    use indoc::indoc;

    fn pipeline(text: &str) -> Vec<Issue> {
        let components = extract_components(text);
        let limits = ComplexityLimits::default();
        run_detectors(&ScanContext {
            text,
            file: "App.tsx",
            components: &components,
            limits: &limits,
        })
    }

    #[test]
    fn test_marker_prefilter() {
        assert!(looks_like_react("import React from 'react'"));
        assert!(looks_like_react("<div className=\"x\" />"));
        assert!(!looks_like_react("export const add = (a, b) => a + b;"));
    }

    #[test]
    fn test_output_follows_rule_order_then_line() {
        let src = indoc! {r#"
            const data = JSON.parse(raw);
            <List items={[1, 2]} />
            <Box style={{ margin: 0 }} />
            <Grid rows={[3]} />
        "#};
        let kinds: Vec<_> = pipeline(src).iter().map(|i| (i.kind, i.line)).collect();
        assert_eq!(
            kinds,
            vec![
                (IssueKind::InlineObject, 3),
                (IssueKind::InlineArray, 2),
                (IssueKind::InlineArray, 4),
                (IssueKind::ExpensiveRenderOp, 1),
            ]
        );
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let src = indoc! {r#"
            function Panel({ a }) {
              useEffect(() => { setA(1); });
              const sorted = items.sort();
              return <Row onClick={() => go()} data={{ a }} {...props} />;
            }
        "#};
        assert_eq!(pipeline(src), pipeline(src));
        assert!(!pipeline(src).is_empty());
    }
}
