//! Output rendering for audit reports.
//!
//! Supports `human` (default) and `json` outputs. Human output lists only
//! files with findings, grouped by category; JSON output includes every
//! scanned file.

use crate::models::{Category, FileReport, Severity, Summary};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

const RULE_WIDTH: usize = 64;

/// Summary line labels, in display order.
const SUMMARY_LABELS: [(&str, fn(&Summary) -> usize); 7] = [
    ("obj", |s| s.inline_objects),
    ("arr", |s| s.inline_arrays),
    ("fn", |s| s.inline_functions),
    ("ctx", |s| s.context_issues),
    ("effect", |s| s.useeffect_issues),
    ("expensive", |s| s.expensive_ops),
    ("complexity", |s| s.complexity),
];

fn use_colors(json: bool) -> bool {
    !json && std::env::var_os("NO_COLOR").is_none()
}

/// Print reports in the requested format.
pub fn print_reports(reports: &[FileReport], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&compose_json(reports)?)?);
    } else {
        print!("{}", render_human(reports, use_colors(json)));
    }
    Ok(())
}

/// Compose the JSON document (pure) for testing/snapshot purposes.
///
/// A single report is emitted as an object, several as an array, and an
/// empty run as `{"files": 0, "issues": []}`.
pub fn compose_json(reports: &[FileReport]) -> serde_json::Result<JsonVal> {
    match reports {
        [] => Ok(json!({"files": 0, "issues": []})),
        [only] => serde_json::to_value(only),
        many => serde_json::to_value(many),
    }
}

/// Render the human report for every file with findings, plus totals when
/// more than one file is listed.
pub fn render_human(reports: &[FileReport], color: bool) -> String {
    let listed: Vec<&FileReport> = reports.iter().filter(|r| r.has_findings()).collect();
    if listed.is_empty() {
        return "\nNo React re-render issues found. Clean codebase!\n".to_string();
    }
    let mut out = String::new();
    for r in &listed {
        out.push_str(&render_report(r, color));
    }
    if listed.len() > 1 {
        out.push_str(&render_totals(&listed, color));
    }
    out
}

/// Render one file's report.
pub fn render_report(report: &FileReport, color: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let title = format!("  React Re-render Audit: {}", report.file);
    let mut out = format!("\n{rule}\n{}\n{rule}\n", paint_bold(&title, color));

    if let Some(err) = &report.error {
        let line = format!("  Error: {err}");
        if color {
            out.push_str(&format!("{}\n", line.red()));
        } else {
            out.push_str(&format!("{line}\n"));
        }
        return out;
    }

    let s = &report.summary;
    if s.total_issues == 0 {
        out.push_str("  No issues found.\n\n");
        return out;
    }

    out.push_str(&format!("  {} = {} total\n", summary_parts(s), s.total_issues));

    for cat in Category::ALL {
        let in_cat: Vec<_> = report
            .issues
            .iter()
            .filter(|is| is.kind.category() == cat)
            .collect();
        if in_cat.is_empty() {
            continue;
        }
        out.push_str(&format!("\n  {}:\n", paint_bold(cat.label(), color)));
        for is in in_cat {
            out.push_str(&format!(
                "  {} L{}: {}\n",
                severity_icon(is.severity, color),
                is.line,
                is.message
            ));
            if let Some(sug) = &is.suggestion {
                let line = format!("     -> {sug}");
                if color {
                    out.push_str(&format!("{}\n", line.bright_black()));
                } else {
                    out.push_str(&format!("{line}\n"));
                }
            }
        }
    }
    out.push('\n');
    out
}

/// Totals block across several files.
pub fn render_totals(reports: &[&FileReport], color: bool) -> String {
    let mut t = Summary::default();
    for r in reports {
        t.merge(&r.summary);
    }
    let inline = t.inline_objects + t.inline_arrays + t.inline_functions;
    let rule = "=".repeat(RULE_WIDTH);
    let headline = format!("  TOTAL: {} files with issues", reports.len());
    format!(
        "{rule}\n{}\n  {inline} inline | {} ctx | {} effect | {} expensive | {} complexity\n  {} total issues\n{rule}\n",
        paint_bold(&headline, color),
        t.context_issues,
        t.useeffect_issues,
        t.expensive_ops,
        t.complexity,
        t.total_issues,
    )
}

/// `obj:2 | fn:1 | ...`, omitting zero counts.
fn summary_parts(s: &Summary) -> String {
    SUMMARY_LABELS
        .iter()
        .filter_map(|(label, get)| {
            let n = get(s);
            (n > 0).then(|| format!("{label}:{n}"))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn severity_icon(sev: Severity, color: bool) -> String {
    let icon = match sev {
        Severity::Error => "!!",
        Severity::Warning => "!~",
        Severity::Info => "~~",
    };
    if !color {
        return icon.to_string();
    }
    match sev {
        Severity::Error => icon.red().bold().to_string(),
        Severity::Warning => icon.yellow().bold().to_string(),
        Severity::Info => icon.blue().to_string(),
    }
}

fn paint_bold(s: &str, color: bool) -> String {
    if color {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, IssueKind};

    fn report(file: &str, issues: Vec<Issue>) -> FileReport {
        FileReport {
            file: file.into(),
            error: None,
            summary: Summary::from_issues(&issues),
            issues,
        }
    }

    fn sample() -> FileReport {
        report(
            "src/App.tsx",
            vec![
                Issue::new(IssueKind::InlineObject, Severity::Error, 4, "src/App.tsx", "Inline object in prop 'data'")
                    .with_prop("data")
                    .with_suggestion("hoist"),
                Issue::new(IssueKind::UseeffectAsync, Severity::Error, 9, "src/App.tsx", "async effect"),
                Issue::new(IssueKind::InlineFunction, Severity::Warning, 12, "src/App.tsx", "Inline function"),
            ],
        )
    }

    #[test]
    fn test_render_report_groups_by_category() {
        let out = render_report(&sample(), false);
        assert!(out.contains("  React Re-render Audit: src/App.tsx\n"));
        assert!(out.contains("  obj:1 | fn:1 | effect:1 = 3 total\n"));
        let inline_at = out.find("Inline Creations (re-render triggers):").unwrap();
        let effects_at = out.find("useEffect Anti-patterns:").unwrap();
        assert!(inline_at < effects_at);
        assert!(out.contains("  !! L4: Inline object in prop 'data'\n     -> hoist\n"));
        assert!(out.contains("  !~ L12: Inline function\n"));
        assert!(!out.contains("Context Issues"));
    }

    #[test]
    fn test_render_error_and_clean_reports() {
        let failed = FileReport::failed("x.tsx", "permission denied");
        assert!(render_report(&failed, false).contains("  Error: permission denied\n"));
        let clean = report("ok.tsx", vec![]);
        assert!(render_report(&clean, false).contains("No issues found."));
    }

    #[test]
    fn test_render_human_lists_only_findings_and_totals() {
        let clean = report("ok.tsx", vec![]);
        assert_eq!(
            render_human(&[clean.clone()], false),
            "\nNo React re-render issues found. Clean codebase!\n"
        );
        let out = render_human(&[sample(), clean, sample()], false);
        assert!(!out.contains("ok.tsx"));
        assert!(out.contains("  TOTAL: 2 files with issues\n"));
        assert!(out.contains("  4 inline | 0 ctx | 2 effect | 0 expensive | 0 complexity\n"));
        assert!(out.contains("  6 total issues\n"));
    }

    #[test]
    fn test_compose_json_shapes() {
        let one = compose_json(&[sample()]).unwrap();
        assert_eq!(one["file"], "src/App.tsx");
        assert_eq!(one["summary"]["inline_objects"], 1);
        assert_eq!(one["summary"]["total_issues"], 3);
        assert_eq!(one["issues"][0]["type"], "inline-object");
        assert_eq!(one["issues"][0]["prop"], "data");
        assert!(one.get("error").is_none());

        let many = compose_json(&[sample(), FileReport::failed("b.tsx", "boom")]).unwrap();
        assert_eq!(many.as_array().unwrap().len(), 2);
        assert_eq!(many[1]["error"], "boom");
        assert_eq!(many[1]["issues"], json!([]));

        let none = compose_json(&[]).unwrap();
        assert_eq!(none, json!({"files": 0, "issues": []}));
    }
}
