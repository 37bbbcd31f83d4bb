//! Audit runner: one file through extraction, detectors, and aggregation.
//!
//! Files are independent, so [`run_audit`] analyzes them in parallel and
//! returns reports in input order.

use crate::aggregate::aggregate;
use crate::components::extract_components;
use crate::detectors::{looks_like_react, run_detectors, ComplexityLimits, ScanContext};
use crate::models::{FileReport, Summary};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Options shared by every file in one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditOptions {
    /// Keep `info` findings
    pub strict: bool,
    pub limits: ComplexityLimits,
}

/// Analyze in-memory source text. Never fails.
pub fn analyze_source(text: &str, file: &str, opts: &AuditOptions) -> FileReport {
    if !looks_like_react(text) {
        debug!(file, "no framework markers; skipped");
        return FileReport {
            file: file.to_string(),
            error: None,
            summary: Summary::default(),
            issues: Vec::new(),
        };
    }
    let components = extract_components(text);
    let ctx = ScanContext {
        text,
        file,
        components: &components,
        limits: &opts.limits,
    };
    let (issues, summary) = aggregate(run_detectors(&ctx), opts.strict);
    FileReport {
        file: file.to_string(),
        error: None,
        summary,
        issues,
    }
}

/// Read and analyze one file. Read failures become error reports.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn analyze_file(path: &Path, opts: &AuditOptions) -> FileReport {
    let file = path.to_string_lossy();
    let started = Instant::now();
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!(file = %file, "read failed: {e}");
            return FileReport::failed(&file, e.to_string());
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    let report = analyze_source(&text, &file, opts);
    debug!(
        file = %file,
        issues = report.issues.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "file analyzed"
    );
    report
}

/// Analyze every file in parallel, preserving input order.
pub fn run_audit(files: &[PathBuf], opts: &AuditOptions) -> Vec<FileReport> {
    files.par_iter().map(|p| analyze_file(p, opts)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueKind, Severity};
    use indoc::indoc;
    use std::fs;
    use tempfile::tempdir;

    const PANEL: &str = indoc! {r#"
        import React, { useState, useEffect } from 'react';

        export function Panel({ items, onPick }) {
          const [open, setOpen] = useState(false);
          useEffect(() => {
            setOpen(true);
          });
          return (
            <List
              {...props}
              style={{ padding: 4 }}
              filters={['a', 'b']}
              onSelect={(x) => onPick(x)}
            />
          );
        }
    "#};

    #[test]
    fn test_analyze_source_end_to_end() {
        let report = analyze_source(PANEL, "Panel.jsx", &AuditOptions::default());
        let kinds: Vec<_> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::InlineObject,
                IssueKind::InlineArray,
                IssueKind::InlineFunction,
                IssueKind::UseeffectSetstateNoDeps,
            ]
        );
        assert_eq!(report.summary.total_issues, 4);
        assert_eq!(report.summary.useeffect_issues, 1);
        assert!(report.issues.iter().all(|i| i.file == "Panel.jsx"));
    }

    #[test]
    fn test_strict_keeps_info_findings() {
        let opts = AuditOptions {
            strict: true,
            ..AuditOptions::default()
        };
        let report = analyze_source(PANEL, "Panel.jsx", &opts);
        let spread = report
            .issues
            .iter()
            .find(|i| i.kind == IssueKind::PropSpreading)
            .unwrap();
        assert_eq!(spread.severity, Severity::Info);
        assert_eq!(report.summary.complexity, 1);
        assert_eq!(report.summary.total_issues, 5);
    }

    #[test]
    fn test_non_react_text_is_skipped() {
        let src = "export const cfg = { items: [1, 2] };\nconst x = JSON.parse(s);";
        let report = analyze_source(src, "cfg.ts", &AuditOptions::default());
        assert!(report.issues.is_empty());
        assert_eq!(report.summary, Summary::default());
    }

    #[test]
    fn test_analyze_file_handles_invalid_utf8_and_missing_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Bad.jsx");
        let mut bytes = b"const A = () => { return <div className=\"x\" style={{a: 1}} />; };\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        fs::write(&path, bytes).unwrap();
        let report = analyze_file(&path, &AuditOptions::default());
        assert!(report.error.is_none());
        assert_eq!(report.summary.inline_objects, 1);

        let missing = analyze_file(&dir.path().join("Gone.jsx"), &AuditOptions::default());
        assert!(missing.error.is_some());
        assert!(missing.issues.is_empty());
    }

    #[test]
    fn test_run_audit_preserves_order() {
        let dir = tempdir().unwrap();
        let mut files = Vec::new();
        for name in ["c.jsx", "a.jsx", "b.jsx"] {
            let p = dir.path().join(name);
            fs::write(&p, "<div className=\"x\" data={{a: 1}} />").unwrap();
            files.push(p);
        }
        let reports = run_audit(&files, &AuditOptions::default());
        let names: Vec<_> = reports
            .iter()
            .map(|r| Path::new(&r.file).file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["c.jsx", "a.jsx", "b.jsx"]);
        assert!(reports.iter().all(|r| r.summary.inline_objects == 1));
    }
}
