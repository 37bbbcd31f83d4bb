//! Severity filtering and summary computation.

use crate::models::{Issue, Severity, Summary};

/// Drop `info` findings unless `include_info` is set, then summarize.
///
/// Pure: identical input yields identical output. Issues are removed, never
/// edited, and relative order is preserved.
pub fn aggregate(issues: Vec<Issue>, include_info: bool) -> (Vec<Issue>, Summary) {
    let kept: Vec<Issue> = if include_info {
        issues
    } else {
        issues
            .into_iter()
            .filter(|is| is.severity != Severity::Info)
            .collect()
    };
    let summary = Summary::from_issues(&kept);
    (kept, summary)
}
