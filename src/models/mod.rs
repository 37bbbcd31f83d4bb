//! Shared data models for audit findings, per-file summaries, and reports.

pub mod component;

pub use component::Component;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// How sure a detector is that the finding is a real defect.
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Closed set of finding types. Each detector emits one or more of these.
pub enum IssueKind {
    InlineObject,
    InlineArray,
    InlineFunction,
    InlineNew,
    ContextInlineValue,
    UseeffectAsync,
    UseeffectSetstateNoDeps,
    UseeffectMultiSetstate,
    ExpensiveRenderOp,
    LargeComponent,
    TooManyProps,
    TooManyState,
    PropSpreading,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InlineObject => "inline-object",
            Self::InlineArray => "inline-array",
            Self::InlineFunction => "inline-function",
            Self::InlineNew => "inline-new",
            Self::ContextInlineValue => "context-inline-value",
            Self::UseeffectAsync => "useeffect-async",
            Self::UseeffectSetstateNoDeps => "useeffect-setstate-no-deps",
            Self::UseeffectMultiSetstate => "useeffect-multi-setstate",
            Self::ExpensiveRenderOp => "expensive-render-op",
            Self::LargeComponent => "large-component",
            Self::TooManyProps => "too-many-props",
            Self::TooManyState => "too-many-state",
            Self::PropSpreading => "prop-spreading",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::InlineObject | Self::InlineArray | Self::InlineFunction | Self::InlineNew => {
                Category::InlineCreations
            }
            Self::ContextInlineValue => Category::Context,
            Self::UseeffectAsync | Self::UseeffectSetstateNoDeps | Self::UseeffectMultiSetstate => {
                Category::Effects
            }
            Self::ExpensiveRenderOp => Category::Expensive,
            Self::LargeComponent | Self::TooManyProps | Self::TooManyState | Self::PropSpreading => {
                Category::Complexity
            }
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Report grouping used by the human renderer.
pub enum Category {
    InlineCreations,
    Context,
    Effects,
    Expensive,
    Complexity,
}

impl Category {
    /// Render order of the human report.
    pub const ALL: [Category; 5] = [
        Category::InlineCreations,
        Category::Context,
        Category::Effects,
        Category::Expensive,
        Category::Complexity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::InlineCreations => "Inline Creations (re-render triggers)",
            Self::Context => "Context Issues",
            Self::Effects => "useEffect Anti-patterns",
            Self::Expensive => "Expensive Render Operations",
            Self::Complexity => "Component Complexity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single finding with its location and remediation hint.
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    /// 1-based line of the match start
    pub line: usize,
    pub file: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Issue {
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        line: usize,
        file: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            line,
            file: file.to_string(),
            message: message.into(),
            suggestion: None,
            prop: None,
            component: None,
            provider: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = Some(prop.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Per-file counts derived from the filtered issue list.
pub struct Summary {
    pub inline_objects: usize,
    pub inline_arrays: usize,
    pub inline_functions: usize,
    pub context_issues: usize,
    pub useeffect_issues: usize,
    pub expensive_ops: usize,
    pub complexity: usize,
    pub total_issues: usize,
}

impl Summary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut s = Summary {
            total_issues: issues.len(),
            ..Summary::default()
        };
        for is in issues {
            match is.kind {
                IssueKind::InlineObject => s.inline_objects += 1,
                IssueKind::InlineArray => s.inline_arrays += 1,
                IssueKind::InlineFunction => s.inline_functions += 1,
                // Counted toward the total only
                IssueKind::InlineNew => {}
                IssueKind::ContextInlineValue => s.context_issues += 1,
                IssueKind::UseeffectAsync
                | IssueKind::UseeffectSetstateNoDeps
                | IssueKind::UseeffectMultiSetstate => s.useeffect_issues += 1,
                IssueKind::ExpensiveRenderOp => s.expensive_ops += 1,
                IssueKind::LargeComponent
                | IssueKind::TooManyProps
                | IssueKind::TooManyState
                | IssueKind::PropSpreading => s.complexity += 1,
            }
        }
        s
    }

    /// Field-wise sum, used for the multi-file totals line.
    pub fn merge(&mut self, other: &Summary) {
        self.inline_objects += other.inline_objects;
        self.inline_arrays += other.inline_arrays;
        self.inline_functions += other.inline_functions;
        self.context_issues += other.context_issues;
        self.useeffect_issues += other.useeffect_issues;
        self.expensive_ops += other.expensive_ops;
        self.complexity += other.complexity;
        self.total_issues += other.total_issues;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Audit result for one file.
pub struct FileReport {
    pub file: String,
    /// Set when the file could not be read; the issue list is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub summary: Summary,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn failed(file: &str, error: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            error: Some(error.into()),
            summary: Summary::default(),
            issues: Vec::new(),
        }
    }

    pub fn has_findings(&self) -> bool {
        self.error.is_some() || self.summary.total_issues > 0
    }
}
