//! Component record produced by the extractor.

#[derive(Debug, Clone, PartialEq, Eq)]
/// One detected component declaration.
///
/// `body` always starts with `{` and ends with its structurally matching `}`.
pub struct Component {
    pub name: String,
    /// 1-based line of the declaration start
    pub start_line: usize,
    /// 1-based line of the closing brace; never below `start_line`
    pub end_line: usize,
    /// Raw parameter list text, trimmed
    pub params: String,
    pub body: String,
}

impl Component {
    /// Number of lines spanned by the declaration, inclusive.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
