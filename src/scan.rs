//! Brace matching and text-position helpers shared by the extractor and
//! the detectors.
//!
//! The matcher is a small character-scanning state machine, not a lexer:
//! - `Normal`: `{` and `}` adjust depth; a quote character opens a literal.
//! - `InSingleQuote` / `InDoubleQuote` / `InTemplate`: braces are ignored and
//!   only the same unescaped delimiter closes the literal.
//!
//! In every state a backslash consumes itself and the following byte as a
//! pair, so `\"` or `\{` never affect quote state or depth.
//!
//! Known limitation: template literal interpolation (`${ ... }`) is not
//! tracked. Once inside a backtick literal everything up to the next
//! unescaped backtick is opaque, so a backtick nested inside an interpolation
//! closes the literal early.

/// Scanner state while walking towards the matching brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InSingleQuote,
    InDoubleQuote,
    InTemplate,
}

impl State {
    fn opened_by(b: u8) -> Option<State> {
        match b {
            b'\'' => Some(State::InSingleQuote),
            b'"' => Some(State::InDoubleQuote),
            b'`' => Some(State::InTemplate),
            _ => None,
        }
    }

    fn closing_quote(self) -> Option<u8> {
        match self {
            State::Normal => None,
            State::InSingleQuote => Some(b'\''),
            State::InDoubleQuote => Some(b'"'),
            State::InTemplate => Some(b'`'),
        }
    }
}

/// Return the byte offset of the `}` matching the `{` at `open`.
///
/// Returns `None` when the text ends before depth returns to zero, or when
/// `open` does not point at `{`. Callers treat `None` as "skip this
/// candidate".
pub fn match_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let mut depth: usize = 0;
    let mut state = State::Normal;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' {
            i += 2;
            continue;
        }
        match state {
            State::Normal => {
                if let Some(next) = State::opened_by(b) {
                    state = next;
                } else if b == b'{' {
                    depth += 1;
                } else if b == b'}' {
                    // depth >= 1 here: the scan starts on the opening brace
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
            }
            quoted => {
                if quoted.closing_quote() == Some(b) {
                    state = State::Normal;
                }
            }
        }
        i += 1;
    }
    None
}

/// 1-based line number of a byte offset.
pub fn line_at(text: &str, pos: usize) -> usize {
    let end = pos.min(text.len());
    text.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
}

/// Largest char boundary at or below `pos`.
pub fn floor_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Up to `len` bytes of text ending at `pos`, snapped to char boundaries.
pub fn window_before(text: &str, pos: usize, len: usize) -> &str {
    let end = floor_boundary(text, pos);
    let start = floor_boundary(text, end.saturating_sub(len));
    &text[start..end]
}

/// Up to `len` bytes of text starting at `pos`, snapped to char boundaries.
pub fn window_after(text: &str, pos: usize, len: usize) -> &str {
    let start = floor_boundary(text, pos);
    let end = floor_boundary(text, start.saturating_add(len));
    &text[start..end]
}
