//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rerender-audit",
    version,
    about = "React re-render & performance auditor",
    long_about = "Scan React components for patterns that cause unnecessary re-renders: inline object/array/function props, \
                  unstable context values, useEffect anti-patterns, unmemoized expensive work, and oversized components.\n\n\
                  Configuration precedence: CLI > rerender.toml > defaults.",
    after_help = "Examples:\n  rerender-audit src/\n  rerender-audit src/App.tsx --strict\n  rerender-audit . --json",
    arg_required_else_help = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "File or directory to scan")]
    pub path: String,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Output raw JSON (default: human-readable)")]
    pub json: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Include low-severity hints (default: warnings + errors only)")]
    pub strict: bool,
}

impl Cli {
    /// Flags as config overrides: only a passed flag overrides the file.
    pub fn json_override(&self) -> Option<bool> {
        self.json.then_some(true)
    }

    pub fn strict_override(&self) -> Option<bool> {
        self.strict.then_some(true)
    }
}
