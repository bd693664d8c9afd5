//! Line matching and output formatting for `grep`.

/// Returns true when `line` contains `pattern` as a plain substring.
pub fn line_matches(line: &str, pattern: &str) -> bool {
    line.contains(pattern)
}

/// How matching lines are labelled in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLabel {
    /// One input file: lines are printed as-is.
    Bare,
    /// Several input files: lines are prefixed with `<file>: `.
    FileName,
}

impl MatchLabel {
    pub fn for_file_count(count: usize) -> Self {
        if count > 1 {
            MatchLabel::FileName
        } else {
            MatchLabel::Bare
        }
    }

    /// Render one matching line (without the trailing newline).
    pub fn render(self, file: &str, line: &str) -> String {
        match self {
            MatchLabel::Bare => line.to_string(),
            MatchLabel::FileName => format!("{file}: {line}"),
        }
    }
}
