//! Line splitting for the REPL.

/// Split a command line into whitespace-delimited tokens.
///
/// Runs of whitespace collapse and leading/trailing whitespace is ignored.
/// There is no quoting or escaping.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Remove a single trailing `\n` or `\r\n` from a line read off the input.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
