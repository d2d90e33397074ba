use std::fmt::Write;

use vy_lexer::{Document, LexerConfig};

use crate::CliError;

/// Suggested indentation for the requested 1-based `lines`, or for every
/// line when `lines` is empty.
///
/// Lines inside a string or block comment print `-`.
pub fn indent_report(
    source: &str,
    lines: &[usize],
    config: &LexerConfig,
) -> Result<String, CliError> {
    let document = Document::new(source, *config)?;
    let count = document.line_count();
    let selected: Vec<usize> = if lines.is_empty() {
        (1..=count).collect()
    } else {
        lines.to_vec()
    };

    let mut report = String::new();
    for line in selected {
        if line == 0 || line > count {
            return Err(CliError::LineOutOfRange { line, count });
        }
        let _ = match document.indent_for_line(line - 1) {
            Some(indent) => writeln!(report, "{line}: {indent}"),
            None => writeln!(report, "{line}: -"),
        };
    }
    Ok(report)
}
