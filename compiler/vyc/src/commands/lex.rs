use std::fmt::Write;

use vy_lexer::{lex, Category, LexerConfig};

use crate::CliError;

/// One line per token: category, span, and quoted text.
///
/// Whitespace is omitted. An unterminated string or comment at end of input
/// is noted after the token list.
pub fn lex_report(name: &str, source: &str, config: &LexerConfig) -> Result<String, CliError> {
    let output = lex(source, config)?;
    let visible: Vec<_> = output
        .tokens
        .iter()
        .filter(|t| t.category != Category::Whitespace)
        .collect();

    let mut report = format!("Tokens for '{name}' ({} tokens):\n", visible.len());
    for token in visible {
        let role = token
            .punct
            .map(|p| format!(" [{:?}]", p.role))
            .unwrap_or_default();
        // Writing to a String cannot fail.
        let _ = writeln!(
            report,
            "  {:<18} @ {:<10} {:?}{role}",
            token.category.name(),
            token.span.to_string(),
            token.text(source),
        );
    }
    if let Some(open) = output.final_state.sub_scanner() {
        let _ = writeln!(report, "  (unterminated {open:?} at end of input)");
    }
    Ok(report)
}
