use std::fmt::Write;
use std::path::PathBuf;

use rayon::prelude::*;
use vy_lexer::{lex, Category, LexerConfig};
use vy_lexer_core::SubScanner;

use super::read_source;
use crate::CliError;

/// Token statistics for one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    /// Token count per category, indexed by `Category as usize`.
    pub counts: [usize; Category::COUNT],
    /// Brackets still open at end of input.
    pub open_brackets: usize,
    /// String or block comment still open at end of input.
    pub unterminated: Option<SubScanner>,
}

impl FileStats {
    #[inline]
    pub fn count(&self, category: Category) -> usize {
        self.counts[category as usize]
    }
}

pub fn file_stats(source: &str, config: &LexerConfig) -> Result<FileStats, CliError> {
    let output = lex(source, config)?;
    let mut counts = [0; Category::COUNT];
    for token in &output.tokens {
        counts[token.category as usize] += 1;
    }
    Ok(FileStats {
        lines: output.line_count,
        counts,
        open_brackets: output.final_state.contexts().depth(),
        unterminated: output.final_state.sub_scanner(),
    })
}

/// Lex every file in parallel and summarize each, in argument order.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn stats_report(paths: &[PathBuf], config: &LexerConfig) -> Result<String, CliError> {
    let results: Vec<FileStats> = paths
        .par_iter()
        .map(|path| file_stats(&read_source(path)?, config))
        .collect::<Result<_, _>>()?;

    let mut report = String::new();
    for (path, stats) in paths.iter().zip(&results) {
        let _ = writeln!(report, "{}: {} lines", path.display(), stats.lines);
        for category in Category::ALL {
            let n = stats.count(category);
            if n > 0 && !category.is_transparent() {
                let _ = writeln!(report, "  {:<18} {n}", category.name());
            }
        }
        if stats.open_brackets > 0 {
            let _ = writeln!(report, "  warning: {} unclosed bracket(s)", stats.open_brackets);
        }
        if let Some(open) = stats.unterminated {
            let _ = writeln!(report, "  warning: unterminated {open:?} at end of file");
        }
    }
    Ok(report)
}
