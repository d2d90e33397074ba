//! Argument parsing.
//!
//! Hand-rolled, in the style of `--name=value` flags: configuration flags
//! may appear anywhere after the subcommand.

use std::path::PathBuf;

use vy_lexer::LexerConfig;

use crate::CliError;

/// A parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the token stream of one file.
    Lex { path: PathBuf, config: LexerConfig },
    /// Print suggested indentation for selected (or all) lines, 1-based.
    Indent {
        path: PathBuf,
        lines: Vec<usize>,
        config: LexerConfig,
    },
    /// Per-file token statistics, computed in parallel.
    Stats {
        paths: Vec<PathBuf>,
        config: LexerConfig,
    },
    Help,
}

pub const USAGE: &str = "\
Usage: vyc <command> [options]

Commands:
  lex <file>               Print the classified token stream
  indent <file> [line...]  Print the suggested indent for each line (1-based)
  stats <file>...          Summarize token categories per file
  help                     Show this message

Options:
  --indent-unit=<n>        Columns per indentation step (default: 4)
  --tab-size=<n>           Tab width in columns (default: 4)";

/// Parse `args`, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let mut config = LexerConfig::default();
    let mut positional = Vec::new();
    for arg in rest {
        if config.apply_flag(arg)? {
            continue;
        }
        if arg.starts_with("--") {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        }
        positional.push(arg.as_str());
    }
    config.validate()?;

    match command.as_str() {
        "lex" => match positional.as_slice() {
            [path] => Ok(Command::Lex {
                path: PathBuf::from(path),
                config,
            }),
            _ => Err(CliError::Usage("Usage: vyc lex <file> [options]".to_string())),
        },
        "indent" => {
            let Some((path, lines)) = positional.split_first() else {
                return Err(CliError::Usage(
                    "Usage: vyc indent <file> [line...] [options]".to_string(),
                ));
            };
            let lines = lines
                .iter()
                .map(|s| parse_line_number(s))
                .collect::<Result<_, _>>()?;
            Ok(Command::Indent {
                path: PathBuf::from(path),
                lines,
                config,
            })
        }
        "stats" => {
            if positional.is_empty() {
                return Err(CliError::Usage(
                    "Usage: vyc stats <file>... [options]".to_string(),
                ));
            }
            Ok(Command::Stats {
                paths: positional.into_iter().map(PathBuf::from).collect(),
                config,
            })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

fn parse_line_number(text: &str) -> Result<usize, CliError> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidLine(text.to_string())),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
