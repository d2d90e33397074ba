//! `vyc`: inspect how the Vyper scanner sees a file.

use vyc::commands::{indent_report, lex_report, read_source, stats_report};
use vyc::{init_tracing, parse_args, CliError, Command, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args).and_then(run) {
        Ok(report) => print!("{report}"),
        Err(CliError::Usage(message)) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Lex { path, config } => {
            let source = read_source(&path)?;
            lex_report(&path.display().to_string(), &source, &config)
        }
        Command::Indent {
            path,
            lines,
            config,
        } => {
            let source = read_source(&path)?;
            indent_report(&source, &lines, &config)
        }
        Command::Stats { paths, config } => stats_report(&paths, &config),
        Command::Help => Ok(format!("{USAGE}\n")),
    }
}
