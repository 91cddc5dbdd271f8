use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use linecalc::{Session, ast::Name, util::num::parse_definition};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "LINECALC_LOG";

/// linecalc evaluates one line at a time: expressions like `1 + 2 * 3`,
/// assignments like `x = 5, y = x + 1`, and deletions like `del x`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read lines from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed a variable at startup, e.g. `--define e=2.71828`. Repeatable.
    #[arg(short, long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    defines: Vec<(Name, f64)>,

    /// Log more (-v for debug, -vv for trace). `LINECALC_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Lines to evaluate in order. Without lines or a file, standard input is
    /// read interactively.
    lines: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::with_defaults(args.defines);

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::from(1);
        };
        return run_batch(&mut session, script.lines());
    }

    if !args.lines.is_empty() {
        return run_batch(&mut session, args.lines.iter().map(String::as_str));
    }

    match run_interactive(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::from(1)
        },
    }
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Evaluates each non-blank line, printing its transcript text.
///
/// Returns exit status 2 if any line failed.
fn run_batch<'a>(session: &mut Session, lines: impl Iterator<Item = &'a str>) -> ExitCode {
    let mut failed = false;

    for line in lines.filter(|l| !l.trim().is_empty()) {
        match session.run_line(line) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                failed = true;
                println!("{e}");
            },
        }
    }

    if failed { ExitCode::from(2) } else { ExitCode::SUCCESS }
}

/// Reads lines from standard input until EOF or `exit`/`quit`.
fn run_interactive(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        writeln!(stdout, "{}", session.respond(line))?;
    }

    Ok(())
}
