//! Numsort CLI
//!
//! Reads one line of comma-separated integers from stdin and prints it back
//! sorted, separated by ", ".

mod input;

use clap::{Arg, ArgAction, Command};
use numsort_parser::Parser;
use numsort_sort::sort_sequence;
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    let matches = Command::new("numsort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort one line of comma-separated integers from stdin")
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Report malformed values, overflow and excess values instead of ignoring them")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let strict = matches.get_flag("strict");

    match run(io::stdin().lock(), io::stdout().lock(), strict) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Read, parse, sort and print one line. Missing input is not an error, and
/// outside strict mode neither is a failed write.
fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W, strict: bool) -> anyhow::Result<i32> {
    let Some(raw) = input::read_line(&mut reader) else {
        return Ok(0);
    };
    let line = input::strip_terminator(input::bound_line(&raw));

    let parser = Parser::new(line);
    let mut sequence = if strict {
        parser.parse_strict()?
    } else {
        parser.parse()
    };

    sort_sequence(&mut sequence);

    let written = writeln!(writer, "{sequence}").and_then(|()| writer.flush());
    if strict {
        written?;
    }
    Ok(0)
}
