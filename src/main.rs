use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools;
use log::{LevelFilter, debug};
use std::io::{self, BufRead};
use std::process::ExitCode;

use tinyre::{MatchResult, Matcher, Pattern, compile};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to match
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Subjects to test; read one per line from stdin if omitted
    #[arg(value_name = "SUBJECT")]
    subjects: Vec<String>,

    /// Search for a matching substring instead of matching the whole subject
    #[arg(short = 's', long)]
    search: bool,

    /// Print the range consumed by each operator
    #[arg(short = 'r', long)]
    ranges: bool,

    /// Print the compiled operators and exit
    #[arg(long)]
    explain: bool,

    /// Give up on a subject after this many backtracking steps
    #[arg(long, value_name = "N")]
    step_limit: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("tinyre: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every subject matched.
fn run(args: Args) -> Result<bool> {
    let pattern = compile(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    if args.explain {
        explain(&pattern);
        return Ok(true);
    }

    let matcher = build_matcher(&pattern, args.step_limit)?;
    let subjects = read_subjects(args.subjects, io::stdin().lock())?;
    debug!("testing {} subjects against {pattern}", subjects.len());

    let mut all_matched = true;
    for subject in &subjects {
        let outcome = if args.search {
            matcher.find(subject)
        } else {
            matcher.full_match(subject)
        }
        .with_context(|| format!("matching {subject:?}"))?;

        match outcome {
            Some(m) => {
                println!("MATCH {subject}");
                if args.ranges {
                    print_ranges(&pattern, &m);
                }
            }
            None => {
                println!("NO_MATCH {subject}");
                all_matched = false;
            }
        }
    }
    Ok(all_matched)
}

fn build_matcher(pattern: &Pattern, step_limit: Option<usize>) -> Result<Matcher<'_>> {
    let matcher = Matcher::new(pattern);
    match step_limit {
        Some(0) => bail!("step limit must be at least 1"),
        Some(limit) => Ok(matcher.step_limit(limit)),
        None => Ok(matcher),
    }
}

/// Subjects given on the command line, or one per line of `input` if none were.
fn read_subjects(subjects: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !subjects.is_empty() {
        return Ok(subjects);
    }
    input
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read subjects from stdin")
}

fn explain(pattern: &Pattern) {
    for (i, op) in pattern.operators().iter().enumerate() {
        let max = op
            .max_repeat()
            .map_or_else(|| "inf".to_string(), |n| n.to_string());
        println!("{i}: {} {{{},{max}}}", op.kind, op.min_repeat());
    }
}

fn print_ranges(pattern: &Pattern, m: &MatchResult) {
    println!("  span {}", m.span());
    for (i, (op, range)) in pattern.operators().iter().zip(m.consumed()).enumerate() {
        let reps = m.repetitions(i).unwrap_or_default().iter().join(" ");
        println!("  {i}: {op} {range} [{reps}]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn subjects_from_arguments_skip_input() {
        let subjects = vec!["ab".to_string(), "c".to_string()];
        let got = read_subjects(subjects, Cursor::new("ignored\n")).unwrap();
        assert_eq!(got, vec!["ab", "c"]);
    }

    #[test]
    fn subjects_from_input_lines() {
        let got = read_subjects(Vec::new(), Cursor::new("one\ntwo\n")).unwrap();
        assert_eq!(got, vec!["one", "two"]);
    }

    #[test]
    fn zero_step_limit_is_rejected() {
        let pattern = compile("a*").unwrap();
        let err = build_matcher(&pattern, Some(0)).unwrap_err();
        assert_eq!(err.to_string(), "step limit must be at least 1");
    }

    #[test]
    fn step_limit_is_applied() {
        let pattern = compile("a*a*a*a*b").unwrap();
        let matcher = build_matcher(&pattern, Some(5)).unwrap();
        assert!(matcher.is_match(&"a".repeat(20)).is_err());
        let unbounded = build_matcher(&pattern, None).unwrap();
        assert_eq!(unbounded.is_match("aab"), Ok(true));
    }
}
