//! `threadsplit`: preview how a text would be posted as a numbered thread.
//!
//! Reads UTF-8 text from `--file` or stdin and prints each segment, separated
//! by blank lines. Nothing is posted anywhere.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use threadsplit::{Segmenter, DEFAULT_BUDGET, DEFAULT_MAX_ITERATIONS};

/// Logged when the input holds nothing but whitespace.
const NO_CONTENT: &str = "No content found to post.";

#[derive(Debug, Parser)]
#[command(name = "threadsplit", version, about = "Split text into a numbered thread of posts")]
struct Cli {
    /// Path to a UTF-8 text file. Reads stdin when omitted.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum length of a post, suffix included, in characters.
    #[arg(long = "max-tweet-length", visible_alias = "budget", default_value_t = DEFAULT_BUDGET)]
    max_tweet_length: usize,

    /// Cap on fixed-point iterations.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exit status when the thread was printed, or there was nothing to print.
const EXIT_OK: u8 = 0;
/// Exit status when the text cannot be split under the given options.
const EXIT_SEGMENT: u8 = 1;
/// Exit status when the input cannot be read.
const EXIT_READ: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let input = read_input(cli.file.as_deref());
    let status = execute(&cli, input, &mut std::io::stdout().lock());
    ExitCode::from(status)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Map the read result and the run onto the process exit status.
fn execute(cli: &Cli, input: anyhow::Result<String>, out: &mut impl Write) -> u8 {
    let text = match input {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("{e:#}");
            return EXIT_READ;
        }
    };

    match run(cli, &text, out) {
        Ok(_) => EXIT_OK,
        Err(e) => {
            tracing::error!("{e:#}");
            EXIT_SEGMENT
        }
    }
}

/// Segment `text` and write the thread to `out`. Returns the post count.
fn run(cli: &Cli, text: &str, out: &mut impl Write) -> anyhow::Result<usize> {
    let segmenter = Segmenter::new(cli.max_tweet_length)
        .with_max_iterations(cli.max_iterations)
        .context("invalid --max-iterations")?;

    let thread = segmenter
        .segment(text)
        .with_context(|| format!("cannot split text into posts of {} characters", cli.max_tweet_length))?;

    if thread.is_empty() {
        tracing::info!("{NO_CONTENT}");
        return Ok(0);
    }

    tracing::info!(posts = thread.len(), budget = cli.max_tweet_length, "thread ready");

    for (i, segment) in thread.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{segment}")?;
    }
    out.flush()?;

    Ok(thread.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("threadsplit").chain(args.iter().copied())).unwrap()
    }

    fn execute_text(cli: &Cli, text: &str) -> (u8, String) {
        let mut out = Vec::new();
        let status = execute(cli, Ok(text.to_string()), &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.max_tweet_length, DEFAULT_BUDGET);
        assert_eq!(cli.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_budget_alias() {
        assert_eq!(cli(&["--budget", "20"]).max_tweet_length, 20);
        assert_eq!(cli(&["--max-tweet-length", "30"]).max_tweet_length, 30);
    }

    #[test]
    fn test_prints_thread_separated_by_blank_lines() {
        let (status, out) = execute_text(&cli(&["--budget", "20"]), "alpha beta gamma delta epsilon");
        assert_eq!(status, EXIT_OK);
        assert_eq!(out, "alpha beta gamma 1/2\n\ndelta epsilon 2/2\n");
    }

    #[test]
    fn test_empty_input_succeeds_with_no_output() {
        let cli = cli(&[]);
        assert_eq!(run(&cli, "  \n\n ", &mut Vec::new()).unwrap(), 0);

        let (status, out) = execute_text(&cli, "");
        assert_eq!(status, EXIT_OK);
        assert!(out.is_empty());
        assert_eq!(NO_CONTENT, "No content found to post.");
    }

    #[test]
    fn test_segmentation_error_exits_one() {
        let (status, out) = execute_text(&cli(&["--budget", "3"]), "some text");
        assert_eq!(status, EXIT_SEGMENT);
        assert!(out.is_empty());

        let err = run(&cli(&["--budget", "3"]), "some text", &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("posts of 3 characters"));
    }

    #[test]
    fn test_zero_iteration_cap_exits_one() {
        let (status, _) = execute_text(&cli(&["--max-iterations", "0"]), "some text");
        assert_eq!(status, EXIT_SEGMENT);
    }

    #[test]
    fn test_unreadable_input_exits_two() {
        let missing = Path::new("/nonexistent/threadsplit/input.txt");
        let input = read_input(Some(missing));
        assert!(input.is_err());

        let mut out = Vec::new();
        assert_eq!(execute(&cli(&[]), input, &mut out), EXIT_READ);
        assert!(out.is_empty());
    }

    #[test]
    fn test_reads_file() {
        let path = std::env::temp_dir().join(format!("threadsplit-{}.txt", std::process::id()));
        std::fs::write(&path, "one two\r\n\r\nthree").unwrap();
        let text = read_input(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        let (status, out) = execute_text(&cli(&[]), &text);
        assert_eq!(status, EXIT_OK);
        assert_eq!(out, "one two\n\nthree 1/1\n");
    }
}
