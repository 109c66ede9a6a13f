use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use greek_stemmer_lib::{output, StemResult, Stemmer, StemmerConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "greek-stemmer", about = "Rule-based stemmer for Modern Greek")]
struct Cli {
    /// Words to stem. If omitted, reads whitespace-separated words from stdin.
    words: Vec<String>,

    /// JSON file with `exceptions` and `protectedwords` replacing the built-in tables.
    #[arg(long, env = "GREEK_STEMMER_CONFIG")]
    config: Option<PathBuf>,

    /// Print only the stem of each word.
    #[arg(long, conflicts_with_all = ["json", "pretty"])]
    stem_only: bool,

    /// Output a JSON array of {word, stem} objects.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output (implies --json).
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stemmer = build_stemmer(&cli)?;

    let words = if cli.words.is_empty() {
        read_stdin_words()?
    } else {
        cli.words.clone()
    };
    debug!(count = words.len(), "stemming");

    let results = stemmer.stem_all(&words);
    print_results(&results, &cli)
}

fn build_stemmer(cli: &Cli) -> anyhow::Result<Stemmer> {
    match cli.config {
        Some(ref path) => {
            let config = StemmerConfig::from_path(path)
                .with_context(|| format!("loading stemmer config from {}", path.display()))?;
            Ok(Stemmer::from_config(config)?)
        }
        None => Ok(Stemmer::new()),
    }
}

fn read_stdin_words() -> anyhow::Result<Vec<String>> {
    let stdin = io::stdin();
    let mut words = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        words.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(words)
}

fn print_results(results: &[StemResult], cli: &Cli) -> anyhow::Result<()> {
    if cli.json || cli.pretty {
        let json = if cli.pretty {
            serde_json::to_string_pretty(results)
        } else {
            serde_json::to_string(results)
        };
        println!("{}", json.context("JSON serialization failed")?);
    } else if cli.stem_only {
        for r in results {
            println!("{}", r.stem);
        }
    } else if !results.is_empty() {
        println!("{}", output::to_lines(results));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_only_rejects_json_output() {
        assert!(Cli::try_parse_from(["greek-stemmer", "--stem-only", "--json", "λόγος"]).is_err());
        assert!(
            Cli::try_parse_from(["greek-stemmer", "--stem-only", "--pretty", "λόγος"]).is_err()
        );
    }

    #[test]
    fn test_output_flags_parse() {
        let cli = Cli::try_parse_from(["greek-stemmer", "--stem-only", "λόγος", "το"]).unwrap();
        assert!(cli.stem_only);
        assert_eq!(cli.words, vec!["λόγος".to_string(), "το".to_string()]);

        let cli = Cli::try_parse_from(["greek-stemmer", "--pretty", "λόγος"]).unwrap();
        assert!(cli.pretty && !cli.stem_only);
    }

    #[test]
    fn test_package_inherits_workspace_license() {
        assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");
    }
}
