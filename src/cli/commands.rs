//! Command implementations for the Orthos CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use crate::cli::args::{Command, CorrectArgs, OrthosArgs, OutputFormat, ReplArgs, StatsArgs};
use crate::cli::output::{CorpusStats, CorrectionResults, format_correction, output_result};
use crate::error::Result;
use crate::spelling::{FrequencyDictionary, SpellCorrector};

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Train a corrector from the corpus file named in the arguments.
fn load_corrector(corpus: &Path, cli_args: &OrthosArgs) -> Result<SpellCorrector> {
    if cli_args.verbosity() > 1 {
        println!("Training dictionary from: {}", corpus.display());
    }

    let dictionary = FrequencyDictionary::load_from_corpus_file(corpus)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Trained {} words from {} tokens",
            dictionary.word_count(),
            dictionary.total_tokens()
        );
    }

    Ok(SpellCorrector::new(dictionary))
}

/// Correct the given words in one shot.
fn correct_words(args: CorrectArgs, cli_args: &OrthosArgs) -> Result<()> {
    let start = Instant::now();
    let corrector = load_corrector(&args.corpus, cli_args)?;

    let corrections: Vec<_> = args
        .words
        .iter()
        .map(|word| corrector.correction(word))
        .collect();

    let results = CorrectionResults {
        dictionary_words: corrector.dictionary().word_count(),
        duration_ms: start.elapsed().as_millis() as u64,
        corrections,
    };

    if cli_args.output_format == OutputFormat::Human {
        for correction in &results.corrections {
            println!("{}", format_correction(correction));
        }
        Ok(())
    } else {
        output_result("Correction complete", &results, cli_args)
    }
}

/// Interactively correct words read from stdin until `#` or EOF.
fn run_repl(args: ReplArgs, cli_args: &OrthosArgs) -> Result<()> {
    let corrector = load_corrector(&args.corpus, cli_args)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if cli_args.verbosity() > 0 {
        println!("Enter words to correct (# to exit)");
    }

    loop {
        if cli_args.verbosity() > 0 {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut done = false;
        for word in line.split_whitespace() {
            if word == "#" {
                done = true;
                break;
            }

            let correction = corrector.correction(word);
            match cli_args.output_format {
                OutputFormat::Human => println!("{}", format_correction(&correction)),
                OutputFormat::Json => output_result("", &correction, cli_args)?,
            }
        }

        if done {
            break;
        }
    }

    Ok(())
}

/// Show statistics for a trained corpus.
fn show_stats(args: StatsArgs, cli_args: &OrthosArgs) -> Result<()> {
    let corrector = load_corrector(&args.corpus, cli_args)?;
    let dictionary = corrector.dictionary();

    let stats = CorpusStats {
        unique_words: dictionary.word_count(),
        total_tokens: dictionary.total_tokens(),
        top_words: dictionary.most_frequent(args.top),
    };

    if cli_args.output_format == OutputFormat::Human {
        println!("Unique words: {}", stats.unique_words);
        println!("Total tokens: {}", stats.total_tokens);
        if !stats.top_words.is_empty() {
            println!("Top words:");
            for (word, frequency) in &stats.top_words {
                println!("  {word}: {frequency}");
            }
        }
        Ok(())
    } else {
        output_result("Statistics", &stats, cli_args)
    }
}
