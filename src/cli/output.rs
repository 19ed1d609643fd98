//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Correction;

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub corrections: Vec<Correction>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub unique_words: usize,
    pub total_tokens: u64,
    pub top_words: Vec<(String, u32)>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human(message: &str, args: &OrthosArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &OrthosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render a single correction as a human-readable line.
pub fn format_correction(correction: &Correction) -> String {
    if correction.changed {
        format!(
            "{} -> {} (frequency {})",
            correction.input, correction.output, correction.frequency
        )
    } else if correction.frequency > 0 {
        format!("{} (known, frequency {})", correction.input, correction.frequency)
    } else {
        format!("{} (no suggestion)", correction.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(input: &str, output: &str, frequency: u32) -> Correction {
        Correction {
            input: input.to_string(),
            output: output.to_string(),
            frequency,
            changed: input != output,
        }
    }

    #[test]
    fn test_format_changed_correction() {
        let line = format_correction(&correction("speling", "spelling", 12));
        assert_eq!(line, "speling -> spelling (frequency 12)");
    }

    #[test]
    fn test_format_known_word() {
        let line = format_correction(&correction("spelling", "spelling", 12));
        assert_eq!(line, "spelling (known, frequency 12)");
    }

    #[test]
    fn test_format_unknown_word() {
        let line = format_correction(&correction("zzzz", "zzzz", 0));
        assert_eq!(line, "zzzz (no suggestion)");
    }

    #[test]
    fn test_correction_results_serialize() {
        let results = CorrectionResults {
            corrections: vec![correction("helo", "hello", 3)],
            dictionary_words: 42,
            duration_ms: 1,
        };

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"output\":\"hello\""));
        assert!(json.contains("\"dictionary_words\":42"));
    }
}
