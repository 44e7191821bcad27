//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use kp_config::OutputFormat;
use kp_rake::{Keyphrase, RakeAnalysis};
use serde::Serialize;

/// Prints keyphrases as `score<TAB>phrase` lines or as a JSON array.
///
/// An empty list prints nothing in text mode and `[]` in JSON mode.
pub fn output_keyphrases(keyphrases: &[Keyphrase], format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => print_json(keyphrases),
        OutputFormat::Text => {
            for keyphrase in keyphrases {
                println!("{}", format_line(keyphrase));
            }
            ExitCode::SUCCESS
        }
    }
}

/// Prints every intermediate stage of an analysis.
///
/// JSON mode emits the full report as one object; text mode renders tables.
pub fn output_analysis(
    analysis: &RakeAnalysis,
    keyphrases: &[Keyphrase],
    format: OutputFormat,
) -> ExitCode {
    if matches!(format, OutputFormat::Json) {
        let mut report = analysis.report();
        report.keyphrases = keyphrases;
        return print_json(&report);
    }

    println!("Candidates ({}):", analysis.candidates.len());
    for candidate in &analysis.candidates {
        println!("  {candidate}");
    }
    println!();

    println!("Word scores:");
    if analysis.word_scores.is_empty() {
        println!("  (none)");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Word", "Freq", "Degree", "Score"]);
        for (word, stats) in analysis.word_scores.sorted() {
            table.add_row(vec![
                Cell::new(word),
                Cell::new(stats.frequency.to_string()),
                Cell::new(stats.degree.to_string()),
                Cell::new(format!("{:.2}", stats.score())),
            ]);
        }
        println!("{table}");
    }
    println!();

    println!("Ranked phrases:");
    println!("{}", phrase_table(&analysis.ranked));
    println!();

    println!("Keyphrases:");
    println!("{}", phrase_table(keyphrases));

    ExitCode::SUCCESS
}

/// Builds a two-column phrase/score table.
fn phrase_table(keyphrases: &[Keyphrase]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Phrase", "Score"]);
    for keyphrase in keyphrases {
        table.add_row(vec![
            Cell::new(&keyphrase.phrase),
            Cell::new(format!("{:.2}", keyphrase.score)),
        ]);
    }
    table
}

/// Serializes a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats one keyphrase as a `score<TAB>phrase` line.
pub fn format_line(keyphrase: &Keyphrase) -> String {
    format!("{}\t{}", format_score(keyphrase.score), keyphrase.phrase)
}

/// Formats a score with the shortest exact decimal, keeping one fractional
/// digit for whole numbers (`4.0`, `8.666666666666666`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}
