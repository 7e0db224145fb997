// simish/src/ui/match_table.rs
//! Renders match responses, score breakdowns and room evaluations.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::Write;

use simish_core::{Candidate, CandidateScore, MatchResponse, RoomEvaluation};

/// Prints one response in the `Input / Matched / Response / Score` layout.
pub fn print_response<W: Write>(writer: &mut W, response: &MatchResponse, supports_color: bool) -> Result<()> {
    let score = format!("{}", response.score);
    if supports_color {
        writeln!(writer, "{}\t\t{}", "Input:".bold(), response.input)?;
        writeln!(writer, "{}\t{}", "Matched:".bold(), response.matched)?;
        writeln!(writer, "{}\t{}", "Response:".bold(), response.response.green())?;
        writeln!(writer, "{}\t\t{}", "Score:".bold(), score.cyan())?;
    } else {
        writeln!(writer, "Input:\t\t{}", response.input)?;
        writeln!(writer, "Matched:\t{}", response.matched)?;
        writeln!(writer, "Response:\t{}", response.response)?;
        writeln!(writer, "Score:\t\t{}", score)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Tabulates the best `top` scored candidates.
pub fn build_breakdown_table(ranked: &[(usize, CandidateScore)], candidates: &[Candidate], top: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Candidate", "Words", "Actions", "Order", "Lexical", "Confidence", "Score"]);

    for (rank, (index, details)) in ranked.iter().take(top).enumerate() {
        let candidate = &candidates[*index];
        table.add_row(vec![
            (rank + 1).to_string(),
            candidate.input.clone(),
            format!("{:.4}", details.lexical.word_match),
            format!("{:.4}", details.lexical.action_match),
            format!("{:.4}", details.lexical.order_distance),
            format!("{:.4}", details.lexical.score),
            format!("{:.4}", details.confidence),
            format!("{:.4}", details.score),
        ]);
    }
    table
}

/// Tabulates a leave-one-out evaluation and appends its score summary.
pub fn print_evaluation<W: Write>(writer: &mut W, evaluation: &RoomEvaluation) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Input", "Matched", "Response", "Score"]);

    for entry in &evaluation.entries {
        table.add_row(vec![
            entry.input.clone(),
            entry.matched.clone(),
            entry.response.clone(),
            format!("{:.6}", entry.score),
        ]);
    }

    writeln!(writer, "{table}")?;
    writeln!(
        writer,
        "Pairs: {}  Mean: {:.6}  Std dev: {:.6}  Min: {:.6}  Max: {:.6}",
        evaluation.entries.len(),
        evaluation.stats.mean,
        evaluation.stats.std_dev,
        evaluation.stats.min,
        evaluation.stats.max
    )?;
    Ok(())
}
