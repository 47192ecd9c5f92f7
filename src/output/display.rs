//! Display functions for command results

use super::formatters::{create_progress_bar, mark_last_letter};
use crate::commands::{AnalysisResult, BenchmarkResult, DuelResult};
use crate::game::{Diagnostic, Side};
use colored::Colorize;
use std::io::{self, Write};

/// Print the chain of a duel
pub fn print_duel_result(result: &DuelResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Duel: {} (player side) vs {} (bot)",
        result.challenger.bright_yellow().bold(),
        result.bot.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let side = match step.side {
            Side::Player => result.challenger.green(),
            Side::Bot => result.bot.magenta(),
        };
        println!(
            "{:>4}. {:<10} {:<28} {}",
            (i + 1).to_string().bright_black(),
            side,
            mark_last_letter(&step.word),
            format!("({} options)", step.options).bright_black()
        );
    }

    println!();
    match result.winner {
        Some(Side::Player) => println!(
            "{}",
            format!("{} wins after {} words", result.challenger, result.len())
                .green()
                .bold()
        ),
        Some(Side::Bot) => println!(
            "{}",
            format!("{} wins after {} words", result.bot, result.len())
                .magenta()
                .bold()
        ),
        None => println!(
            "{}",
            format!("Turn limit reached after {} words", result.len())
                .yellow()
                .bold()
        ),
    }
    if result.violations > 0 {
        println!(
            "{}",
            format!("{} strategy answers were replaced", result.violations).yellow()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.display.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Normalized:   {}", result.normalized);
    println!(
        "   Letters:      starts with {}, ends with {}",
        result.first.to_ascii_uppercase().to_string().bright_white().bold(),
        result.last.to_ascii_uppercase().to_string().bright_white().bold()
    );
    println!("   Predecessors: {}", result.predecessors);
    if result.dead_end {
        println!("   Replies:      {}", "0 (dead end)".green().bold());
    } else {
        println!("   Replies:      {}", result.replies.to_string().bright_yellow());
    }

    let max = result
        .letter_profile
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    println!(
        "\n{} ({} words)",
        "Starting letters:".bright_cyan().bold(),
        result.total_words
    );
    for &(letter, count) in &result.letter_profile {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        let label = letter.to_ascii_uppercase();
        if letter == result.last {
            println!("   {} {} {count:3}", label.to_string().bright_yellow().bold(), bar.yellow());
        } else {
            println!("   {label} {} {count:3}", bar.green());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   {:<17} {} ({:.1}%)",
        format!("{} wins:", result.bot),
        result.bot_wins.to_string().bright_yellow().bold(),
        result.bot_win_rate()
    );
    println!(
        "   {:<17} {} ({:.1}%)",
        format!("{} wins:", result.challenger),
        result.challenger_wins.to_string().bright_yellow().bold(),
        result.challenger_win_rate()
    );
    if result.unfinished > 0 {
        println!("   Turn limit:       {}", result.unfinished);
    }
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            result.failed.to_string().red().bold()
        );
    }

    println!("\n{}", "Chains:".bright_cyan().bold());
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length).bright_yellow().bold()
    );
    println!("   Shortest:         {}", result.min_length.to_string().green());
    println!("   Longest:          {}", result.max_length.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
    if result.violations > 0 {
        println!(
            "   Violations:       {}",
            result.violations.to_string().yellow()
        );
    }

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.iter().collect();
    lengths.sort_unstable();
    for (length, &count) in lengths {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Write engine diagnostics to `out`, one warning per line
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_diagnostics<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{} {}", "warning:".yellow().bold(), diagnostic.to_string().yellow())?;
    }
    Ok(())
}
