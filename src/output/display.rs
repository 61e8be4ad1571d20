//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, pattern_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult, Suggestion};
use crate::core::Session;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            pattern_to_emoji(&step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    ratio.log2(),
                    ratio
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the rows given, the live pool and the suggested guess
pub fn print_suggestion(session: &Session, suggestion: &Suggestion) {
    for row in session.rows() {
        println!("  {} {}", colored_row(row), pattern_to_emoji(&row.pattern()));
    }
    if !session.is_empty() {
        println!();
    }

    println!("Candidates remaining: {}", suggestion.remaining.to_string().bold());
    if !suggestion.candidates.is_empty() {
        let list: Vec<_> = suggestion
            .candidates
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("  {}", list.join(", ").bright_black());
    }
    println!(
        "Next guess: {}",
        suggestion.guess.text().to_uppercase().bright_yellow().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    let rule = "═".repeat(60);
    println!("\n{}", rule.cyan());
    println!(" {} ", "BENCHMARK".bright_cyan().bold());
    println!("{}", rule.cyan());

    let solved_pct = if result.total_words == 0 {
        0.0
    } else {
        result.solved as f64 / result.total_words as f64 * 100.0
    };
    println!(
        "\n  Solved   {}/{} ({solved_pct:.1}%)",
        result.solved, result.total_words
    );
    println!(
        "  Mean     {} guesses (best {}, worst {})",
        format!("{:.3}", result.average_guesses).bright_yellow().bold(),
        result.min_guesses.to_string().green(),
        result.max_guesses.to_string().yellow()
    );
    println!(
        "  Elapsed  {:.2}s, {:.1} words/s",
        result.duration.as_secs_f64(),
        result.words_per_second
    );

    if result.total_words > 0 {
        println!("\n  {}", "Guesses".bright_cyan().bold());
        for guesses in 1..=max_attempts {
            let count = result.distribution.get(&guesses).copied().unwrap_or(0);
            let pct = count as f64 / result.total_words as f64 * 100.0;
            println!(
                "  {guesses:>2} {} {count:>5} {pct:5.1}%",
                create_progress_bar(pct, 100.0, 40).green()
            );
        }
        let failed = result.failures.len();
        if failed > 0 {
            let pct = failed as f64 / result.total_words as f64 * 100.0;
            println!(
                "   X {} {failed:>5} {pct:5.1}%",
                create_progress_bar(pct, 100.0, 40).red()
            );
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n  {} {}",
            "Not solved:".red().bold(),
            result.failures.join(", ").to_uppercase()
        );
    }
}
