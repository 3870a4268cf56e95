//! Display functions for command results

use super::formatters::{clue_tiles, entropy_bar, word_preview};
use crate::commands::{AnalysisResult, BenchmarkResult, FilterResult, SolveResult};
use crate::core::Word;
use crate::solver::Outcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!(
        "Corpus:  {} words, {:.3} bits",
        result.corpus_size, result.initial_entropy
    );
    if !result.in_corpus {
        println!(
            "{}",
            "Warning: the solution is not in the corpus".yellow()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\nRound {}: {}  {}  {}",
            step.round,
            step.guess.text().to_uppercase(),
            clue_tiles(&step.clue),
            step.clue
        );

        if verbose {
            println!(
                "  Candidates:  {} → {}",
                step.pool_before, step.pool_after
            );
            println!("  Info gain:   {:.3} bits (expected)", step.information_gain);

            if step.pool_after > 0 {
                let actual = (step.pool_before as f64 / step.pool_after as f64).log2();
                println!("  Observed:    {actual:.3} bits");
            }
        }
    }

    println!();
    match &result.outcome {
        Outcome::Solved { guesses } => println!(
            "{}",
            format!("✅ Solved in {} guesses: {}", guesses.len(), guess_list(guesses))
                .green()
                .bold()
        ),
        Outcome::Exhausted { solution, guesses } => println!(
            "{}",
            format!(
                "❌ Out of guesses! The solution was {}. Guesses made: {}",
                solution.text().to_uppercase(),
                guess_list(guesses)
            )
            .red()
            .bold()
        ),
    }
}

fn guess_list(guesses: &[Word]) -> String {
    guesses
        .iter()
        .map(|g| g.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "INFORMATION GAIN:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.information_gain, result.pool_entropy, 30);

    println!(
        "\n📊 Against {} possible solutions ({:.3} bits):",
        result.pool_size, result.pool_entropy
    );
    println!(
        "   Gain:        [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.information_gain).bright_yellow()
    );
    println!("   Patterns:    {}", result.bucket_count);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.largest_bucket);
}

/// Print the result of filtering by clues
pub fn print_filter_result(result: &FilterResult) {
    println!("\n{}", "─".repeat(60).cyan());
    for (guess, clue) in &result.history {
        println!(
            "{}  {}",
            guess.text().to_uppercase(),
            clue_tiles(clue)
        );
    }
    println!("{}", "─".repeat(60).cyan());

    if result.remaining.is_empty() {
        println!(
            "{}",
            "❌ No words are consistent with these clues".red().bold()
        );
        return;
    }

    println!(
        "\n{} candidates remain ({:.3} bits)",
        result.remaining.len().to_string().bright_yellow().bold(),
        result.pool_entropy.unwrap_or(0.0)
    );
    println!(
        "   {}",
        word_preview(result.remaining.iter().map(Word::text), 30)
    );

    if let Some((word, gain)) = &result.suggestion {
        println!(
            "\n📊 Suggested guess: {} ({gain:.3} bits)",
            word.text().to_uppercase().bright_green().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!(
        "   Exhausted:        {}",
        result.exhausted.len().to_string().yellow()
    );
    if !result.errors.is_empty() {
        println!(
            "   Errors:           {}",
            result.errors.len().to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses);
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guesses}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.exhausted.is_empty() {
        println!("\n⚠️  {}", "Not solved within budget:".yellow().bold());
        println!(
            "   {}",
            word_preview(result.exhausted.iter().map(String::as_str), 20)
        );
    }

    for (target, error) in &result.errors {
        println!("   {} {}", target.to_uppercase().red(), error);
    }
}
