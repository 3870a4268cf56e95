//! Information gain word solver - CLI
//!
//! Watch a greedy entropy solver find a hidden word, in a TUI or from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use infogain_wordle::{
    commands::{analyze_word, filter_words, run_benchmark, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_filter_result, print_solve_result},
    solver::SolveConfig,
    wordlists::{
        CORPUS,
        loader::{make_word_list, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "infogain_wordle",
    about = "Word puzzle solver that picks every guess by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a newline separated word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length
    #[arg(short, long, global = true, default_value = "5")]
    letters: usize,

    /// Guess budget per game
    #[arg(short, long, global = true, default_value = "5")]
    guesses: usize,

    /// Keep capitalised dictionary entries (proper nouns)
    #[arg(long, global = true)]
    proper_nouns: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI session (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with the pool after every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the information gain of a specific word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Filter the corpus by observed clues and suggest the next guess
    Filter {
        /// Observations as GUESS=CLUE, e.g. crane=__A_E (upper: exact, lower: present, _: absent)
        #[arg(required = true)]
        clues: Vec<String>,
    },

    /// Benchmark solver performance on random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the corpus based on the -w flag
fn load_corpus(wordlist: &str, letters: usize, proper_nouns: bool) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(CORPUS, letters, proper_nouns),
        path => make_word_list(path, letters, proper_nouns)
            .with_context(|| format!("Failed to read word list '{path}'"))?,
    };

    if words.is_empty() {
        bail!("Word list '{wordlist}' has no {letters}-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SolveConfig::new(cli.letters, cli.guesses);
    let corpus = load_corpus(&cli.wordlist, cli.letters, cli.proper_nouns)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, config),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &corpus, config),
        Commands::Analyze { word } => run_analyze_command(&word, &corpus, config),
        Commands::Filter { clues } => run_filter_command(&clues, &corpus, config),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &corpus, config);
            Ok(())
        }
    }
}

fn run_solve_command(word: &str, verbose: bool, corpus: &[Word], config: SolveConfig) -> Result<()> {
    let result = solve_word(word, corpus, config).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, corpus: &[Word], config: SolveConfig) -> Result<()> {
    let result = analyze_word(word, corpus, config.letters).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_filter_command(clues: &[String], corpus: &[Word], config: SolveConfig) -> Result<()> {
    let result = filter_words(corpus, config.letters, clues).map_err(|e| anyhow::anyhow!(e))?;
    print_filter_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>, corpus: &[Word], config: SolveConfig) {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random words (seed {seed})..."),
        None => println!("Running benchmark on {count} random words..."),
    }

    let result = run_benchmark(corpus, config, count, seed);
    print_benchmark_result(&result);
}

fn run_play_command(corpus: &[Word], config: SolveConfig) -> Result<()> {
    use infogain_wordle::interactive::{App, run_tui};

    let app = App::new(corpus, config);
    run_tui(app)
}
