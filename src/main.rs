//! Wordle Game - CLI
//!
//! Play in the TUI (default) or in text mode, or score a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_simple, score_guess},
    core::{DEFAULT_WORD_LENGTH, MatchRule, Word},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, GameSession},
    interactive::{App, DictionarySource, Loader, run_tui},
    output::{print_score_result, print_statistics},
    wordlists::{
        AcceptAll, Corpus, Lexicon, WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Color repeated letters by count instead of plain membership
    #[arg(long, global = true)]
    exact: bool,

    /// Target word list file (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word list used to accept guesses (default: the target list)
    #[arg(short = 'd', long, global = true, conflicts_with = "no_dictionary")]
    dictionary: Option<PathBuf>,

    /// Accept any word as a guess
    #[arg(long, global = true)]
    no_dictionary: bool,

    /// Seed for reproducible target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode, one guess per line
    Simple,

    /// Print the feedback for one guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    init_logging(cli.verbose, cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = game_config(&cli)?;
    debug!(?config, "configuration");

    match command {
        Commands::Play => run_play_command(&cli, config),
        Commands::Simple => run_simple_command(&cli, config),
        Commands::Score { guess, target } => run_score_command(&guess, &target, &config),
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` overrides the level. The TUI owns the terminal, so without a
/// log file it runs with no subscriber at all.
fn init_logging(verbose: bool, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .without_time()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
    Ok(())
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let config = GameConfig {
        word_length: cli.length,
        max_attempts: cli.attempts,
        rule: if cli.exact {
            MatchRule::Exact
        } else {
            MatchRule::Membership
        },
    };
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

/// Load the target list from `--wordlist` or the built-in list
fn load_corpus(cli: &Cli, length: usize) -> Result<Corpus> {
    let words = match &cli.wordlist {
        Some(path) => load_from_file(path, length)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS, length),
    };
    if words.is_empty() {
        bail!("no {length}-letter words available; pass --wordlist with words of that length");
    }
    info!(count = words.len(), length, "word list loaded");

    Ok(match cli.seed {
        Some(seed) => Corpus::seeded(words, length, seed),
        None => Corpus::new(words, length),
    })
}

fn dictionary_source(cli: &Cli, corpus: &Corpus, length: usize) -> DictionarySource {
    if cli.no_dictionary {
        DictionarySource::Disabled
    } else if let Some(path) = &cli.dictionary {
        DictionarySource::File {
            path: path.clone(),
            length,
        }
    } else {
        DictionarySource::Words(corpus.words().to_vec())
    }
}

fn run_play_command(cli: &Cli, config: GameConfig) -> Result<()> {
    let corpus = load_corpus(cli, config.word_length)?;
    let dictionary = dictionary_source(cli, &corpus, config.word_length);
    let accept_all = matches!(dictionary, DictionarySource::Disabled);

    let session = GameSession::new(config)?;
    let loader = Loader::spawn(corpus, dictionary);
    let app = App::new(session, loader, accept_all);

    let stats = run_tui(app)?;
    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(cli: &Cli, config: GameConfig) -> Result<()> {
    let mut corpus = load_corpus(cli, config.word_length)?;
    let session = GameSession::new(config)?;

    if cli.no_dictionary {
        run_simple(session, &mut corpus, &AcceptAll)?;
        return Ok(());
    }

    let lexicon = match &cli.dictionary {
        Some(path) => {
            let words: Vec<Word> = load_from_file(path, config.word_length)
                .with_context(|| format!("failed to read dictionary {}", path.display()))?;
            Lexicon::from_words(&words)
        }
        None => Lexicon::from_words(corpus.words()),
    };
    run_simple(session, &mut corpus, &lexicon)?;
    Ok(())
}

fn run_score_command(guess: &str, target: &str, config: &GameConfig) -> Result<()> {
    let result = score_guess(guess, target, config)
        .with_context(|| format!("cannot score '{guess}' against '{target}'"))?;
    print_score_result(&result);
    Ok(())
}
