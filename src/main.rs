use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use connect_search::ai::{Agent, MinimaxAgent, RandomAgent, SearchResult};
use connect_search::arena::play_match;
use connect_search::config::AppConfig;
use connect_search::game::{Board, Side};

/// Minimax move search for connect-four style games.
#[derive(Parser)]
#[command(name = "connect-search", about = "Minimax move search for gravity connection games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "connect-search.toml")]
    config: PathBuf,

    /// Override the engine's search depth (plies)
    #[arg(long, global = true)]
    depth: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the engine against an opponent and report the tally
    Play {
        /// Number of games (overrides arena.games)
        #[arg(long)]
        games: Option<usize>,

        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,

        /// Depth of a minimax opponent (overrides arena.opponent_depth)
        #[arg(long)]
        opponent_depth: Option<u32>,

        /// Seed for a random opponent (overrides arena.seed)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Choose a move for a board read from a text file (top row first)
    Suggest {
        board: PathBuf,

        /// Side to move: A or B
        #[arg(long, default_value = "A")]
        mover: Side,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    Random,
    Minimax,
}

#[derive(serde::Serialize)]
struct SuggestReport {
    mover: Side,
    outcome: String,
    #[serde(flatten)]
    result: SearchResult,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Command::DefaultConfig = cli.command {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }

    match cli.command {
        Command::Play {
            games,
            opponent,
            opponent_depth,
            seed,
        } => {
            if let Some(games) = games {
                config.arena.games = games;
            }
            if let Some(depth) = opponent_depth {
                config.arena.opponent_depth = depth;
            }
            if seed.is_some() {
                config.arena.seed = seed;
            }
            config.validate().context("invalid configuration")?;
            run_play(&config, opponent)
        }
        Command::Suggest { board, mover, json } => {
            config.validate().context("invalid configuration")?;
            run_suggest(&config, &board, mover, json)
        }
        Command::DefaultConfig => Ok(()),
    }
}

fn engine_agent(config: &AppConfig, depth: u32) -> MinimaxAgent {
    MinimaxAgent::with_weights(depth, config.heuristic.clone()).with_pruning(config.search.pruning)
}

fn run_play(config: &AppConfig, opponent: Opponent) -> Result<()> {
    let board = config.board.build()?;
    let mut engine = engine_agent(config, config.search.depth);
    let mut opponent: Box<dyn Agent> = match opponent {
        Opponent::Random => Box::new(match config.arena.seed {
            Some(seed) => RandomAgent::seeded(seed),
            None => RandomAgent::new(),
        }),
        Opponent::Minimax => Box::new(engine_agent(config, config.arena.opponent_depth)),
    };

    info!(
        "playing {} games on {}x{} (connect {}), depth {} vs {}",
        config.arena.games,
        board.width(),
        board.height(),
        board.connect_length(),
        config.search.depth,
        opponent.name()
    );

    let summary = play_match(&mut engine, opponent.as_mut(), config.arena.games, &board)?;

    println!(
        "games: {}  wins: {}  losses: {}  draws: {}  win rate: {:.0}%  avg length: {:.1}",
        summary.games,
        summary.wins,
        summary.losses,
        summary.draws,
        summary.win_rate() * 100.0,
        summary.average_length()
    );
    Ok(())
}

fn run_suggest(config: &AppConfig, path: &Path, mover: Side, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading board from {}", path.display()))?;
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.chars().all(|c| c.is_ascii_digit()))
        .collect();
    let board = Board::from_rows(&rows, config.board.connect_length)
        .with_context(|| format!("parsing board from {}", path.display()))?;

    let outcome = board.classify(mover);
    let agent = engine_agent(config, config.search.depth);
    let result = agent.search(&board, mover);

    if json {
        let report = SuggestReport {
            mover,
            outcome: format!("{outcome:?}"),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}");
    if outcome.is_terminal() {
        println!("position is already decided: {outcome:?}");
        return Ok(());
    }
    match result.column {
        Some(col) => println!(
            "{} plays column {} (score {}, {} nodes, {} cutoffs)",
            mover.name(),
            col,
            result.score,
            result.stats.nodes,
            result.stats.cutoffs
        ),
        None => println!("no move available"),
    }
    Ok(())
}
