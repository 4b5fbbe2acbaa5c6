// Sokoban cave generator and terminal player.
// Controls: arrow keys (player 1) and WASD (player 2 in dual mode, player 1 otherwise).
// N/P next/previous level, Backspace reset, Q to quit.

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokocave::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use sokocave::core::{Board, GameUpdate, TileGrid};
use sokocave::generator::{GeneratedLevel, GeneratorConfig, generate_level};
use sokocave::levels::{LevelSession, get_json_data, parse_plain, read_file_plain, read_levels_file};
use sokocave::models::{GameRenderState, PlayMode, PlayerSlot};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const BUNDLED_BASES: &str = include_str!("../assets/bases.txt");
const PLAY_LOG: &str = "exports/play.log";

/// Carves Sokoban levels out of coarse cave outlines
#[derive(Parser, Debug)]
#[command(name = "sokocave")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate levels and print them in level text format
    Generate {
        /// File of base outlines, the bundled set when absent
        #[arg(long)]
        base: Option<PathBuf>,

        /// Number of levels to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Generator settings as JSON
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON instead of level text
        #[arg(long)]
        json: bool,
    },
    /// Play generated levels, or a level pack, in the terminal
    Play {
        /// Level pack to play instead of generated levels
        #[arg(long, conflicts_with = "base")]
        levels: Option<PathBuf>,

        /// File of base outlines, the bundled set when absent
        #[arg(long)]
        base: Option<PathBuf>,

        /// Generator settings as JSON
        #[arg(long)]
        config: Option<PathBuf>,

        /// Second player on the mirrored twin of each level
        #[arg(long)]
        dual: bool,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Generate { base, count, seed, config, json } => {
            init_tracing(None)?;
            let mut rng = make_rng(seed);
            let config = load_config(config.as_deref())?;
            let bases = load_bases(base.as_deref())?;
            run_generate(&bases, &config, count, json, &mut rng)
        }
        Command::Play { levels, base, config, dual, seed } => {
            init_tracing(Some(Path::new(PLAY_LOG)))?;
            let mut rng = make_rng(seed);
            let session = match levels {
                Some(path) => {
                    let boards = read_levels_file(&path, &mut rng)?
                        .ok_or_else(|| format!("level file '{}' not found", path.display()))?;
                    LevelSession::loaded(boards)
                        .ok_or_else(|| format!("no playable levels in '{}'", path.display()))?
                }
                None => {
                    let config = load_config(config.as_deref())?;
                    LevelSession::generated(load_bases(base.as_deref())?, config, &mut rng)?
                }
            };
            let mode = if dual { PlayMode::Dual } else { PlayMode::Solo };

            let mut terminal = setup_terminal()?;
            let result = run_interactive(session, mode, &mut terminal, &mut rng);
            cleanup_terminal()?;
            result
        }
    }
}

/// Logs to stderr, or to `log_file` when the terminal is taken by the game.
fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    match log_file {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = std::fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?;
            builder.with_ansi(false).with_writer(std::sync::Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(GeneratorConfig::from_json_file(path)?),
        None => Ok(GeneratorConfig::default()),
    }
}

fn load_bases(path: Option<&Path>) -> Result<Vec<TileGrid>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(parse_plain(BUNDLED_BASES));
    };
    let bases = read_file_plain(path)?
        .ok_or_else(|| format!("base file '{}' not found", path.display()))?;
    info!(count = bases.len(), path = %path.display(), "bases loaded");
    Ok(bases)
}

fn run_generate(
    bases: &[TileGrid],
    config: &GeneratorConfig,
    count: usize,
    json: bool,
    rng: &mut StdRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut levels: Vec<GeneratedLevel> = Vec::with_capacity(count);
    let mut next_base = 0;
    for _ in 0..count {
        let level = generate_level(bases, next_base, config, rng)?;
        next_base = (level.base_index + 1) % bases.len();
        levels.push(level);
    }

    if json {
        println!("{}", get_json_data(&levels)?);
    } else {
        for level in &levels {
            println!("{}\n", level.rows.join("\n"));
        }
    }
    Ok(())
}

/// The mirrored twin of the current level in dual mode.
fn make_twin(session: &LevelSession, mode: PlayMode, rng: &mut StdRng) -> Option<Board> {
    match mode {
        PlayMode::Solo => None,
        PlayMode::Dual => Some(session.current().mirror(rng)),
    }
}

fn run_interactive(
    mut session: LevelSession,
    mode: PlayMode,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    rng: &mut StdRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut twin = make_twin(&session, mode, rng);
    let mut state = GameRenderState {
        mode,
        level_index: session.index(),
        level_count: session.len(),
        winner: None,
        error: None,
        last_change: None,
    };

    loop {
        let boards: Vec<&Board> = std::iter::once(session.current()).chain(twin.as_ref()).collect();
        render_game(terminal, &boards, &state)?;

        let mut level_changed = false;
        match handle_input(mode)? {
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
            ConsoleInput::UserAction(slot, action) => {
                if state.winner.is_some() {
                    continue;
                }
                let board = match (slot, twin.as_mut()) {
                    (PlayerSlot::Second, Some(twin)) => twin,
                    _ => session.current_mut(),
                };
                match board.apply(action) {
                    GameUpdate::NextState(change) => {
                        state.last_change = Some(change);
                        state.error = None;
                        if board.is_finished() {
                            info!(level = session.index(), player = ?slot, "level solved");
                            state.winner = Some(slot);
                        }
                    }
                    GameUpdate::Blocked(_) => {}
                }
            }
            ConsoleInput::Reset => {
                session.current_mut().reset();
                if let Some(twin) = twin.as_mut() {
                    twin.reset();
                }
                state.winner = None;
                state.last_change = None;
            }
            ConsoleInput::Next => match session.advance(rng) {
                Ok(moved) => level_changed = moved,
                Err(err) => {
                    warn!(error = %err, "could not generate the next level");
                    state.error = Some(err.to_string());
                }
            },
            ConsoleInput::Previous => level_changed = session.retreat(),
        }

        if level_changed {
            session.current_mut().reset();
            twin = make_twin(&session, mode, rng);
            state.level_index = session.index();
            state.level_count = session.len();
            state.winner = None;
            state.error = None;
            state.last_change = None;
        }
    }

    Ok(())
}
