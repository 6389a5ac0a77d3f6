//! Rubik's Cube Net
//!
//! Turns the faces of a 3x3 cube drawn as an unfolded net. The cube is saved
//! after every command so successive invocations keep turning the same cube.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn, LevelFilter};
use thiserror::Error;

use cubenet::grid::{format_grid, format_js};
use cubenet::notation::{format_moves, parse_moves, NotationError};
use cubenet::{persistence, Cube, Engine, Face};

/// Turns the faces of a 3x3 cube drawn as an unfolded net.
#[derive(Parser)]
#[command(name = "cubenet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the saved cube.
    #[arg(long, default_value = ".")]
    state: PathBuf,

    /// How layer turns are computed.
    #[arg(long, value_enum, default_value_t = Engine::Lookup)]
    engine: Engine,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current net.
    Show,
    /// Turn a single face a quarter turn.
    Rotate {
        /// The face to turn.
        #[arg(value_enum, ignore_case = true)]
        face: Face,
        /// Turn counter-clockwise instead of clockwise.
        #[arg(long)]
        ccw: bool,
    },
    /// Apply a move sequence such as "F R' U2".
    Apply {
        /// Moves separated by whitespace.
        moves: String,
    },
    /// Restore the solved cube.
    Reset,
    /// Print the net as a JavaScript integer matrix for a client renderer.
    ExportJs,
}

/// Failures reported to the user.
#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid moves: {0}")]
    Moves(#[from] NotationError),
    #[error("{} does not hold a readable cube; run `cubenet reset` to replace it", .0.display())]
    Unreadable(PathBuf),
    #[error("Failed to save cube: {0}")]
    Save(#[from] std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Moves(_) | CliError::Unreadable(_) => ExitCode::from(2),
            CliError::Save(_) => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    }
}

/// Runs one command and returns what to print.
///
/// Only commands that change the cube write it back to `--state`.
fn run(cli: &Cli) -> Result<String, CliError> {
    let show = Command::Show;
    let command = cli.command.as_ref().unwrap_or(&show);

    let mut cube = match load_cube(&cli.state, cli.engine) {
        Err(CliError::Unreadable(path)) if matches!(command, Command::Reset) => {
            warn!("replacing unreadable {}", path.display());
            Cube::with_engine(cli.engine)
        }
        loaded => loaded?,
    };

    match command {
        Command::Show => return Ok(render(&cube)),
        Command::ExportJs => return Ok(format_js(cube.grid())),
        Command::Rotate { face, ccw } => {
            cube.rotate(*face, !ccw);
            info!("turned {face:?} {}", if *ccw { "counter-clockwise" } else { "clockwise" });
        }
        Command::Apply { moves } => {
            let moves = parse_moves(moves)?;
            cube.apply_all(&moves);
            info!("applied {}", format_moves(&moves));
        }
        Command::Reset => {
            cube.reset();
        }
    }

    persistence::save(&cli.state, cube.grid())?;
    Ok(render(&cube))
}

/// The net as text, followed by "solved" when every face is one color.
fn render(cube: &Cube) -> String {
    let mut output = format_grid(cube.grid());
    if cube.is_solved() {
        output.push_str("solved\n");
    }
    output
}

/// Resumes the saved cube, or starts a solved one if nothing is saved.
fn load_cube(state: &Path, engine: Engine) -> Result<Cube, CliError> {
    if let Some(grid) = persistence::load(state) {
        info!("resumed cube from {}", state.display());
        return Ok(Cube::from_grid(grid, engine));
    }
    let saved = persistence::saved_path(state);
    if saved.exists() {
        return Err(CliError::Unreadable(saved));
    }
    Ok(Cube::with_engine(engine))
}
