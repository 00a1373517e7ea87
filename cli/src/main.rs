use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use sweeper_core as game;

mod command;
mod logger;
mod render;

use command::Command;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    fn config(self) -> game::GameConfig {
        match self {
            Self::Beginner => game::GameConfig::beginner(),
            Self::Intermediate => game::GameConfig::intermediate(),
            Self::Expert => game::GameConfig::expert(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(long, default_value_t = 9)]
    rows: game::Coord,

    /// Number of columns
    #[arg(long, default_value_t = 9)]
    cols: game::Coord,

    /// Number of mines
    #[arg(long, default_value_t = 10)]
    mines: game::CellCount,

    /// Classic board, overrides rows, cols and mines
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        logger::init_with_level(log_level).map_err(|err| anyhow!("Error initializing logger: {err}"))?;
    }

    let (rows, cols, mines) = match args.preset {
        Some(preset) => {
            let config = preset.config();
            (config.size.rows, config.size.cols, config.mines)
        }
        None => (args.rows, args.cols, args.mines),
    };
    let mut board = game::new_board(rows, cols, mines, args.seed)?;
    log::debug!("seed: {:?}", board.seed());

    println!("Minesweeper {rows}x{cols} with {mines} mines. Type 'h' for help.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", render::render(&board));

        match game::game_status(&board) {
            game::GameStatus::Playing => {}
            game::GameStatus::Won => {
                println!("Board cleared, you win!");
                break;
            }
            game::GameStatus::Lost => {
                println!("Boom! You hit a mine.");
                break;
            }
        }

        print!("[{} left] > ", board.mines_left());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match Command::parse(&line?) {
            Ok(Command::Click(row, col, button)) => {
                if let Err(err) = game::click(&mut board, row, col, button) {
                    println!("{err}");
                }
            }
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Err(err) => println!("{err}"),
        }
    }

    if let Some(seed) = board.seed() {
        println!("Seed: {seed}");
    }
    Ok(())
}
