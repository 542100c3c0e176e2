use anyhow::{anyhow, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{
    board::Player,
    config::SearchConfig,
    game::{Game, GameState},
    search::Searcher,
};

mod display;
use display::display;

#[derive(Parser)]
struct Args {
    /// RNG seed for the AI's tie breaks
    #[arg(long)]
    seed: Option<u64>,

    /// How many plies below the current position the AI looks
    #[arg(short, long, default_value_t = SearchConfig::default().depth_cutoff)]
    depth_cutoff: usize,

    /// Score of a win found directly below the root, reduced by one per ply
    #[arg(long, default_value_t = SearchConfig::default().win_score)]
    win_score: i32,

    /// Search every node instead of using alpha-beta pruning
    #[arg(long, default_value_t = false)]
    exhaustive: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let config = SearchConfig {
        depth_cutoff: args.depth_cutoff,
        win_score: args.win_score,
        pruning: !args.exhaustive,
        ..SearchConfig::default()
    };
    let mut searcher = Searcher::new(config, StdRng::seed_from_u64(seed))?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let ai_players = (
        ask_yes_no(&stdin, "Is Red (moves first) AI controlled? y/n: ")?,
        ask_yes_no(&stdin, "Is Yellow AI controlled? y/n: ")?,
    );

    let mut game = Game::new();

    // game loop
    loop {
        display(game.board())?;

        match game.state() {
            GameState::Playing => {
                let ai_turn = match game.to_move() {
                    Player::Red => ai_players.0,
                    Player::Yellow => ai_players.1,
                };

                let next_move = if ai_turn {
                    println!("{} is thinking...", game.to_move().name());
                    stdout().flush()?;

                    let column = game.suggest(&mut searcher)?;
                    println!("{} plays column {}", game.to_move().name(), column);
                    column

                // human player
                } else {
                    print!(
                        "{}, type a column number or \"end\" to end the game > ",
                        game.to_move().name()
                    );
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        break;
                    }

                    let input = input_str.trim();
                    if input.eq_ignore_ascii_case("end") {
                        break;
                    }
                    match input.parse::<usize>() {
                        Err(_) => {
                            println!("{} is not a number!", input);
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = game.play(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won(player) => {
                println!("{} wins!", player.name());
                break;
            }
            GameState::Draw => {
                println!("The board filled up.");
                break;
            }
        }
    }
    info!(moves = %game.history, "game over");
    println!("Thanks for playing Connect 4!");
    Ok(())
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed before an answer was given"));
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
