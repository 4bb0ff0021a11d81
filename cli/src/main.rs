mod config;
mod display;

use clap::Parser;
use std::io::Write;
use tictactoe_agent::{Game, Mark, Position, SessionRng, Snapshot, log, logger, parse_snapshot};

use config::{CliConfig, FirstMove};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Board size (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the agent's tie-breaking, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first: human, agent or random
    #[arg(long)]
    first: Option<String>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Persist the resolved settings back to the config file
    #[arg(long)]
    save_config: bool,

    /// One-shot mode: recommend a move for this board text, e.g. "XX..O...."
    #[arg(long)]
    board: Option<String>,

    /// Acting mark for --board mode (X or O)
    #[arg(long)]
    player: Option<char>,

    /// Watch the agent play both sides to completion
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let stored = config::load(args.config.as_deref())?;
    let resolved = CliConfig {
        board_size: args.size.unwrap_or(stored.board_size),
        agent_mark: stored.agent_mark,
        first_move: args.first.clone().unwrap_or_else(|| stored.first_move.clone()),
        seed: args.seed.or(stored.seed),
    };
    resolved.validate()?;

    if args.save_config {
        config::save(&resolved, args.config.as_deref())?;
        log!("Saved settings to config file");
    }

    let mut rng = match resolved.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    if let Some(board_text) = &args.board {
        return suggest(board_text, args.player, &mut rng);
    }

    let mut game = Game::with_size(resolved.board_size)?;

    if args.watch {
        watch(&mut game, &mut rng);
        return Ok(());
    }

    let first = config::parse_first_move(&resolved.first_move)?;
    play(&mut game, resolved.agent_mark(), first, &mut rng)
}

/// Recommends one move for a caller-supplied board and prints the outcome.
/// The board size is inferred from the snapshot length.
fn suggest(
    board_text: &str,
    player: Option<char>,
    rng: &mut SessionRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = parse_snapshot(board_text)?;
    let mark = match player {
        Some(symbol) => Mark::from_char(symbol)?,
        None => Mark::X,
    };
    if mark == Mark::Empty {
        return Err("Acting player must be X or O".into());
    }

    let mut game = Game::with_size(snapshot_size(&snapshot)?)?;
    match game.make_move(&snapshot, mark, rng)? {
        Some(chosen) => {
            print!("{}", display::render(game.board()));
            log!(
                "Recommended move for {}: row {}, col {}",
                chosen.mark,
                chosen.position.row,
                chosen.position.col
            );
        }
        None => log!("No move available for {}", mark),
    }
    announce(&game);
    Ok(())
}

fn snapshot_size(snapshot: &Snapshot) -> Result<usize, String> {
    let cell_count = match snapshot {
        Snapshot::Flat(values) => values.len(),
        Snapshot::Rows(rows) => rows.iter().map(Vec::len).sum(),
    };
    for size in 2..=cell_count {
        if size * size == cell_count {
            return Ok(size);
        }
    }
    Err(format!(
        "Board text has {} cells, which is not a square board of size 2 or more",
        cell_count
    ))
}

fn play(
    game: &mut Game,
    agent_mark: Mark,
    first: FirstMove,
    rng: &mut SessionRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let human_mark = agent_mark
        .opponent()
        .ok_or("Agent mark must be X or O")?;
    let mut agent_turn = match first {
        FirstMove::Agent => true,
        FirstMove::Human => false,
        FirstMove::Random => rng.random_bool(),
    };

    log!("You play {}, the agent plays {}", human_mark, agent_mark);

    while !game.is_finished() {
        print!("{}", display::render(game.board()));

        if agent_turn {
            match game.play_move(agent_mark, rng) {
                Some(chosen) => log!(
                    "Agent plays row {}, col {}",
                    chosen.position.row,
                    chosen.position.col
                ),
                None => break,
            }
        } else {
            let position = read_position(game.size())?;
            if let Err(reason) = game.place(position, human_mark) {
                println!("{}", reason);
                continue;
            }
        }

        agent_turn = !agent_turn;
    }

    print!("{}", display::render(game.board()));
    announce(game);
    Ok(())
}

fn watch(game: &mut Game, rng: &mut SessionRng) {
    let [first_mark, second_mark] = game.players();
    let mut current = first_mark;

    while let Some(chosen) = game.play_move(current, rng) {
        log!(
            "{} plays row {}, col {}",
            chosen.mark,
            chosen.position.row,
            chosen.position.col
        );
        print!("{}", display::render(game.board()));
        current = if current == first_mark {
            second_mark
        } else {
            first_mark
        };
    }

    announce(game);
}

fn read_position(size: usize) -> Result<Position, Box<dyn std::error::Error>> {
    loop {
        print!("Your move (row col): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Err("Input closed".into());
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            println!("Enter two numbers: row col");
            continue;
        }
        match (fields[0].parse::<usize>(), fields[1].parse::<usize>()) {
            (Ok(row), Ok(col)) if row < size && col < size => {
                return Ok(Position::new(row, col));
            }
            _ => println!("Row and col must be numbers below {}", size),
        }
    }
}

fn announce(game: &Game) {
    match game.state().winner {
        Some(mark) => log!("{} wins", mark),
        None if game.is_finished() => log!("Draw"),
        None => log!("Game is still open"),
    }
}
