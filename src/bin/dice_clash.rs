//! Terminal front-end for Dice Clash.
//!
//! ```text
//! dice-clash --player1 ada --player2 grace --size 4
//! RUST_LOG=debug dice-clash --seed 7
//! ```

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use dice_clash::{
    normalize_name, GameError, GameResult, GameRng, Grid, Match, MatchConfig, MoveSource,
    Observer, Player, PlayerId, Session, SessionError, TurnRecord, TurnView,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player grid dice game", long_about = None)]
struct Cli {
    /// Grid side length
    #[arg(short, long)]
    size: Option<usize>,

    /// Name of the first player (moves first)
    #[arg(long)]
    player1: Option<String>,

    /// Name of the second player
    #[arg(long)]
    player2: Option<String>,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with match settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the tutorial without asking
    #[arg(long)]
    tutorial: bool,

    /// Don't wait for ENTER between turns
    #[arg(long)]
    no_pause: bool,
}

/// Asks the active player for a column on stdin.
struct PromptMoves;

impl MoveSource for PromptMoves {
    fn choose_column(&mut self, view: &TurnView<'_>) -> Option<usize> {
        let name = view.game.player(view.player).name();
        if view.attempt == 0 {
            println!("{}, your turn.", name.bold());
            println!("You've rolled a {}!\n", view.face.to_string().cyan().bold());
        }
        let last = view.game.grid_size() - 1;
        Input::<usize>::new()
            .with_prompt(format!(
                "{name}, in which column do you want to place your die? (0-{last})"
            ))
            .interact_text()
            .ok()
    }
}

/// Prints grids, scores and outcomes.
struct Terminal {
    pause: bool,
}

impl Terminal {
    /// Stop pausing once the pause prompt can't read input. The next column
    /// prompt hits the same input and aborts the session.
    fn resume(&mut self, outcome: dialoguer::Result<String>) {
        if let Err(err) = outcome {
            log::warn!("pause prompt failed, no longer pausing: {err}");
            self.pause = false;
        }
    }

    fn print_player(&self, player: &Player) {
        println!("{}'s grid:", player.name().bold());
        print!("{}", player.grid());
        println!("Score: {}\n", player.score().to_string().yellow());
    }

    fn print_stats(&self, game: &Match) {
        for (_, player) in game.players().iter() {
            self.print_player(player);
        }
    }
}

impl Observer for Terminal {
    fn on_turn(&mut self, game: &Match, record: &TurnRecord) {
        if record.removed() > 0 {
            let opponent = game.player(record.player.other()).name();
            println!(
                "{}",
                format!(
                    "Knocked {} of {opponent}'s {}s out of column {}!",
                    record.removed(),
                    record.action.face,
                    record.action.column
                )
                .magenta()
            );
        }
        self.print_stats(game);
        if self.pause && !game.is_over() {
            let resumed = Input::<String>::new()
                .with_prompt("Press ENTER to continue the game")
                .allow_empty(true)
                .interact_text();
            self.resume(resumed);
        }
    }

    fn on_retry(&mut self, _player: PlayerId, error: &GameError) {
        println!("{} Choose another column.\n", error.to_string().red());
    }

    fn on_game_over(&mut self, game: &Match, result: &GameResult) {
        println!("{}", "Game over!".bold());
        match result {
            GameResult::Winner(winner) => {
                let line = format!("{} wins!", game.player(*winner).name());
                println!("{}", line.green().bold());
            }
            GameResult::Tie => {
                let line = format!(
                    "It's a tie! {} and {} both win.",
                    game.player(PlayerId::ONE).name(),
                    game.player(PlayerId::TWO).name()
                );
                println!("{}", line.green().bold());
            }
        }
    }
}

fn prompt_name(seat: &str, default: &str) -> anyhow::Result<String> {
    let name: String = Input::new()
        .with_prompt(format!("Please enter the name for {seat}"))
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            match input.trim().is_empty() {
                true => Err("Name must not be empty"),
                false => Ok(()),
            }
        })
        .interact_text()?;
    Ok(normalize_name(&name))
}

fn prompt_size(config: &MatchConfig) -> anyhow::Result<usize> {
    let sizes: Vec<usize> = (config.min_size..=config.max_size).collect();
    let labels: Vec<String> = sizes.iter().map(|s| format!("{s}x{s}")).collect();
    let selection = Select::new()
        .with_prompt("How big do you want the board?")
        .items(&labels)
        .default(config.size.saturating_sub(config.min_size))
        .interact()?;
    Ok(sizes[selection])
}

fn print_tutorial(size: usize) {
    println!(
        "In Dice Clash, your objective is to accumulate the most points with your dice\n\
         while removing points from your opponent!\n"
    );
    println!("Each player starts with their own empty grid, like this:");
    print!("{}", Grid::new(size));
    println!(
        "\nOn your turn you roll a die and place it in a column of your grid.\n\
         Every die with the same face in your opponent's matching column is removed.\n\n\
         Each column is scored separately:\n\
         - a single die is worth its face value\n\
         - n matching dice are worth face x n x n (two 3s score 12, not 6)\n\n\
         The game ends when both grids are full. The highest score wins.\n"
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    println!("{}\n", "Welcome to Dice Clash!".bold());

    config.player1 = match cli.player1 {
        Some(name) => normalize_name(&name),
        None => prompt_name("Player 1", &config.player1)?,
    };
    config.player2 = match cli.player2 {
        Some(name) => normalize_name(&name),
        None => prompt_name("Player 2", &config.player2)?,
    };
    config.size = match (cli.size, &cli.config) {
        (Some(size), _) => size,
        (None, Some(_)) => config.size,
        (None, None) => prompt_size(&config)?,
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    let tutorial = cli.tutorial
        || Confirm::new()
            .with_prompt("Would you like a tutorial on how to play the game?")
            .default(false)
            .interact()?;
    if tutorial {
        print_tutorial(config.size);
    }

    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    log::info!("rolling with seed {}", rng.seed());

    let game = Match::from_config(&config)?;
    let mut session = Session::new(game, rng, PromptMoves);
    let mut terminal = Terminal {
        pause: !cli.no_pause,
    };

    loop {
        match session.play_game(&mut terminal) {
            Ok(_) => {}
            Err(SessionError::Aborted) => {
                println!("\nInput closed, ending the game.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        println!("\nThank you for playing!");
        let again = Confirm::new()
            .with_prompt("Would you like to play again?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
        session.replay();
    }

    Ok(())
}
