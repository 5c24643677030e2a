//! Multiplayer bingo server.
//!
//! Players join with a username, get a personally shuffled board built from the
//! phrases file and mark cells. The browser client polls `/game` to see every
//! player's board.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bingo-server -- --phrases phrases.txt
//! cargo run --bin bingo-server -- --phrases phrases.txt --room abc123 --topic "Standup Bingo" --port 3000
//! ```

use std::{path::PathBuf, sync::Arc};

use bingo_server::{
    domain::{GameConfig, RoomCode},
    infrastructure::{phrase_loader::load_phrases, repository::InMemoryPlayerRepository},
    ui::Server,
    usecase::{GetGameStateUseCase, JoinGameUseCase, UpdateCellUseCase},
};
use bingo_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bingo-server")]
#[command(about = "Multiplayer bingo server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// The phrases file to use, one phrase per line
    #[arg(long)]
    phrases: PathBuf,

    /// Path to the html directory for the game
    #[arg(long, default_value = "./html")]
    html: PathBuf,

    /// The room code players will need to join this game
    #[arg(long, value_parser = parse_room_code)]
    room: Option<RoomCode>,

    /// The topic for the game
    #[arg(long, default_value = "Generic Bingo")]
    topic: String,
}

fn parse_room_code(value: &str) -> Result<RoomCode, String> {
    RoomCode::new(value.to_string()).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Phrases
    // 2. Repository
    // 3. UseCases
    // 4. Server

    // 1. Load phrases (fatal on failure, before binding)
    let phrases = match load_phrases(&args.phrases).await {
        Ok(phrases) => phrases,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} phrases from {}",
        phrases.len(),
        args.phrases.display()
    );

    tracing::info!("Starting up Multiplayer Bingo...");
    match &args.room {
        Some(room) => tracing::info!("Room Code: {}", room.as_str()),
        None => tracing::info!("Room Code: (none, anyone can join)"),
    }
    tracing::info!("Topic: {}", args.topic);

    let config = Arc::new(GameConfig::new(args.room, args.topic, phrases));

    // 2. Create Repository (in-memory database)
    let repository = Arc::new(InMemoryPlayerRepository::new());

    // 3. Create UseCases
    let join_game_usecase = Arc::new(JoinGameUseCase::new(repository.clone(), config.clone()));
    let get_game_state_usecase = Arc::new(GetGameStateUseCase::new(
        repository.clone(),
        config.clone(),
    ));
    let update_cell_usecase = Arc::new(UpdateCellUseCase::new(repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        join_game_usecase,
        get_game_state_usecase,
        update_cell_usecase,
        args.html,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
