//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::usecase::{GetGameStateUseCase, JoinGameUseCase, UpdateCellUseCase};

use super::{
    handler::http::{game_state, health_check, join, update_cell},
    signal::shutdown_signal,
    state::AppState,
};

/// Bingo HTTP server
///
/// Serves the JSON API and falls back to static client assets for every other path.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     join_game_usecase,
///     get_game_state_usecase,
///     update_cell_usecase,
///     PathBuf::from("./html"),
/// );
/// server.run("0.0.0.0".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// JoinGameUseCase（プレイヤー参加のユースケース）
    join_game_usecase: Arc<JoinGameUseCase>,
    /// GetGameStateUseCase（ゲーム状態取得のユースケース）
    get_game_state_usecase: Arc<GetGameStateUseCase>,
    /// UpdateCellUseCase（マス更新のユースケース）
    update_cell_usecase: Arc<UpdateCellUseCase>,
    /// Root directory of the client assets
    html_root: PathBuf,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `join_game_usecase` - UseCase for joining the game
    /// * `get_game_state_usecase` - UseCase for reading the game state
    /// * `update_cell_usecase` - UseCase for marking cells
    /// * `html_root` - Directory served for non-API paths
    pub fn new(
        join_game_usecase: Arc<JoinGameUseCase>,
        get_game_state_usecase: Arc<GetGameStateUseCase>,
        update_cell_usecase: Arc<UpdateCellUseCase>,
        html_root: PathBuf,
    ) -> Self {
        Self {
            join_game_usecase,
            get_game_state_usecase,
            update_cell_usecase,
            html_root,
        }
    }

    /// Build the router without binding a listener
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            join_game_usecase: self.join_game_usecase,
            get_game_state_usecase: self.get_game_state_usecase,
            update_cell_usecase: self.update_cell_usecase,
        });

        Router::new()
            // API エンドポイント
            .route("/join", get(join))
            .route("/player", get(join))
            .route("/game", get(game_state))
            .route("/cell", get(update_cell))
            .route("/api/health", get(health_check))
            // 静的ファイル
            .fallback_service(ServeDir::new(self.html_root))
            .with_state(app_state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the bingo server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Bingo server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
