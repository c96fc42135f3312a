use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use dimplace_core::command::CommandResponse;
use dimplace_core::curve::{CurveRecord, CurveTable};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod registry;
mod session;

use config::AppConfig;
use registry::CommandRegistry;
use session::{log_response, Session};

// Application State. The registry here is never mutated; WebSocket sessions
// each work on a clone.
struct AppState {
    registry: CommandRegistry,
}

#[derive(Debug, Deserialize)]
struct StatelessCommand {
    command: String,
    #[serde(default)]
    params: Value,
    #[serde(default)]
    curves: Vec<CurveRecord>,
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::discover() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = match config.server.resolve().await {
        Ok(addr) => addr,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let shared_state = Arc::new(AppState {
        registry: CommandRegistry::standard(),
    });

    let app = Router::new()
        .route("/", get(root))
        .route("/commands", get(list_commands))
        .route("/command", post(run_command))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    info!("listening on {}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}

async fn root() -> &'static str {
    "Dimension placement service"
}

async fn list_commands(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.registry.names())
}

/// One command against the curves sent with it; nothing is kept between calls.
async fn run_command(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatelessCommand>,
) -> Json<CommandResponse> {
    let curves: CurveTable = body.curves.into_iter().collect();
    let response = state.registry.dispatch(&body.command, &body.params, &curves);
    log_response("POST /command", &body.command, &response);
    Json(response)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    // Each session works against its own view and its own command table
    let mut session = Session::new(state.registry.clone());
    info!("Client connected (session {})", session.id());

    while let Some(msg) = socket.recv().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            return;
        };

        let Message::Text(text) = msg else {
            continue;
        };

        let reply = session.handle_message(&text);
        if socket.send(Message::Text(reply)).await.is_err() {
            return;
        }
    }

    info!("Client disconnected (session {})", session.id());
}
