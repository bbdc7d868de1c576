use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use super::protocol::{ChatResponse, ErrorResponse, parse_chat_request};
use crate::config::BraiConfig;
use crate::knowledge::{KnowledgeSource, OfflineKnowledge, WikipediaSummary};
use crate::responder::Responder;
use crate::sentiment::LexiconScorer;
use crate::store::{ChatState, StateStore};

/// Static chat page and anything else shipped next to it.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

pub struct AppState {
    pub responder: Responder,
    /// Single serialization point: a turn holds this for its whole
    /// read-modify-write so concurrent requests never lose log entries.
    pub chat: Mutex<ChatState>,
}

impl AppState {
    pub fn new(responder: Responder, chat: ChatState) -> Self {
        Self {
            responder,
            chat: Mutex::new(chat),
        }
    }

    /// Build the default collaborators and load durable state.
    pub fn from_config(config: &BraiConfig) -> anyhow::Result<Self> {
        let knowledge: Box<dyn KnowledgeSource> = if config.knowledge.enabled {
            Box::new(WikipediaSummary::from_config(&config.knowledge)?)
        } else {
            info!("knowledge lookups disabled");
            Box::new(OfflineKnowledge)
        };
        let responder = Responder::new(Box::new(LexiconScorer::new()), knowledge);

        let chat = ChatState::open(StateStore::from_config(&config.storage))?;
        Ok(Self::new(responder, chat))
    }
}

/// Routes: `POST /chat`, `GET /health`, and the embedded chat page.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat_handler))
        .route("/health", get(health))
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: BraiConfig) -> anyhow::Result<()> {
    let is_loopback = config.gateway.bind == "127.0.0.1" || config.gateway.bind == "::1";

    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let addr = format!("{}:{}", config.gateway.bind, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("brai gateway listening on {addr}");
    if !is_loopback {
        warn!("bound to {addr} with no authentication, anyone who can reach it can chat");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn chat_handler(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let utterance = match parse_chat_request(&body) {
        Ok(u) => u,
        Err(e) => {
            warn!("rejected chat request: {e}");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let mut chat = state.chat.lock().await;
    match state.responder.respond(&mut chat, &utterance).await {
        Ok(turn) => Json(ChatResponse {
            resposta: turn.reply,
        })
        .into_response(),
        Err(e) => {
            error!("failed to persist turn: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

async fn index() -> Response {
    serve_asset("index.html")
}

async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    if path.is_empty() {
        return serve_asset("index.html");
    }
    serve_asset(path)
}

fn serve_asset(path: &str) -> Response {
    match Assets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
