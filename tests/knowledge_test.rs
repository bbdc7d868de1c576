use axum::{Json, Router, extract::Path, http::StatusCode, response::IntoResponse, routing::get};
use brai::knowledge::{
    KnowledgeSource, LookupOutcome, NOT_FOUND_REPLY, OfflineKnowledge, UNREACHABLE_REPLY,
    WikipediaSummary,
};
use serde_json::json;
use tokio::time::{Duration, sleep};

async fn mock_summary(Path(title): Path<String>) -> impl IntoResponse {
    match title.as_str() {
        "Brasil" => (
            StatusCode::OK,
            Json(json!({"title": "Brasil", "extract": "O Brasil é um país da América do Sul."})),
        )
            .into_response(),
        "Lento" => {
            sleep(Duration::from_secs(2)).await;
            Json(json!({"extract": "tarde demais"})).into_response()
        }
        "Sem_extrato" => Json(json!({"title": "Sem extrato"})).into_response(),
        "Texto" => (StatusCode::OK, "plain text, not json").into_response(),
        "Quebrado" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        t if t.starts_with("Eco_") => Json(json!({"extract": t})).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"type": "https://mediawiki.org/wiki/HyperSwitch/errors/not_found"})),
        )
            .into_response(),
    }
}

async fn start_mock_wiki() -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/page/summary/{title}", get(mock_summary));
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/page/summary"), handle)
}

fn wiki(base: &str, timeout: Duration) -> WikipediaSummary {
    WikipediaSummary::new(base, timeout).expect("valid base url")
}

#[tokio::test]
async fn found_returns_extract() {
    let (base, server) = start_mock_wiki().await;
    let outcome = wiki(&base, Duration::from_secs(2)).lookup("Brasil?").await;
    assert_eq!(
        outcome,
        LookupOutcome::Found("O Brasil é um país da América do Sul.".into())
    );
    server.abort();
}

#[tokio::test]
async fn slug_survives_the_round_trip() {
    let (base, server) = start_mock_wiki().await;
    let outcome = wiki(&base, Duration::from_secs(2))
        .lookup("Eco de São Paulo?")
        .await;
    assert_eq!(outcome, LookupOutcome::Found("Eco_de_São_Paulo".into()));
    server.abort();
}

#[tokio::test]
async fn missing_page_is_not_found() {
    let (base, server) = start_mock_wiki().await;
    let source = wiki(&base, Duration::from_secs(2));
    assert_eq!(source.lookup("Atlântida?").await, LookupOutcome::NotFound);
    assert_eq!(source.lookup("Quebrado?").await, LookupOutcome::NotFound);
    server.abort();
}

#[tokio::test]
async fn wrong_shape_is_not_found() {
    let (base, server) = start_mock_wiki().await;
    let source = wiki(&base, Duration::from_secs(2));
    assert_eq!(source.lookup("Sem extrato?").await, LookupOutcome::NotFound);
    assert_eq!(source.lookup("Texto?").await, LookupOutcome::NotFound);
    server.abort();
}

#[tokio::test]
async fn blank_question_is_not_found_without_a_request() {
    // Nothing listens here; a request would come back Unreachable.
    let source = wiki("http://127.0.0.1:9/page/summary", Duration::from_secs(1));
    assert_eq!(source.lookup("  ?  ").await, LookupOutcome::NotFound);
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source = wiki(
        &format!("http://127.0.0.1:{port}/page/summary"),
        Duration::from_secs(2),
    );
    assert_eq!(source.lookup("Brasil?").await, LookupOutcome::Unreachable);
}

#[tokio::test]
async fn slow_source_times_out_as_unreachable() {
    let (base, server) = start_mock_wiki().await;
    let source = wiki(&base, Duration::from_millis(200));
    assert_eq!(source.lookup("Lento?").await, LookupOutcome::Unreachable);
    server.abort();
}

#[test]
fn offline_source_is_always_unreachable() {
    assert_eq!(
        tokio_test::block_on(OfflineKnowledge.lookup("Brasil?")),
        LookupOutcome::Unreachable
    );
}

#[test]
fn outcomes_map_to_reply_text() {
    assert_eq!(LookupOutcome::Found("x".into()).into_reply(), "x");
    assert_eq!(LookupOutcome::NotFound.into_reply(), NOT_FOUND_REPLY);
    assert_eq!(LookupOutcome::Unreachable.into_reply(), UNREACHABLE_REPLY);
}
