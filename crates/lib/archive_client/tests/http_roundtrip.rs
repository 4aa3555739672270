//! End-to-end — serve the real router on an ephemeral port and drive it
//! through `HttpApi` and the session controller.

use std::sync::Arc;

use archive_api::{AppState, config::ApiConfig};
use archive_client::{
    ArchiveApi, ClientError, Controller, HttpApi, IngestInput, Session, TurnStatus, Upload,
};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = archive_api::router(AppState {
        config: ApiConfig::default(),
    });
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn ingest_url_over_http() {
    let api = HttpApi::new(&spawn_server().await).expect("client");
    let resp = api
        .ingest(IngestInput::Url("http://example.com".into()))
        .await
        .expect("ingest");
    assert_eq!(resp.messages.len(), 2);
    assert_eq!(
        resp.messages[0].content,
        "Stubbed message from URL: http://example.com"
    );
}

#[tokio::test]
async fn ingest_file_over_http_uses_multipart() {
    let api = HttpApi::new(&spawn_server().await).expect("client");
    let upload = Upload {
        name: "family-chat.txt".into(),
        bytes: b"mum: dinner at 7".to_vec(),
    };
    let resp = api.ingest(IngestInput::File(upload)).await.expect("ingest");
    assert_eq!(
        resp.messages[0].content,
        "Stubbed message from file: family-chat.txt"
    );
}

#[tokio::test]
async fn chat_round_trips_conversation_id() {
    let api = HttpApi::new(&spawn_server().await).expect("client");
    let turn = api
        .chat("conv_1700000000000_k3j2h1g0f", "Who spoke first?")
        .await
        .expect("chat");
    assert_eq!(turn.conversation_id, "conv_1700000000000_k3j2h1g0f");
    assert_eq!(turn.response, "This is a stub answer.");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let base = format!("{}/missing", spawn_server().await);
    let api = HttpApi::new(&base).expect("client");
    let err = api.chat("c", "q").await.expect_err("404 expected");
    assert!(matches!(err, ClientError::Status(404)), "got {err:?}");
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn full_session_over_http() {
    let api = HttpApi::new(&spawn_server().await).expect("client");
    let controller = Controller::new(Arc::new(api));
    let mut session = Session::new();

    assert!(!controller.ingest_url(&mut session, "https://chat.example/export").await.is_error());
    assert!(!controller.summarise(&mut session).await.is_error());
    assert!(!controller.ask(&mut session, "Summarise the mood").await.is_error());

    let summary = session.summary().expect("summary");
    assert!(summary.summary.contains("2 messages"));
    assert_eq!(summary.sources[0].snippet, session.messages().expect("messages")[0].content);
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.transcript()[0].status, TurnStatus::Delivered);
}
