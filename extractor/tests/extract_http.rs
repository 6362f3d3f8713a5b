//! End-to-end extraction against an in-process backend double.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};
use invoice_extractor::{ExtractError, ExtractionClient, Flow, Phase, UploadedFile};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Debug)]
struct ReceivedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

type Requests = Arc<Mutex<Vec<Vec<ReceivedPart>>>>;

#[derive(Clone)]
struct Backend {
    status: StatusCode,
    body: &'static str,
    requests: Requests,
}

async fn extract(State(backend): State<Backend>, mut multipart: Multipart) -> (StatusCode, String) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }
    backend.requests.lock().await.push(parts);
    (backend.status, backend.body.to_string())
}

/// Start a backend answering every request with `status` and `body`.
async fn spawn_backend(status: StatusCode, body: &'static str) -> (ExtractionClient, Requests) {
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().route("/extract", post(extract)).with_state(Backend {
        status,
        body,
        requests: requests.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ExtractionClient::with_endpoint(format!("http://{}/extract", addr));
    (client, requests)
}

async fn run(client: &ExtractionClient, flow: &mut Flow<UploadedFile>) -> Phase {
    match flow.trigger() {
        Some(file) => {
            let outcome = client.extract(file).await;
            flow.complete(outcome)
        }
        None => flow.phase(),
    }
}

fn pdf() -> UploadedFile {
    UploadedFile::new("invoice.pdf", b"%PDF-1.4\n\x00\x01binary\xff".to_vec()).unwrap()
}

const WIDGET: &str = r#"{"date": "2024-01-01", "description": "Widget", "tax_amount": 5.0}"#;

#[tokio::test]
async fn test_success_sends_one_invoice_part_and_exports_csv() {
    let (client, requests) = spawn_backend(StatusCode::OK, WIDGET).await;
    let mut flow = Flow::new();
    flow.select_file(pdf());

    assert_eq!(run(&client, &mut flow).await, Phase::Success);

    let requests = requests.lock().await;
    assert_eq!(requests.len(), 1);
    let parts = &requests[0];
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "invoice");
    assert_eq!(parts[0].bytes, pdf().bytes());
    assert_eq!(parts[0].file_name.as_deref(), Some("invoice.pdf"));
    assert_eq!(parts[0].content_type.as_deref(), Some("application/pdf"));

    let result = flow.result().unwrap();
    assert_eq!(result.columns().collect::<Vec<_>>(), vec!["date", "description", "tax_amount"]);
    assert_eq!(result.row(), vec!["2024-01-01", "Widget", "5.0"]);
    assert_eq!(
        flow.download().unwrap().content,
        "date,description,tax_amount\n2024-01-01,Widget,5.0\n"
    );
}

#[tokio::test]
async fn test_image_is_sent_with_its_type() {
    let (client, requests) = spawn_backend(StatusCode::OK, WIDGET).await;
    let file = UploadedFile::new("scan.PNG", vec![0x89, b'P', b'N', b'G']).unwrap();

    client.extract(&file).await.unwrap();

    let requests = requests.lock().await;
    assert_eq!(requests[0][0].content_type.as_deref(), Some("image/png"));
    assert_eq!(requests[0][0].bytes, vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_backend_error_surfaces_status_and_body() {
    let (client, _requests) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, "internal error").await;
    let mut flow = Flow::new();
    flow.select_file(pdf());

    assert_eq!(run(&client, &mut flow).await, Phase::BackendError);
    assert_eq!(
        flow.error(),
        Some(&ExtractError::Backend {
            status: 500,
            body: "internal error".into()
        })
    );
    let message = flow.status_message().unwrap();
    assert!(message.contains("500"));
    assert!(message.contains("internal error"));
    assert!(flow.result().is_none());
    assert!(flow.download().is_none());
}

#[tokio::test]
async fn test_invalid_json_is_transport_error() {
    let (client, _requests) = spawn_backend(StatusCode::OK, "<html>oops</html>").await;

    let err = client.extract(&pdf()).await.unwrap_err();
    assert!(matches!(err, ExtractError::Transport(_)));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Grab a free port, then close it so nothing listens there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ExtractionClient::with_endpoint(format!("http://{}/extract", addr));
    let mut flow = Flow::new();
    flow.select_file(pdf());

    assert_eq!(run(&client, &mut flow).await, Phase::TransportError);
    let description = match flow.error() {
        Some(ExtractError::Transport(description)) => description.clone(),
        other => panic!("expected transport error, got {:?}", other),
    };
    assert!(!description.is_empty());
    assert!(flow.status_message().unwrap().contains(&description));
    assert!(flow.result().is_none());
    assert!(flow.download().is_none());
}

#[tokio::test]
async fn test_retrigger_after_failure_sends_new_request() {
    let (client, requests) = spawn_backend(StatusCode::SERVICE_UNAVAILABLE, "busy").await;
    let mut flow = Flow::new();
    flow.select_file(pdf());

    assert_eq!(run(&client, &mut flow).await, Phase::BackendError);
    assert_eq!(run(&client, &mut flow).await, Phase::BackendError);

    assert_eq!(requests.lock().await.len(), 2);
}

#[tokio::test]
async fn test_no_file_means_no_request() {
    let (client, requests) = spawn_backend(StatusCode::OK, WIDGET).await;
    let mut flow: Flow<UploadedFile> = Flow::new();

    assert_eq!(run(&client, &mut flow).await, Phase::Idle);
    assert_eq!(
        flow.status_message().as_deref(),
        Some("Please upload a PDF or image to begin.")
    );
    assert!(requests.lock().await.is_empty());
}
