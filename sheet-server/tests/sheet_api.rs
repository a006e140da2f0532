// sheet-server/tests/sheet_api.rs
// Endpoint contract tests driven through the router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use sheet_server::{AppState, Config, build_app};
use shared::api::{SaveAction, SaveRequest, SaveResponse};
use shared::models::{Case, CaseStatus, Channel};
use shared::{ErrorBody, Versioned};

fn test_app(dir: &TempDir) -> Router {
    let config = Config {
        work_dir: dir.path().to_path_buf(),
        http_port: 0,
        log_level: "warn".into(),
        log_dir: None,
        environment: "development".into(),
    };
    let state = AppState::initialize(&config).unwrap();
    build_app(state)
}

fn sample_case(id: i64) -> Case {
    Case {
        id,
        title: "รายงานตัว 90 วัน - Somchai".into(),
        worker_id: 7,
        employer_id: 3,
        status: CaseStatus::Pending,
        tasks: vec![],
        assignee: "มานี".into(),
        due_date: None,
        documents: vec![],
        channel: Channel::InPerson,
        notes: String::new(),
    }
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn save_request(cases: &[Case], revision: u64) -> Request<Body> {
    let body = serde_json::to_string(&SaveRequest {
        action: SaveAction::SaveCases,
        revision,
        payload: cases.to_vec(),
    })
    .unwrap();
    Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "text/plain;charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn fetch_on_empty_store_returns_revision_zero() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?action=getCases")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cases: Versioned<Case> = body_json(response).await;
    assert_eq!(cases.revision, 0);
    assert!(cases.items.is_empty());
}

#[tokio::test]
async fn unknown_action_gets_the_error_envelope() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?action=getInvoices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(response).await;
    assert!(body.error.contains("getInvoices"));
}

#[tokio::test]
async fn save_then_fetch_round_trips() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let cases = vec![sample_case(1), sample_case(2)];
    let response = app
        .clone()
        .oneshot(save_request(&cases, 0))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack: SaveResponse = body_json(response).await;
    assert_eq!(ack.revision, 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?action=getCases")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let fetched: Versioned<Case> = body_json(response).await;
    assert_eq!(fetched.revision, 1);
    assert_eq!(fetched.items, cases);
}

#[tokio::test]
async fn stale_revision_is_rejected_with_conflict() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    app.clone()
        .oneshot(save_request(&[sample_case(1)], 0))
        .await
        .unwrap();

    // Second writer still holds revision 0.
    let response = app
        .oneshot(save_request(&[sample_case(99)], 0))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: ErrorBody = body_json(response).await;
    assert!(body.error.contains("Revision conflict"));
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(CONTENT_TYPE, "text/plain;charset=utf-8")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(response).await;
    assert!(body.error.contains("malformed save request"));
}

#[tokio::test]
async fn health_reports_version() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
