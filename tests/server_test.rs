mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use helpers::test_state;
use mmemory::server::router;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn parse_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/dm/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = router(test_state(None));
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn parse_uses_configured_member_names() {
    let app = router(test_state(None));
    let req = parse_request(serde_json::json!({
        "text": "민주\n오늘 ㅇㅇ이랑 연습했어 19:11"
    }));
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["message_count"], 1);
    assert_eq!(
        json["messages"][0],
        serde_json::json!({"type": "text", "content": "오늘 ㅇㅇ이랑 연습했어", "time": "19:11"})
    );
    assert!(json.get("notice").is_none());
}

#[tokio::test]
async fn parse_accepts_per_request_names() {
    let app = router(test_state(None));
    let req = parse_request(serde_json::json!({
        "text": "Karina\nsee you soon 18:00",
        "member2_name": "karina"
    }));
    let json = body_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(json["messages"][0]["content"], "see you soon");
    assert_eq!(json["message_count"], 1);
}

#[tokio::test]
async fn parse_empty_result_carries_notice() {
    let app = router(test_state(None));
    let req = parse_request(serde_json::json!({ "text": "ㅋ" }));
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["message_count"], 0);
    assert_eq!(json["notice"], "no messages found");
}

#[tokio::test]
async fn parse_malformed_json_is_a_json_error() {
    let app = router(test_state(None));
    let req = Request::builder()
        .method("POST")
        .uri("/api/dm/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_json(resp).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn parse_missing_text_field_is_a_json_error() {
    let app = router(test_state(None));
    let req = parse_request(serde_json::json!({ "member1_name": "지우" }));
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert_eq!(json["error"]["code"], "bad_request");
    assert!(json["error"]["message"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn recognize_parses_engine_output() {
    let app = router(test_state(Some("지우\n많이 힘들었는데\n이제 괜찮아\n19:11\n")));
    let req = Request::builder()
        .method("POST")
        .uri("/api/dm/recognize?lang=kor")
        .body(Body::from(vec![0x89, b'P', b'N', b'G']))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["messages"][0]["content"], "많이 힘들었는데 이제 괜찮아");
    assert_eq!(json["messages"][0]["time"], "19:11");
}

#[tokio::test]
async fn recognize_rejects_empty_body() {
    let app = router(test_state(Some("unused")));
    let req = Request::builder()
        .method("POST")
        .uri("/api/dm/recognize")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn recognize_engine_failure_is_bad_gateway() {
    let app = router(test_state(None));
    let req = Request::builder()
        .method("POST")
        .uri("/api/dm/recognize")
        .body(Body::from("not really an image"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(resp).await;
    assert_eq!(json["error"]["code"], "recognition_failed");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("recognition failed"));
}
