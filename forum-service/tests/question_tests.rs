mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_list_empty() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/question/list")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_list_pagination_newest_first() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "a@x.com", "Secret123").await;

    for i in 1..=3 {
        let response = app
            .post_authenticated("/api/question/create", &token)
            .json(&json!({
                "subject": format!("Question {}", i),
                "content": "body"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get("/api/question/list?page=0&size=2")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 3);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["subject"], "Question 3");
    assert_eq!(items[1]["subject"], "Question 2");

    let response = app
        .get("/api/question/list?page=1&size=2")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"], 3);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["subject"], "Question 1");
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_detail_includes_answers_oldest_first() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "a@x.com", "Secret123").await;

    let response = app
        .post_authenticated("/api/question/create", &token)
        .json(&json!({"subject": "How do lifetimes work?", "content": "Asking for a friend."}))
        .send()
        .await
        .expect("Failed to execute request");
    let question: serde_json::Value = response.json().await.unwrap();
    let question_id = question["id"].as_i64().unwrap();

    for text in ["First answer", "Second answer"] {
        let response = app
            .post_authenticated("/api/answer/create", &token)
            .json(&json!({"question_id": question_id, "content": text}))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get(&format!("/api/question/detail/{}", question_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["subject"], "How do lifetimes work?");
    let answers = body["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["content"], "First answer");
    assert_eq!(answers[1]["content"], "Second answer");
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_detail_unknown_id() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/question/detail/999")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_detail_malformed_id() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/question/detail/not-a-number")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_create_answer_for_missing_question() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "a@x.com", "Secret123").await;

    let response = app
        .post_authenticated("/api/answer/create", &token)
        .json(&json!({"question_id": 999, "content": "Into the void."}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_create_requires_auth() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/question/create")
        .json(&json!({"subject": "s", "content": "c"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_question_create_empty_subject_is_validation_error() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "a@x.com", "Secret123").await;

    let response = app
        .post_authenticated("/api/question/create", &token)
        .json(&json!({"subject": "", "content": "body"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"subject"));
}
