//! Web shell integration tests
//!
//! Requests go through the real router with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use referee_api::create_router;

async fn get_page(uri: &str) -> (StatusCode, String) {
    let response = create_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_serves_questionnaire() {
    let (status, html) = get_page("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("How much training data do you have?"));
    assert!(html.contains("What&#39;s most important to you?"));
    assert!(html.contains("What hardware do you have?"));
    assert!(!html.contains("id=\"recommendation\""));
}

#[tokio::test]
async fn test_index_always_lists_comparison_table() {
    for uri in ["/", "/?dataset_size=large&priority=accuracy&hardware=gpu"] {
        let (_, html) = get_page(uri).await;
        assert_eq!(html.matches("<tr><td>").count(), 7, "{uri}");
        let logistic = html.find("Logistic Reg</th>").unwrap();
        let bayes = html.find("Naive Bayes</th>").unwrap();
        let bert = html.find("BERT</th>").unwrap();
        assert!(logistic < bayes && bayes < bert, "{uri}");
    }
}

#[tokio::test]
async fn test_submission_renders_recommendation() {
    let (status, html) = get_page("/?dataset_size=large&priority=accuracy&hardware=gpu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Recommendation: BERT"));
    assert!(html.contains("Highest accuracy with sufficient data"));
    assert!(html.contains("State-of-the-art accuracy"));
    assert!(!html.contains("Important Notes"));
    assert!(html.contains(r#"<th class="chosen">BERT</th>"#));
}

#[tokio::test]
async fn test_submission_keeps_answers_selected() {
    let (_, html) = get_page("/?dataset_size=small&priority=speed&hardware=cpu").await;
    assert!(html.contains("Recommendation: Naive Bayes"));
    assert!(html.contains("Fastest inference on CPU"));
    assert!(html.contains(r#"name="dataset_size" value="small" checked"#));
    assert!(html.contains(r#"name="priority" value="speed" checked"#));
    assert!(html.contains(r#"name="hardware" value="cpu" checked"#));
}

#[tokio::test]
async fn test_unknown_answers_fall_back_to_defaults() {
    let (status, html) = get_page("/?dataset_size=enormous&priority=vibes&hardware=tpu").await;
    assert_eq!(status, StatusCode::OK);
    // medium / accuracy / cpu
    assert!(html.contains("Recommendation: Logistic Regression"));
    assert!(html.contains("Best CPU-only accuracy option"));
    assert!(!html.contains("enormous"));
}

#[tokio::test]
async fn test_repeated_answers_use_first_value() {
    let (status, html) =
        get_page("/?hardware=gpu&hardware=cpu&dataset_size=large&priority=accuracy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Recommendation: BERT"));
    assert!(html.contains(r#"name="hardware" value="gpu" checked"#));
}

#[tokio::test]
async fn test_alternatives_list_other_models() {
    let (_, html) = get_page("/?dataset_size=medium&priority=simplicity&hardware=gpu").await;
    assert!(html.contains("Easiest to implement and debug"));
    assert!(html.contains("<li>Logistic Regression: 82% accuracy, 0.5ms speed</li>"));
    assert!(html.contains("<li>BERT: 94% accuracy, 45ms speed</li>"));
    assert!(!html.contains("<li>Naive Bayes: 78% accuracy"));
}

#[tokio::test]
async fn test_other_routes_are_not_served() {
    let (status, _) = get_page("/api/recommend").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
