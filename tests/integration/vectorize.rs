//! Integration tests for structured minibatch prediction

use super::*;
use integrations_openaivec::errors::{ErrorKind, OpenAIError, RateLimitError};
use integrations_openaivec::VectorizeError;

fn texts(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("sentence {i}")).collect()
}

#[tokio::test]
async fn test_predict_minibatch_preserves_order() {
    let mock_server = setup_mock_server().await;
    mock_with_auth("/chat/completions", "POST")
        .respond_with(ReversingResponder { prefix: "answer: " })
        .expect(4)
        .mount(&mock_server)
        .await;

    let model = VectorizedOpenAI::<String>::new(
        openai_client(&mock_server),
        "gpt-4o-mini",
        "Answer each sentence",
    );
    let input = texts(10);

    let output = model.predict_minibatch(&input, 3).await.unwrap();

    let expected: Vec<String> = input.iter().map(|t| format!("answer: {t}")).collect();
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_predict_sends_structured_request() {
    let mock_server = setup_mock_server().await;
    mock_with_auth("/chat/completions", "POST")
        .respond_with(ReversingResponder { prefix: "" })
        .mount(&mock_server)
        .await;

    let model = VectorizedOpenAI::<String>::new(openai_client(&mock_server), "gpt-4o-mini", "Echo");
    model.predict(vec!["hello".to_string()]).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["response_format"]["type"], "json_schema");
    assert_eq!(body["response_format"]["json_schema"]["strict"], true);
    assert_eq!(
        body["messages"][1]["content"],
        r#"{"user_messages":[{"id":0,"text":"hello"}]}"#
    );
}

#[tokio::test]
async fn test_predict_empty_input_makes_no_request() {
    let mock_server = setup_mock_server().await;
    mock_with_auth("/chat/completions", "POST")
        .respond_with(ReversingResponder { prefix: "" })
        .expect(0)
        .mount(&mock_server)
        .await;

    let model = VectorizedOpenAI::<String>::new(openai_client(&mock_server), "gpt-4o-mini", "Echo");
    let output = model.predict_minibatch(&[], 128).await.unwrap();

    assert!(output.is_empty());
}

#[tokio::test]
async fn test_predict_rate_limit_is_dispatch_error() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            error_response(
                429,
                json!({
                    "error": {
                        "message": "Rate limit reached",
                        "type": "rate_limit_error",
                        "code": "rate_limit_exceeded"
                    }
                }),
            )
            .insert_header("retry-after", "2"),
        )
        .mount(&mock_server)
        .await;

    let model = VectorizedOpenAI::<String>::new(openai_client(&mock_server), "gpt-4o-mini", "Echo");
    let err = model
        .predict_minibatch(&texts(2), 128)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Dispatch);
    match err {
        VectorizeError::Dispatch {
            batch_index,
            source: OpenAIError::RateLimit(RateLimitError::TooManyRequests { .. }),
        } => assert_eq!(batch_index, 0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_predict_missing_id_is_correlation_error() {
    let mock_server = setup_mock_server().await;
    let content = json!({"assistant_messages": [{"id": 0, "text": "only one"}]}).to_string();
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&content)))
        .mount(&mock_server)
        .await;

    let model = VectorizedOpenAI::<String>::new(openai_client(&mock_server), "gpt-4o-mini", "Echo");
    let err = model.predict(texts(2)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Correlation);
}

#[tokio::test]
async fn test_predict_invalid_key_is_authentication_error() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(error_response(
            401,
            json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}),
        ))
        .mount(&mock_server)
        .await;

    let model = VectorizedOpenAI::<String>::new(openai_client(&mock_server), "gpt-4o-mini", "Echo");
    let err = model.predict(texts(1)).await.unwrap_err();

    assert!(matches!(
        err,
        VectorizeError::Dispatch {
            source: OpenAIError::Authentication(_),
            ..
        }
    ));
}
