//! Integration tests for minibatch embeddings

use super::*;
use integrations_openaivec::errors::ErrorKind;

#[tokio::test]
async fn test_embed_minibatch_preserves_order() {
    let mock_server = setup_mock_server().await;
    mock_with_auth("/embeddings", "POST")
        .respond_with(ReversingEmbedder)
        .expect(3)
        .mount(&mock_server)
        .await;

    let input: Vec<String> = ["a", "bb", "ccc", "dddd", "eeeee"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let output = integrations_openaivec::embed(
        openai_client(&mock_server),
        &input,
        "text-embedding-3-small",
        2,
    )
    .await
    .unwrap();

    assert_eq!(
        output,
        vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]]
    );
}

#[tokio::test]
async fn test_embed_server_error_fails_call() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(error_response(
            503,
            json!({"error": {"message": "The server is overloaded", "type": "server_error"}}),
        ))
        .mount(&mock_server)
        .await;

    let model = EmbeddingOpenAI::new(openai_client(&mock_server), "text-embedding-3-small");
    let err = model
        .embed(vec!["hello".to_string()])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Dispatch);
}
