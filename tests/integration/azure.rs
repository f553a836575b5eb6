//! Integration tests for Azure OpenAI routing and authentication

use super::*;
use integrations_openaivec::client::{
    EnvSnapshot, AZURE_OPENAI_API_KEY, AZURE_OPENAI_API_VERSION, AZURE_OPENAI_ENDPOINT,
};
use wiremock::matchers::query_param;

#[tokio::test]
async fn test_azure_prediction_uses_deployment_route() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/my-gpt/chat/completions"))
        .and(query_param("api-version", "2024-10-21"))
        .and(header("api-key", "azure-key"))
        .respond_with(ReversingResponder { prefix: "az:" })
        .expect(1)
        .mount(&mock_server)
        .await;

    let env: EnvSnapshot = [
        (AZURE_OPENAI_API_KEY, "azure-key".to_string()),
        (AZURE_OPENAI_ENDPOINT, mock_server.uri()),
        (AZURE_OPENAI_API_VERSION, "2024-10-21".to_string()),
    ]
    .into_iter()
    .collect();

    let client = OpenAIClientBuilder::new().with_env(env).build().unwrap();
    let model = VectorizedOpenAI::<String>::new(client, "my-gpt", "Prefix");

    let output = model
        .predict(vec!["x".to_string(), "y".to_string()])
        .await
        .unwrap();

    assert_eq!(output, vec!["az:x".to_string(), "az:y".to_string()]);
}

#[tokio::test]
async fn test_azure_embeddings_route() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/my-embed/embeddings"))
        .and(query_param("api-version", "2024-10-21"))
        .and(header("api-key", "azure-key"))
        .respond_with(ReversingEmbedder)
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = OpenAIConfig::azure("azure-key", &mock_server.uri(), "2024-10-21").unwrap();
    let client = OpenAIClientBuilder::new().with_config(config).build().unwrap();

    let output = EmbeddingOpenAI::new(client, "my-embed")
        .embed(vec!["abc".to_string()])
        .await
        .unwrap();

    assert_eq!(output, vec![vec![3.0]]);
}
