//! Embeddings fixtures

use serde_json::json;

/// Sample successful embeddings response
pub fn embeddings_response() -> serde_json::Value {
    embeddings_response_for(&[vec![0.0023064255; 8]])
}

/// Embeddings response with one row per vector, indexed in order
pub fn embeddings_response_for(vectors: &[Vec<f32>]) -> serde_json::Value {
    let data: Vec<_> = vectors
        .iter()
        .enumerate()
        .map(|(index, embedding)| {
            json!({
                "object": "embedding",
                "embedding": embedding,
                "index": index
            })
        })
        .collect();

    json!({
        "object": "list",
        "data": data,
        "model": "text-embedding-3-small",
        "usage": {
            "prompt_tokens": 8,
            "total_tokens": 8
        }
    })
}

/// Embeds each input string of an embeddings request as `[len, first_byte]`,
/// returning the rows in reverse index order.
pub fn echo_embeddings(body: &serde_json::Value) -> serde_json::Value {
    let inputs: Vec<String> = match &body["input"] {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    let mut data: Vec<_> = inputs
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let first = text.bytes().next().unwrap_or_default() as f32;
            json!({
                "object": "embedding",
                "embedding": [text.len() as f32, first],
                "index": index
            })
        })
        .collect();
    data.reverse();

    json!({
        "object": "list",
        "data": data,
        "model": "text-embedding-3-small",
        "usage": {"prompt_tokens": inputs.len(), "total_tokens": inputs.len()}
    })
}
