//! Demo: order-preserving minibatch prediction and embedding
//!
//! Classifies a list of words with one structured chat completion per
//! minibatch, then embeds the same list.
//!
//! ## Usage
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! # or AZURE_OPENAI_API_KEY, AZURE_OPENAI_ENDPOINT and AZURE_OPENAI_API_VERSION
//! cargo run --example vectorize
//! ```

use integrations_openaivec::observability::{LogLevel, LoggingConfig};
use integrations_openaivec::prelude::*;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct Category {
    name: String,
    is_living_thing: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    LoggingConfig::new().with_level(LogLevel::Info).init()?;

    let client = OpenAIClientBuilder::new().build()?;

    let words: Vec<String> = [
        "Apple", "Car", "Tokyo", "Dolphin", "Spoon", "Oak", "Violin", "Salmon",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect();

    let model = VectorizedOpenAI::<Category>::new(
        client.clone(),
        "gpt-4o-mini",
        "Return the smallest common-noun category that includes the given word",
    )
    .with_config(BatchConfig::default().with_max_concurrency(2));

    let categories = model.predict_minibatch(&words, 3).await?;
    for (word, category) in words.iter().zip(&categories) {
        println!(
            "{word:>10} -> {} (living: {})",
            category.name, category.is_living_thing
        );
    }

    let embeddings = EmbeddingOpenAI::new(client, "text-embedding-3-small")
        .embed_all(&words)
        .await?;
    println!("\nEmbedded {} words, dimension {}", embeddings.len(), embeddings[0].len());

    Ok(())
}
