//! Demo: building and enhancing a few-shot prompt
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example few_shot
//! ```

use integrations_openaivec::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = FewShotPromptBuilder::new()
        .purpose("Return the smallest category that includes the given word")
        .caution("Never use proper nouns as categories")
        .example("Apple", "Fruit")
        .example("Car", "Vehicle")
        .example("Tokyo", "City")
        .example("France", "Country")
        .example("Toothbrush", "Hygiene Product")
        .example("Freedom", "Abstract Idea");

    println!("Original prompt:\n{}\n", builder.build_xml()?);

    let client = OpenAIClientBuilder::new().build()?;
    let enhanced = builder.enhance(client.as_ref(), "gpt-4o-mini").await?;
    let prompt = enhanced.build_xml()?;
    println!("Enhanced prompt:\n{prompt}\n");

    let answers = VectorizedOpenAI::<String>::new(client, "gpt-4o-mini", &prompt)
        .predict(vec!["Guitar".to_string(), "Kyoto".to_string()])
        .await?;
    println!("{answers:?}");

    Ok(())
}
