use crate::client::OpenAIClient;
use crate::errors::{OpenAIError, PromptError, PromptResult};
use crate::services::chat::{decode_structured, ChatCompletionRequest, ChatMessage, ResponseFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Examples needed before a prompt can be sent for enhancement.
pub const MIN_ENHANCE_EXAMPLES: usize = 5;

const ENHANCE_INSTRUCTIONS: &str = r#"
<SystemMessage>
    <Instructions>
        <Instruction>
            You receive a few-shot prompt as JSON with a purpose, cautions and examples.
            Return an improved prompt with the same JSON shape.
        </Instruction>
        <Instruction>Rewrite the purpose so it is precise and unambiguous.</Instruction>
        <Instruction>
            Add a caution for every mistake a reader could plausibly make, and drop
            cautions that the examples make redundant.
        </Instruction>
        <Instruction>
            Correct examples whose result contradicts the purpose or the cautions,
            and remove duplicates. Keep the original language of each example.
        </Instruction>
    </Instructions>
</SystemMessage>
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Example {
    pub source: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FewShotPrompt {
    pub purpose: String,
    pub cautions: Vec<String>,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default)]
pub struct FewShotPromptBuilder {
    purpose: Option<String>,
    cautions: Vec<String>,
    examples: Vec<Example>,
}

impl FewShotPromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn caution(mut self, caution: impl Into<String>) -> Self {
        self.cautions.push(caution.into());
        self
    }

    pub fn example(mut self, source: impl Into<String>, result: impl Into<String>) -> Self {
        self.examples.push(Example {
            source: source.into(),
            result: result.into(),
        });
        self
    }

    pub fn build(&self) -> PromptResult<FewShotPrompt> {
        let purpose = self.purpose.clone().ok_or(PromptError::MissingPurpose)?;
        if self.examples.is_empty() {
            return Err(PromptError::MissingExamples);
        }

        Ok(FewShotPrompt {
            purpose,
            cautions: self.cautions.clone(),
            examples: self.examples.clone(),
        })
    }

    /// Renders `{"purpose", "cautions", "examples": [{"source", "result"}]}`.
    pub fn build_json(&self) -> PromptResult<String> {
        let prompt = self.build()?;
        serde_json::to_string_pretty(&prompt).map_err(|e| PromptError::Render(e.to_string()))
    }

    /// Renders the prompt as a `<Prompt>` document with `<Purpose>`,
    /// `<Cautions>` and `<Examples>` children.
    pub fn build_xml(&self) -> PromptResult<String> {
        let prompt = self.build()?;
        let document = XmlPrompt {
            purpose: &prompt.purpose,
            cautions: XmlCautions {
                caution: &prompt.cautions,
            },
            examples: XmlExamples {
                example: prompt
                    .examples
                    .iter()
                    .map(|e| XmlExample {
                        source: &e.source,
                        result: &e.result,
                    })
                    .collect(),
            },
        };

        let mut buffer = String::new();
        let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some("Prompt"))
            .map_err(|e| PromptError::Render(e.to_string()))?;
        serializer.indent(' ', 4);
        document
            .serialize(serializer)
            .map_err(|e| PromptError::Render(e.to_string()))?;

        Ok(buffer)
    }

    /// Asks the model to refine purpose, cautions and examples, returning a
    /// builder holding the improved prompt.
    #[instrument(skip(self, client), fields(examples = self.examples.len()))]
    pub async fn enhance(self, client: &dyn OpenAIClient, model_name: &str) -> PromptResult<Self> {
        let prompt = self.build()?;
        if prompt.examples.len() < MIN_ENHANCE_EXAMPLES {
            return Err(PromptError::TooFewExamples {
                required: MIN_ENHANCE_EXAMPLES,
                actual: prompt.examples.len(),
            });
        }

        let user_message = serde_json::to_string(&prompt).map_err(OpenAIError::from)?;
        let request = ChatCompletionRequest::new(
            model_name,
            vec![
                ChatMessage::system(ENHANCE_INSTRUCTIONS),
                ChatMessage::user(user_message),
            ],
        )
        .with_temperature(0.0)
        .with_top_p(1.0)
        .with_response_format(ResponseFormat::json_schema::<FewShotPrompt>("FewShotPrompt"));

        let completion = client.chat().create(request).await?;
        let enhanced: FewShotPrompt =
            decode_structured(&completion).map_err(OpenAIError::from)?;

        info!(
            cautions = enhanced.cautions.len(),
            examples = enhanced.examples.len(),
            "Enhanced few-shot prompt"
        );

        Ok(Self {
            purpose: Some(enhanced.purpose),
            cautions: enhanced.cautions,
            examples: enhanced.examples,
        })
    }
}

#[derive(Serialize)]
struct XmlPrompt<'a> {
    #[serde(rename = "Purpose")]
    purpose: &'a str,
    #[serde(rename = "Cautions")]
    cautions: XmlCautions<'a>,
    #[serde(rename = "Examples")]
    examples: XmlExamples<'a>,
}

#[derive(Serialize)]
struct XmlCautions<'a> {
    #[serde(rename = "Caution")]
    caution: &'a [String],
}

#[derive(Serialize)]
struct XmlExamples<'a> {
    #[serde(rename = "Example")]
    example: Vec<XmlExample<'a>>,
}

#[derive(Serialize)]
struct XmlExample<'a> {
    #[serde(rename = "Source")]
    source: &'a str,
    #[serde(rename = "Result")]
    result: &'a str,
}
