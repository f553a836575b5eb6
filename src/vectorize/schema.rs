//! Wire envelope shared by every structured minibatch call.
//!
//! The user message of a call is the JSON form of [`Request`]; the model is
//! constrained to answer with the JSON form of [`Response`].

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One correlated entry: `id` is the entry's 0-based position in its minibatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Message<T> {
    #[schemars(schema_with = "id_schema")]
    pub id: usize,
    pub text: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub user_messages: Vec<Message<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Response<T> {
    pub assistant_messages: Vec<Message<T>>,
}

impl Request {
    /// Wraps a minibatch, assigning ids `0..chunk.len()` in order.
    pub fn from_texts(chunk: &[String]) -> Self {
        Self {
            user_messages: chunk
                .iter()
                .enumerate()
                .map(|(id, text)| Message {
                    id,
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

// Structured outputs reject integer formats such as `uint`, so ids are
// declared as a plain integer.
fn id_schema(_: &mut SchemaGenerator) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::Integer.into()),
        ..Default::default()
    }
    .into()
}

/// Wraps a task instruction in the batch envelope used as the system message.
pub fn vectorize_system_message(task_prompt: &str) -> String {
    format!(
        r#"
<SystemMessage>
    <Instructions>
        <Instruction>{task_prompt}</Instruction>
        <Instruction>
            You will receive multiple user messages at once.
            Please provide an appropriate response to each message individually.
        </Instruction>
    </Instructions>
    <Examples>
        <Example>
            <Input>
                {{
                    "user_messages": [
                        {{
                            "id": 0,
                            "text": "{{user_message_0}}"
                        }},
                        {{
                            "id": 1,
                            "text": "{{user_message_1}}"
                        }}
                    ]
                }}
            </Input>
            <Output>
                {{
                    "assistant_messages": [
                        {{
                            "id": 0,
                            "text": "{{assistant_response_0}}"
                        }},
                        {{
                            "id": 1,
                            "text": "{{assistant_response_1}}"
                        }}
                    ]
                }}
            </Output>
        </Example>
    </Examples>
</SystemMessage>
"#
    )
}
