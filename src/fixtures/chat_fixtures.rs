//! Chat completion fixtures

use serde_json::json;

/// Sample successful chat completion response
pub fn chat_completion_response() -> serde_json::Value {
    chat_completion_with_content("Hello! How can I assist you today?")
}

/// Chat completion whose single choice carries `content`
pub fn chat_completion_with_content(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 9,
            "completion_tokens": 12,
            "total_tokens": 21
        }
    })
}

/// Structured-output completion carrying the given `(id, text)` answers
pub fn structured_completion(answers: &[(usize, serde_json::Value)]) -> serde_json::Value {
    let assistant_messages: Vec<_> = answers
        .iter()
        .map(|(id, text)| json!({"id": id, "text": text}))
        .collect();
    let content = json!({ "assistant_messages": assistant_messages }).to_string();
    chat_completion_with_content(&content)
}

/// Completion where the model declined to answer
pub fn refusal_completion() -> serde_json::Value {
    json!({
        "id": "chatcmpl-456",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "refusal": "I'm sorry, I can't help with that."
            },
            "finish_reason": "stop"
        }],
        "usage": null
    })
}

/// Echoes a minibatch request back as a structured completion.
///
/// Reads the user message (the serialized `user_messages` envelope) out of a
/// chat request body and answers every id with `f(text)`, emitted in reverse
/// id order.
pub fn echo_structured_completion(
    body: &serde_json::Value,
    f: impl Fn(&str) -> String,
) -> serde_json::Value {
    let user_content = body["messages"]
        .as_array()
        .and_then(|messages| messages.iter().find(|m| m["role"] == "user"))
        .and_then(|m| m["content"].as_str())
        .unwrap_or("{}");
    let envelope: serde_json::Value = serde_json::from_str(user_content).unwrap_or_default();

    let mut answers: Vec<(usize, serde_json::Value)> = envelope["user_messages"]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .map(|m| {
                    let id = m["id"].as_u64().unwrap_or_default() as usize;
                    let text = m["text"].as_str().unwrap_or_default();
                    (id, json!(f(text)))
                })
                .collect()
        })
        .unwrap_or_default();
    answers.reverse();

    structured_completion(&answers)
}
