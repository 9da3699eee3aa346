use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageChoice {
    pub message: Message,
}

/// A complete, non-streamed chat completion:
/// `{"id": ..., "choices": [{"message": {"role": "assistant", "content": ...}}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<MessageChoice>,
}

impl CompletionResponse {
    pub fn assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            choices: vec![MessageChoice {
                message: Message {
                    role: Role::Assistant,
                    content: content.into(),
                },
            }],
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaChoice {
    pub delta: Delta,
}

/// One streamed fragment: `{"choices": [{"delta": {"content": ...}}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionChunk {
    pub choices: Vec<DeltaChoice>,
}

impl CompletionChunk {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            choices: vec![DeltaChoice {
                delta: Delta {
                    content: content.into(),
                },
            }],
        }
    }

    pub fn content(&self) -> &str {
        self.choices
            .first()
            .map(|choice| choice.delta.content.as_str())
            .unwrap_or_default()
    }
}
