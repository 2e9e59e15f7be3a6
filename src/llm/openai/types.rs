use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(in crate::llm) struct ResponsesRequest<'a> {
    pub(in crate::llm) model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(in crate::llm) reasoning: Option<Reasoning<'a>>,
    pub(in crate::llm) input: Vec<InputMessage<'a>>,
    pub(in crate::llm) text: TextConfig<'a>,
}

#[derive(Debug, Serialize)]
pub(in crate::llm) struct Reasoning<'a> {
    pub(in crate::llm) effort: &'a str,
}

#[derive(Debug, Serialize)]
pub(in crate::llm) struct InputMessage<'a> {
    pub(in crate::llm) role: &'static str,
    pub(in crate::llm) content: Vec<InputContent<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(in crate::llm) enum InputContent<'a> {
    InputText { text: &'a str },
}

#[derive(Debug, Serialize)]
pub(in crate::llm) struct TextConfig<'a> {
    pub(in crate::llm) format: TextFormat<'a>,
}

#[derive(Debug, Serialize)]
pub(in crate::llm) struct TextFormat<'a> {
    pub(in crate::llm) r#type: &'static str,
    pub(in crate::llm) name: &'a str,
    pub(in crate::llm) schema: &'a Value,
}

#[derive(Debug, Deserialize)]
pub(in crate::llm) struct ResponsesResponse {
    #[serde(default)]
    pub(in crate::llm) output_text: Option<String>,
    #[serde(default)]
    pub(in crate::llm) output: Vec<OutputItem>,
    #[serde(default)]
    pub(in crate::llm) model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(in crate::llm) struct OutputItem {
    #[serde(rename = "type")]
    pub(in crate::llm) kind: String,
    #[serde(default)]
    pub(in crate::llm) content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
pub(in crate::llm) struct OutputContent {
    #[serde(rename = "type")]
    pub(in crate::llm) kind: String,
    #[serde(default)]
    pub(in crate::llm) text: Option<String>,
    #[serde(default)]
    pub(in crate::llm) refusal: Option<String>,
}
