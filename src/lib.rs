//! Adapter between a generic LLM-orchestration framework and the
//! ZhugeShenma (诸葛神码) chat-completion endpoint.
//!
//! ```text
//! framework ─ convert_inputs ─▶ ChatCompletionRequest
//!           ─ call / acall  ─▶ POST {base}/chat/completions ─▶ JSON
//! ```

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;

use std::fmt;
use serde::{Deserialize, Serialize};

pub use client::ModelClient;
pub use config::ShenmaConfig;
pub use error::Error;
pub use providers::ShenmaClient;
pub use request::{
  ChatCompletionRequest
, ChatMessage
, ModelInput
, ModelOptions
};

/// Kind of model capability the framework is asking for.
/// Only `Llm` (chat completion) is served by this adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType
{   /// Text embeddings
    Embedder
  , /// Chat completion
    #[serde(rename = "chat-completion")]
    Llm
  , /// Result reranking
    Reranker
  , /// Image synthesis
    ImageGeneration
  , /// Kind not set by the framework
    Undefined
}

impl fmt::Display for ModelType
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   let name = match self
        {   ModelType::Embedder => "embedder"
          , ModelType::Llm => "chat-completion"
          , ModelType::Reranker => "reranker"
          , ModelType::ImageGeneration => "image-generation"
          , ModelType::Undefined => "undefined"
        };
        f.write_str(name)
    }
}
