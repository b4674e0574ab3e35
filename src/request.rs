//! Invocation inputs, tuning options and the vendor request payload
//!
//! Everything here is pure: turning an input plus options into a
//! [`ChatCompletionRequest`] never touches the network.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use log::trace;
use crate::error::Error;

pub const DEFAULT_MODEL: &str = "deepseek-v3";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_STREAM: bool = false;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

// ===== Message Types =====

/// One role/content pair of a conversation
///
/// Keys other than `role` and `content` are kept in `extra` and sent
/// back out untouched. `extra` never holds `role` or `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
  , #[serde(flatten)]
    extra: Map<String, Value>
}

impl ChatMessage
{   pub fn new(
      role: impl Into<String>
    , content: impl Into<String>
    ) -> Self
    {   ChatMessage
        {   role: role.into()
          , content: content.into()
          , extra: Map::new()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self
    {   ChatMessage::new("assistant", content)
    }

    pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage::new("system", content)
    }

    /// Vendor-specific keys carried alongside role and content
    pub fn extra(&self) -> &Map<String, Value>
    {   &self.extra
    }

    /// Attach a vendor-specific key such as `name`
    pub fn insert_extra(
      &mut self
    , key: impl Into<String>
    , value: Value
    ) -> Result<Option<Value>, Error>
    {   let key = key.into();
        if key == "role" || key == "content"
        {   return Err(Error::UnsupportedInputFormat(
              format!("reserved message field `{}`", key)
            ));
        }
        Ok(self.extra.insert(key, value))
    }
}

// ===== Invocation Input =====

/// What the caller wants the model to respond to
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput
{   /// A bare prompt, sent as a single user message
    Text(String)
  , /// A prepared conversation, sent as is
    Messages(Vec<ChatMessage>)
  , /// An untyped value from the framework, checked on translation
    Raw(Value)
}

impl From<&str> for ModelInput
{   fn from(s: &str) -> Self
    {   ModelInput::Text(s.to_string())
    }
}

impl From<String> for ModelInput
{   fn from(s: String) -> Self
    {   ModelInput::Text(s)
    }
}

impl From<Vec<ChatMessage>> for ModelInput
{   fn from(messages: Vec<ChatMessage>) -> Self
    {   ModelInput::Messages(messages)
    }
}

impl From<Value> for ModelInput
{   fn from(value: Value) -> Self
    {   ModelInput::Raw(value)
    }
}

impl ModelInput
{   /// Normalize into the message list the API expects
    pub fn into_messages(self) -> Result<Vec<ChatMessage>, Error>
    {   match self
        {   ModelInput::Text(prompt) => Ok(vec![ChatMessage::user(prompt)])
          , ModelInput::Messages(messages) => Ok(messages)
          , ModelInput::Raw(Value::String(prompt)) => {
              Ok(vec![ChatMessage::user(prompt)])
            }
          , ModelInput::Raw(Value::Array(items)) => {
              items.into_iter().map(message_from_value).collect()
            }
          , ModelInput::Raw(other) => {
              Err(Error::UnsupportedInputFormat(
                json_type(&other).to_string()
              ))
            }
        }
    }
}

fn message_from_value(item: Value) -> Result<ChatMessage, Error>
{   let mut map = match item
    {   Value::Object(map) => map
      , other => {
          return Err(Error::UnsupportedInputFormat(
            format!("array element {}", json_type(&other))
          ));
        }
    };
    let role = take_string(&mut map, "role")?;
    let content = take_string(&mut map, "content")?;
    Ok(ChatMessage
    {   role
      , content
      , extra: map
    })
}

fn take_string(
  map: &mut Map<String, Value>
, key: &str
) -> Result<String, Error>
{   match map.remove(key)
    {   Some(Value::String(s)) => Ok(s)
      , Some(other) => {
          Err(Error::UnsupportedInputFormat(
            format!("message field `{}` of type {}", key, json_type(&other))
          ))
        }
      , None => {
          Err(Error::UnsupportedInputFormat(
            format!("message without `{}`", key)
          ))
        }
    }
}

fn json_type(value: &Value) -> &'static str
{   match value
    {   Value::Null => "null"
      , Value::Bool(_) => "bool"
      , Value::Number(_) => "number"
      , Value::String(_) => "string"
      , Value::Array(_) => "array"
      , Value::Object(_) => "object"
    }
}

// ===== Options =====

/// Optional tuning parameters; unset fields fall back to the defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions
{   pub model: Option<String>
  , pub temperature: Option<f64>
  , pub stream: Option<bool>
  , pub max_tokens: Option<u32>
}

impl ModelOptions
{   pub fn model(mut self, model: impl Into<String>) -> Self
    {   self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self
    {   self.temperature = Some(temperature);
        self
    }

    pub fn stream(mut self, stream: bool) -> Self
    {   self.stream = Some(stream);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self
    {   self.max_tokens = Some(max_tokens);
        self
    }
}

/// Options arrive from the framework as a JSON object; unknown keys
/// are ignored
impl TryFrom<Value> for ModelOptions
{   type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error>
    {   serde_json::from_value(value)
    }
}

// ===== Payload =====

/// Body of `POST {base}/chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f64
  , pub stream: bool
  , pub max_tokens: u32
}

/// Translate a generic invocation into the vendor payload
pub fn translate(
  input: ModelInput
, options: &ModelOptions
, model_type: crate::ModelType
) -> Result<ChatCompletionRequest, Error>
{   if model_type != crate::ModelType::Llm
    {   return Err(Error::UnsupportedRequestKind(model_type));
    }
    let request = ChatCompletionRequest
    {   model: options.model.clone()
          .unwrap_or_else(|| DEFAULT_MODEL.to_string())
      , messages: input.into_messages()?
      , temperature: options.temperature
          .unwrap_or(DEFAULT_TEMPERATURE)
      , stream: options.stream.unwrap_or(DEFAULT_STREAM)
      , max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    };
    trace!("Translated request: {:?}", request);
    Ok(request)
}
