use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error, trace, warn};
use serde_json::Value;
use crate::config::ShenmaConfig;
use crate::error::Error;
use crate::request::{ChatCompletionRequest, ModelInput, ModelOptions};
use crate::ModelType;

/// Referrer the vendor uses for usage tracking; must not change
pub const HTTP_REFERER: &str = "https://github.com/RooVetGit/Roo-Cline";

/// Client title the vendor uses for usage tracking; must not change
pub const X_TITLE: &str = "Roo Code";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Credentials a transport is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHandle
{   pub api_key: String
  , pub base_url: String
}

// ===== ZhugeShenma Client =====

/// Chat-completion adapter for the ZhugeShenma API
///
/// Holds immutable credentials only. Every `call`/`acall` builds its own
/// HTTP client and drops it when the exchange ends.
#[derive(Debug, Clone)]
pub struct ShenmaClient
{   api_key: String
  , base_url: String
  , timeout: Duration
}

impl ShenmaClient
{   /// Create a client; a missing key becomes the empty string and a
    /// missing base URL the vendor default
    pub fn new(
      api_key: Option<String>
    , base_url: Option<String>
    ) -> Self
    {   ShenmaClient::from_config(&ShenmaConfig
        {   api_key
          , api_base: base_url
          , timeout_secs: None
        })
    }

    /// Create a client from an explicit configuration value
    pub fn from_config(config: &ShenmaConfig) -> Self
    {   let api_key = config.api_key_or_default();
        let base_url = config.api_base_or_default()
          .trim_end_matches('/')
          .to_string();
        if api_key.is_empty()
        {   warn!("ZhugeShenma client created without an API key");
        }
        debug!("Creating ShenmaClient for {}", base_url);
        ShenmaClient
        {   api_key
          , base_url
          , timeout: Duration::from_secs(
              config.timeout_secs_or_default()
            )
        }
    }

    pub fn api_key(&self) -> &str
    {   &self.api_key
    }

    pub fn base_url(&self) -> &str
    {   &self.base_url
    }

    pub fn timeout(&self) -> Duration
    {   self.timeout
    }

    /// Credentials the blocking transport uses
    pub fn sync_client(&self) -> ClientHandle
    {   self.handle()
    }

    /// Credentials the non-blocking transport uses
    pub fn async_client(&self) -> ClientHandle
    {   self.handle()
    }

    fn handle(&self) -> ClientHandle
    {   ClientHandle
        {   api_key: self.api_key.clone()
          , base_url: self.base_url.clone()
        }
    }

    /// Full chat-completions URL
    pub fn endpoint(&self) -> String
    {   format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }

    /// Headers sent with every request, in order
    pub fn headers(&self) -> Vec<(&'static str, String)>
    {   vec![
          ("Content-Type", "application/json".to_string())
        , ("Authorization", format!("Bearer {}", self.api_key))
        , ("HTTP-Referer", HTTP_REFERER.to_string())
        , ("X-Title", X_TITLE.to_string())
        ]
    }

    /// reqwest's blocking client panics when built or dropped on a thread
    /// that drives a tokio runtime, so the exchange gets a scoped thread
    /// of its own; the caller still blocks until it finishes
    fn send_blocking(
      &self
    , url: &str
    , request: &ChatCompletionRequest
    ) -> Result<Value, reqwest::Error>
    {   std::thread::scope(|scope| {
          scope.spawn(|| self.exchange_blocking(url, request))
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        })
    }

    fn exchange_blocking(
      &self
    , url: &str
    , request: &ChatCompletionRequest
    ) -> Result<Value, reqwest::Error>
    {   let http_client = reqwest::blocking::Client::builder()
          .timeout(self.timeout)
          .build()?;
        let mut builder = http_client.post(url);
        for (name, value) in self.headers()
        {   builder = builder.header(name, value);
        }
        let response = builder.json(request).send()?;
        trace!("ZhugeShenma response status: {}", response.status());
        response.error_for_status()?.json()
    }

    async fn send_async(
      &self
    , url: &str
    , request: &ChatCompletionRequest
    ) -> Result<Value, reqwest::Error>
    {   let http_client = reqwest::Client::builder()
          .timeout(self.timeout)
          .build()?;
        let mut builder = http_client.post(url);
        for (name, value) in self.headers()
        {   builder = builder.header(name, value);
        }
        let response = builder.json(request).send().await?;
        trace!("ZhugeShenma response status: {}", response.status());
        response.error_for_status()?.json().await
    }
}

fn ensure_chat(model_type: ModelType) -> Result<(), Error>
{   if model_type == ModelType::Llm
    {   Ok(())
    } else
    {   debug!("Rejecting model type: {}", model_type);
        Err(Error::UnsupportedRequestKind(model_type))
    }
}

#[async_trait]
impl crate::client::ModelClient for ShenmaClient
{   type Request = ChatCompletionRequest;

    fn convert_inputs(
      &self
    , input: ModelInput
    , options: &ModelOptions
    , model_type: ModelType
    ) -> Result<ChatCompletionRequest, Error>
    {   crate::request::translate(input, options, model_type)
    }

    fn call(
      &self
    , request: &ChatCompletionRequest
    , model_type: ModelType
    ) -> Result<Value, Error>
    {   ensure_chat(model_type)?;
        let url = self.endpoint();
        debug!("POST {} model={}", url, request.model);
        self.send_blocking(&url, request).map_err(|e| {
          error!("ZhugeShenma API call to {} failed: {}", url, e);
          Error::ApiCallFailed { url, source: e }
        })
    }

    async fn acall(
      &self
    , request: &ChatCompletionRequest
    , model_type: ModelType
    ) -> Result<Value, Error>
    {   ensure_chat(model_type)?;
        let url = self.endpoint();
        debug!("POST {} model={} (async)", url, request.model);
        self.send_async(&url, request).await.map_err(|e| {
          error!("ZhugeShenma async API call to {} failed: {}", url, e);
          Error::ApiCallFailed { url, source: e }
        })
    }
}
