use thiserror::Error as ThisError;

/// Errors surfaced by the ZhugeShenma adapter
#[derive(Debug, ThisError)]
pub enum Error
{   /// Only chat completion is served by this endpoint
    #[error("Unsupported model type: {0}")]
    UnsupportedRequestKind(crate::ModelType)
  , /// Input was neither a prompt nor a role/content sequence
    #[error("Unsupported input format for ZhugeShenma: {0}")]
    UnsupportedInputFormat(String)
  , /// Transport failure, non-2xx status or undecodable body
    #[error("ZhugeShenma API call to {url} failed: {source}")]
    ApiCallFailed
    {   url: String
      , #[source]
        source: reqwest::Error
    }
}

impl Error
{   /// HTTP status of a failed call, when the server answered
    pub fn status(&self) -> Option<reqwest::StatusCode>
    {   match self
        {   Error::ApiCallFailed { source, .. } => source.status()
          , _ => None
        }
    }

    /// True for transport timeouts
    pub fn is_timeout(&self) -> bool
    {   match self
        {   Error::ApiCallFailed { source, .. } => source.is_timeout()
          , _ => false
        }
    }
}
