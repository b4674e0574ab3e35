//! Configuration for the ZhugeShenma adapter

use serde::{Deserialize, Serialize};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "ZHUGESHENMA_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "ZHUGESHENMA_BASE_URL";

/// Endpoint used when no base URL is configured
pub const DEFAULT_API_BASE: &str
  = "http://shenma.sangfor.com:9080/v1";

/// Request timeout applied to both transports
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Adapter configuration, passed explicitly at construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShenmaConfig
{   /// API key (empty when absent)
    #[serde(default)]
    pub api_key: Option<String>
  , /// API base URL (if custom)
    #[serde(default)]
    pub api_base: Option<String>
  , /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>
}

impl ShenmaConfig
{   /// Read the key and base URL from the process environment
    pub fn from_env() -> Self
    {   ShenmaConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
      F: Fn(&str) -> Option<String>
    {   let read = |name: &str| {
          lookup(name).filter(|value| !value.is_empty())
        };
        ShenmaConfig
        {   api_key: read(API_KEY_ENV)
          , api_base: read(BASE_URL_ENV)
          , timeout_secs: None
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self
    {   self.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self
    {   self.api_base = Some(base.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self
    {   self.timeout_secs = Some(secs);
        self
    }

    pub fn api_key_or_default(&self) -> String
    {   self.api_key.clone().unwrap_or_default()
    }

    pub fn api_base_or_default(&self) -> String
    {   self.api_base.clone()
          .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn timeout_secs_or_default(&self) -> u64
    {   self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
