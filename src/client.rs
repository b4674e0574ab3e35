//! Capability interface the orchestration framework programs against

use async_trait::async_trait;
use serde_json::Value;

/// A model backend the framework can translate for and call
///
/// Implementations are injected into the framework (as a generic or a
/// `Box<dyn ModelClient<Request = ..>>`); nothing here assumes a
/// particular vendor. `call` blocks the current thread, `acall` suspends
/// the current task. Both take the payload produced by
/// `convert_inputs` and return the vendor response untouched.
#[async_trait]
pub trait ModelClient: Send + Sync
{   /// Vendor-shaped payload produced by `convert_inputs`
    type Request: Send + Sync;

    fn convert_inputs(
      &self
    , input: crate::ModelInput
    , options: &crate::ModelOptions
    , model_type: crate::ModelType
    ) -> Result<Self::Request, crate::error::Error>;

    fn call(
      &self
    , request: &Self::Request
    , model_type: crate::ModelType
    ) -> Result<Value, crate::error::Error>;

    async fn acall(
      &self
    , request: &Self::Request
    , model_type: crate::ModelType
    ) -> Result<Value, crate::error::Error>;
}
