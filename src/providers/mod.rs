//! LLM provider implementations

pub mod shenma;

// Re-export for convenience
pub use shenma::{ClientHandle, ShenmaClient};
