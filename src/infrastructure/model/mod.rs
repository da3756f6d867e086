//! Upstream model infrastructure
//!
//! # Structure
//! - `types` - Error types
//! - `traits` - ModelProvider seam between handler and upstream
//! - `gemini` - Gemini HTTP client

pub mod gemini;
pub mod traits;
pub mod types;

pub use gemini::GeminiClient;
pub use traits::ModelProvider;
pub use types::ModelError;
