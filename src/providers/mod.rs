//! Upstream AI providers and the canned responses used when they are
//! unavailable.

pub mod fallback;
pub mod gemini;
pub mod openai;

mod bootstrap;
mod completion;
mod upstream;

pub use bootstrap::Providers;
pub use completion::{
    CompletionProvider, CompletionRequest, SelectedCompletion, is_gemini_model,
};
pub use upstream::{LUMEN_USER_AGENT, UPSTREAM_BODY_PREVIEW_CHARS, build_client};
