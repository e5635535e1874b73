mod lumen;
mod provider;

pub use lumen::{ApiErrorBody, ApiErrorObject, LumenError};
pub use provider::ProviderError;
