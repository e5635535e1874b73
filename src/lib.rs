pub mod config;
pub mod error;
pub mod providers;
pub mod realtime;
pub mod server;
pub mod service;
pub mod store;
pub mod utils;

pub use error::{LumenError, ProviderError};
