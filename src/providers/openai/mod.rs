mod client;

pub use client::{GeneratedImageUrl, OpenaiClient};
