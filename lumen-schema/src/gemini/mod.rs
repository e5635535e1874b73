//! Gemini `generateContent` (v1beta) schema types.

mod generate_content;

pub use generate_content::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
