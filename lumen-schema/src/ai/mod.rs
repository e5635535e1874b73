//! Request and response bodies of the `/api/ai/*` routes.

mod requests;
mod responses;

pub use requests::{
    AnalyzeImageRequest, ChatRequest, ChatRole, ChatTurn, GenerateCodeRequest,
    GenerateImageRequest, GenerateSqlRequest, SentimentRequest, SummarizeRequest,
};
pub use responses::{
    AiSource, ChatResponse, GeneratedCode, GeneratedImage, GeneratedSql, ImageAnalysis,
    SentimentAnalysis, SentimentLabel, Summary,
};
