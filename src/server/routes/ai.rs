//! `/api/ai/*`. Every route answers 200 once the body validates; provider
//! failures surface only as `"source": "fallback"`.

use crate::error::LumenError;
use crate::server::extract::ValidatedJson;
use crate::server::router::LumenState;
use axum::{Json, Router, extract::State, routing::post};
use lumen_schema::ai::{
    AnalyzeImageRequest, ChatRequest, ChatResponse, GenerateCodeRequest, GenerateImageRequest,
    GenerateSqlRequest, GeneratedCode, GeneratedImage, GeneratedSql, ImageAnalysis,
    SentimentAnalysis, SentimentRequest, SummarizeRequest, Summary,
};

pub fn router() -> Router<LumenState> {
    Router::new()
        .route("/generate-code", post(generate_code))
        .route("/generate-sql", post(generate_sql))
        .route("/analyze-sentiment", post(analyze_sentiment))
        .route("/chat", post(chat))
        .route("/summarize", post(summarize))
        .route("/analyze-image", post(analyze_image))
        .route("/generate-image", post(generate_image))
}

async fn generate_code(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<GenerateCodeRequest>,
) -> Json<GeneratedCode> {
    Json(state.ai.generate_code(&req).await)
}

async fn generate_sql(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<GenerateSqlRequest>,
) -> Json<GeneratedSql> {
    Json(state.ai.generate_sql(&req).await)
}

async fn analyze_sentiment(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<SentimentRequest>,
) -> Json<SentimentAnalysis> {
    Json(state.ai.analyze_sentiment(&req).await)
}

/// Fails only when `assistantId` names no stored assistant.
async fn chat(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, LumenError> {
    Ok(Json(state.ai.chat(&req).await?))
}

async fn summarize(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<SummarizeRequest>,
) -> Json<Summary> {
    Json(state.ai.summarize(&req).await)
}

async fn analyze_image(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<AnalyzeImageRequest>,
) -> Json<ImageAnalysis> {
    Json(state.ai.analyze_image(&req).await)
}

async fn generate_image(
    State(state): State<LumenState>,
    ValidatedJson(req): ValidatedJson<GenerateImageRequest>,
) -> Json<GeneratedImage> {
    Json(state.ai.generate_image(&req).await)
}
