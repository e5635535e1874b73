mod chat_completion;
mod error;
mod images;

pub use chat_completion::{
    ChatCompletionChoice, ChatCompletionMessage, ChatCompletionRequest, ChatCompletionResponse,
    ContentPart, ImageUrl, MessageContent, RequestMessage,
};
pub use error::{OpenaiErrorBody, OpenaiErrorObject};
pub use images::{ImageData, ImageGenerationRequest, ImageGenerationResponse};
