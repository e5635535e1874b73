mod ai;
pub mod prompts;

pub use ai::AiService;
