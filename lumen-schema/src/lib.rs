pub mod ai;
pub mod entities;
pub mod gemini;
pub mod google_language;
pub mod openai;
pub mod realtime;
pub mod validate;

pub use entities::{
    AiAssistant, AiAssistantPatch, AuthProvider, AuthProviderPatch, Database, DatabasePatch,
    Function, FunctionPatch, Metric, NewAiAssistant, NewAuthProvider, NewDatabase, NewFunction,
    NewMetric, NewProject, NewStorageBucket, Project, ProjectPatch, StorageBucket,
    StorageBucketPatch,
};
pub use realtime::{MetricsSnapshot, RealtimeMessage};
pub use validate::{Validate, ValidationError};
