pub mod engine;
pub mod flatten;
pub mod pipeline;
pub mod serializer;
pub mod session;

pub use crate::domain::model::{ExportResult, Livery, RuleKey};
pub use crate::domain::ports::{
    ConfigProvider, ExportPrompt, LiverySource, Notifier, Pipeline, Storage,
};
pub use crate::utils::error::Result;
