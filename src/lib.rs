pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod mapping;
pub mod sim;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FixedPrompt, LocalStorage, TracingNotifier};
pub use crate::core::{engine::ExportEngine, pipeline::ExportPipeline};
pub use crate::domain::model::Livery;
pub use crate::utils::error::{Result, VmrError};
