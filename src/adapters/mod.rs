// Adapters layer: concrete implementations of the ports for a headless CLI
// run — local filesystem storage, a fixed-path stand-in for the save dialog
// and a tracing-backed notifier.

use crate::domain::ports::{ExportPrompt, Notifier, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(path, data).await?;
        Ok(())
    }
}

/// The CLI has no dialog to show; the export path was already chosen via
/// flags or config file.
#[derive(Debug, Clone)]
pub struct FixedPrompt {
    path: PathBuf,
}

impl FixedPrompt {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ExportPrompt for FixedPrompt {
    fn choose_export_path(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

/// Routes user-facing messages to the log.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report_error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn report_info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_storage_round_trips_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/MatchRules.vmr");
        let storage = LocalStorage::new();

        storage.write_file(&path, b"<ModelMatchRuleSet/>").await.unwrap();
        let data = storage.read_file(&path).await.unwrap();

        assert_eq!(data, b"<ModelMatchRuleSet/>");
    }

    #[tokio::test]
    async fn reading_a_missing_file_fails() {
        let storage = LocalStorage::new();

        assert!(storage.read_file(Path::new("no/such/file")).await.is_err());
    }

    #[test]
    fn fixed_prompt_always_returns_its_path() {
        let prompt = FixedPrompt::new(PathBuf::from("out.vmr"));

        assert_eq!(prompt.choose_export_path(), Some(PathBuf::from("out.vmr")));
    }
}
