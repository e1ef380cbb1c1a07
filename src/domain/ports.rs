use crate::domain::model::{ExportResult, Livery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

/// Produces livery records, delivered as batches over a channel. There is no
/// ordering guarantee between batches and no uniqueness guarantee across
/// them; the receiver appends everything. Dropping the sender ends the
/// delivery.
#[async_trait]
pub trait LiverySource: Send + Sync {
    async fn deliver(&self, batches: mpsc::Sender<Vec<Livery>>) -> Result<()>;
}

/// Stand-in for the save dialog: picks the file the rule set is written to.
/// `None` means the user cancelled and the export is silently skipped.
pub trait ExportPrompt: Send + Sync {
    fn choose_export_path(&self) -> Option<PathBuf>;
}

/// Stand-in for the message box: surfaces outcomes to the user.
pub trait Notifier: Send + Sync {
    fn report_error(&self, message: &str);
    fn report_info(&self, message: &str);
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &Path;
    fn airlines_path(&self) -> &Path;
    fn typecodes_path(&self) -> &Path;
    fn poll_interval(&self) -> Duration;
    fn batch_size(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Livery>>;
    async fn transform(&self, liveries: Vec<Livery>) -> Result<ExportResult>;
    /// Returns the written path, or `None` when the export prompt was
    /// cancelled.
    async fn load(&self, result: ExportResult) -> Result<Option<String>>;
}
