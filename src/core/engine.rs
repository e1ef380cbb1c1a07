use crate::core::{Notifier, Pipeline};
use crate::utils::error::Result;

/// Drives one extract/transform/load run and reports the outcome through the
/// notifier.
pub struct ExportEngine<P: Pipeline, N: Notifier> {
    pipeline: P,
    notifier: N,
}

impl<P: Pipeline, N: Notifier> ExportEngine<P, N> {
    pub fn new(pipeline: P, notifier: N) -> Self {
        Self { pipeline, notifier }
    }

    /// Runs the full export. Returns the written path, or `None` when the
    /// export prompt was cancelled.
    pub async fn run(&self) -> Result<Option<String>> {
        tracing::info!("Starting model matching rule export");

        let liveries = self.pipeline.extract().await?;
        tracing::info!("Acquired {} liveries", liveries.len());

        let result = self.pipeline.transform(liveries).await?;
        tracing::info!("Produced {} model match rules", result.rules.len());

        match self.pipeline.load(result).await {
            Ok(Some(path)) => {
                self.notifier
                    .report_info(&format!("Saved model matching rules to {}", path));
                Ok(Some(path))
            }
            Ok(None) => {
                self.notifier.report_info("Export cancelled, nothing was written");
                Ok(None)
            }
            Err(e) => {
                self.notifier
                    .report_error(&format!("Failed to write the rule set: {}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExportResult, Livery};
    use crate::utils::error::VmrError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubPipeline {
        fail_load: bool,
        cancelled: bool,
    }

    #[async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<Vec<Livery>> {
            Ok(vec![Livery::rule("DAL", "B739", "", "A")])
        }

        async fn transform(&self, liveries: Vec<Livery>) -> Result<ExportResult> {
            Ok(ExportResult {
                rules: liveries,
                xml: "<ModelMatchRuleSet/>".to_string(),
            })
        }

        async fn load(&self, _result: ExportResult) -> Result<Option<String>> {
            if self.fail_load {
                return Err(VmrError::Export {
                    message: "disk on fire".to_string(),
                });
            }
            if self.cancelled {
                return Ok(None);
            }
            Ok(Some("out.vmr".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        infos: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn report_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }

        fn report_info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn successful_run_reports_the_written_path() {
        let engine = ExportEngine::new(
            StubPipeline {
                fail_load: false,
                cancelled: false,
            },
            RecordingNotifier::default(),
        );

        let outcome = engine.run().await.unwrap();

        assert_eq!(outcome.as_deref(), Some("out.vmr"));
        let infos = engine.notifier.infos.lock().unwrap();
        assert!(infos.iter().any(|m| m.contains("out.vmr")));
    }

    #[tokio::test]
    async fn cancelled_export_is_a_quiet_success() {
        let engine = ExportEngine::new(
            StubPipeline {
                fail_load: false,
                cancelled: true,
            },
            RecordingNotifier::default(),
        );

        let outcome = engine.run().await.unwrap();

        assert_eq!(outcome, None);
        assert!(engine.notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_failure_is_surfaced_to_the_user() {
        let engine = ExportEngine::new(
            StubPipeline {
                fail_load: true,
                cancelled: false,
            },
            RecordingNotifier::default(),
        );

        let outcome = engine.run().await;

        assert!(outcome.is_err());
        let errors = engine.notifier.errors.lock().unwrap();
        assert!(errors.iter().any(|m| m.contains("disk on fire")));
    }
}
