use crate::core::flatten::flatten;
use crate::core::serializer;
use crate::core::session::{ConnectionState, Session};
use crate::core::{ConfigProvider, ExportPrompt, ExportResult, Livery, LiverySource, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::validation::is_valid_flight_number_range;
use tokio::sync::mpsc;

/// The export pipeline: collect livery batches into a session, flatten and
/// render them, then write the document to the path picked by the prompt.
pub struct ExportPipeline<S, C, L, P>
where
    S: Storage,
    C: ConfigProvider,
    L: LiverySource,
    P: ExportPrompt,
{
    storage: S,
    config: C,
    source: L,
    prompt: P,
}

impl<S, C, L, P> ExportPipeline<S, C, L, P>
where
    S: Storage,
    C: ConfigProvider,
    L: LiverySource,
    P: ExportPrompt,
{
    pub fn new(storage: S, config: C, source: L, prompt: P) -> Self {
        Self {
            storage,
            config,
            source,
            prompt,
        }
    }
}

#[async_trait::async_trait]
impl<S, C, L, P> Pipeline for ExportPipeline<S, C, L, P>
where
    S: Storage,
    C: ConfigProvider,
    L: LiverySource,
    P: ExportPrompt,
{
    async fn extract(&self) -> Result<Vec<Livery>> {
        let (tx, mut rx) = mpsc::channel(self.config.batch_size().max(1));

        let mut session = Session::new();
        session.set_connection(ConnectionState::Connected);
        // A fetch never appends to a previous run's results.
        session.clear();

        let (delivered, ()) = tokio::join!(self.source.deliver(tx), session.collect(&mut rx));
        if let Err(e) = delivered {
            session.record_error(e.to_string());
            return Err(e);
        }

        Ok(session.into_liveries())
    }

    async fn transform(&self, liveries: Vec<Livery>) -> Result<ExportResult> {
        let rules = flatten(&liveries);
        tracing::debug!(
            "Flattened {} liveries into {} rules",
            liveries.len(),
            rules.len()
        );

        for rule in &rules {
            if !is_valid_flight_number_range(&rule.flight_number_range) {
                tracing::warn!(
                    "Rule for {}/{} has an unusual flight number range '{}'",
                    rule.callsign_prefix,
                    rule.type_code,
                    rule.flight_number_range
                );
            }
        }

        let xml = serializer::to_xml(&rules)?;
        Ok(ExportResult { rules, xml })
    }

    async fn load(&self, result: ExportResult) -> Result<Option<String>> {
        let Some(path) = self.prompt.choose_export_path() else {
            tracing::info!("No export file chosen, skipping save");
            return Ok(None);
        };

        self.storage.write_file(&path, result.xml.as_bytes()).await?;
        tracing::debug!("Wrote {} rules to {}", result.rules.len(), path.display());

        Ok(Some(path.display().to_string()))
    }
}
