use crate::domain::model::Livery;
use crate::domain::ports::LiverySource;
use crate::mapping::Mappers;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// One item of a SimConnect livery enumeration, as dumped to JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumeratedLivery {
    #[serde(rename = "AircraftTitle")]
    pub aircraft_title: String,
    #[serde(rename = "LiveryName", default)]
    pub livery_name: String,
}

/// Reads a JSON dump of an enumeration (an array of `AircraftTitle` /
/// `LiveryName` objects), normalizes each item through the lookup tables
/// and delivers the results in batches.
pub struct JsonFileSource {
    path: PathBuf,
    mappers: Mappers,
    batch_size: usize,
}

impl JsonFileSource {
    pub fn new(path: PathBuf, mappers: Mappers, batch_size: usize) -> Self {
        Self {
            path,
            mappers,
            batch_size: batch_size.max(1),
        }
    }
}

#[async_trait]
impl LiverySource for JsonFileSource {
    async fn deliver(&self, batches: mpsc::Sender<Vec<Livery>>) -> Result<()> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let items: Vec<EnumeratedLivery> = serde_json::from_str(&text)?;
        tracing::info!(
            "Read {} enumerated liveries from {}",
            items.len(),
            self.path.display()
        );

        for chunk in items.chunks(self.batch_size) {
            let batch: Vec<Livery> = chunk
                .iter()
                .map(|item| {
                    self.mappers
                        .livery_from_enumeration(&item.aircraft_title, &item.livery_name)
                })
                .collect();

            if batches.send(batch).await.is_err() {
                break;
            }
        }

        Ok(())
    }
}
