use crate::domain::model::Livery;
use crate::domain::ports::LiverySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Test data matching the worked examples in the vPilot documentation:
/// three AIB/CL60 liveries that collapse into one rule, a couple of
/// single-livery rules, and a DAL/B739 pair plus a flight-number-range
/// variant that must stay standalone.
pub fn sample_liveries() -> Vec<Livery> {
    vec![
        Livery::rule("AIB", "CL60", "", "FSLTL_GA_C25C_ZZZ"),
        Livery::rule("AIB", "CL60", "", "FSLTL_GA_C25C_M-MIKE"),
        Livery::rule("AIB", "CL60", "", "FSLTL_GA_C25C_PS-CSF"),
        Livery::rule("AIB", "CRJX", "", "FSLTL_CRJ7_ZZZZ"),
        Livery::rule("", "C172", "", "FSLTL_GA_C172_ZZZ"),
        Livery::rule("DAL", "B739", "", "FSLTL_FAIB_B739_DAL-Delta_SSW"),
        Livery::rule("DAL", "B739", "", "FSLTL_FAIB_B739_DAL-Delta_WL"),
        Livery::rule("DAL", "B739", "4439-4858", "FSLTL_FAIB_B739_DAL-Delta_WL"),
    ]
}

/// Delivers the built-in sample set, split over several batches the way a
/// real enumeration arrives in chunks.
#[derive(Debug)]
pub struct SampleSource {
    batch_size: usize,
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource {
    pub fn new() -> Self {
        Self { batch_size: 4 }
    }

    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }
}

#[async_trait]
impl LiverySource for SampleSource {
    async fn deliver(&self, batches: mpsc::Sender<Vec<Livery>>) -> Result<()> {
        let batch_size = self.batch_size.max(1);

        for chunk in sample_liveries().chunks(batch_size) {
            if batches.send(chunk.to_vec()).await.is_err() {
                // Receiver went away; nothing left to deliver.
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_all_sample_liveries_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let source = SampleSource::new();

        source.deliver(tx).await.unwrap();

        let mut received = Vec::new();
        while let Some(batch) = rx.recv().await {
            received.extend(batch);
        }

        assert_eq!(received, sample_liveries());
    }

    #[tokio::test]
    async fn batch_size_controls_chunking() {
        let (tx, mut rx) = mpsc::channel(16);
        let source = SampleSource::with_batch_size(3);

        source.deliver(tx).await.unwrap();

        let mut batch_sizes = Vec::new();
        while let Some(batch) = rx.recv().await {
            batch_sizes.push(batch.len());
        }

        assert_eq!(batch_sizes, vec![3, 3, 2]);
    }

    #[tokio::test]
    async fn closed_receiver_is_not_an_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        assert!(SampleSource::new().deliver(tx).await.is_ok());
    }
}
