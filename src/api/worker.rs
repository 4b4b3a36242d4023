use std::sync::Arc;
use std::time::Duration;

use crate::batch_worker::BatchWorker;

use super::{LipiBatchResult, LipiError};

/// Background batch transliteration for hosts that must not block their
/// own thread.
#[derive(uniffi::Object)]
pub struct LipiBatchWorker {
    worker: BatchWorker,
}

#[uniffi::export]
impl LipiBatchWorker {
    #[uniffi::constructor]
    fn new() -> Arc<Self> {
        Arc::new(Self {
            worker: BatchWorker::new(),
        })
    }

    /// Queue a batch; returns the job id its result will carry.
    fn submit(&self, fragments: Vec<String>, target_lang: String) -> Result<u64, LipiError> {
        self.worker
            .submit(fragments, target_lang)
            .ok_or_else(|| LipiError::Io {
                msg: "batch worker stopped".to_string(),
            })
    }

    /// Next finished batch, if any. Never blocks.
    fn poll(&self) -> Option<LipiBatchResult> {
        self.worker.try_recv().map(|r| LipiBatchResult {
            job_id: r.job_id,
            results: r.results,
        })
    }

    /// Next finished batch, waiting up to `timeout_ms`.
    fn wait(&self, timeout_ms: u64) -> Option<LipiBatchResult> {
        self.worker
            .recv_timeout(Duration::from_millis(timeout_ms))
            .map(|r| LipiBatchResult {
                job_id: r.job_id,
                results: r.results,
            })
    }
}
