use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{debug, debug_span, warn};

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

pub(crate) struct BatchWork {
    pub job_id: u64,
    pub fragments: Vec<String>,
    pub target: String,
}

pub(crate) struct BatchResult {
    pub job_id: u64,
    pub results: Vec<String>,
}

// ---------------------------------------------------------------------------
// BatchWorker
// ---------------------------------------------------------------------------

/// Runs batches on a background thread, one job at a time, in submission
/// order. Jobs are never dropped: every id returned by `submit` produces a
/// result.
pub(crate) struct BatchWorker {
    work_tx: mpsc::Sender<BatchWork>,
    result_rx: Mutex<mpsc::Receiver<BatchResult>>,
    next_job: AtomicU64,
}

impl BatchWorker {
    pub fn new() -> Self {
        let (work_tx, work_rx) = mpsc::channel::<BatchWork>();
        let (result_tx, result_rx) = mpsc::channel::<BatchResult>();
        thread::Builder::new()
            .name("lipi-batch".into())
            .spawn(move || batch_worker(work_rx, result_tx))
            .expect("failed to spawn batch worker");

        Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            next_job: AtomicU64::new(0),
        }
    }

    /// Queue a batch and return its job id, or `None` if the worker thread
    /// has exited.
    pub fn submit(&self, fragments: Vec<String>, target: String) -> Option<u64> {
        let job_id = self.next_job.fetch_add(1, Ordering::SeqCst) + 1;
        let work = BatchWork {
            job_id,
            fragments,
            target,
        };
        if self.work_tx.send(work).is_err() {
            warn!(job_id, "batch worker stopped; job not queued");
            return None;
        }
        Some(job_id)
    }

    pub fn try_recv(&self) -> Option<BatchResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<BatchResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.recv_timeout(timeout).ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn batch_worker(rx: mpsc::Receiver<BatchWork>, tx: mpsc::Sender<BatchResult>) {
    while let Ok(work) = rx.recv() {
        let _span = debug_span!(
            "batch_job",
            job_id = work.job_id,
            fragments = work.fragments.len()
        )
        .entered();
        let results = lipi_core::transliterate_batch(&work.fragments, &work.target);
        debug!(results = results.len(), "batch job done");

        // Receiver gone: the owning worker was dropped.
        if tx
            .send(BatchResult {
                job_id: work.job_id,
                results,
            })
            .is_err()
        {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(10);

    #[test]
    fn test_job_ids_increase() {
        let worker = BatchWorker::new();
        let a = worker.submit(vec![], "hin".into());
        let b = worker.submit(vec![], "hin".into());
        assert_eq!(a, Some(1));
        assert_eq!(b, Some(2));
    }

    #[test]
    fn test_results_arrive_in_submission_order() {
        let worker = BatchWorker::new();
        let first = worker
            .submit(vec!["ಕನ್ನಡ".into(), "".into()], "hin".into())
            .unwrap();
        let second = worker.submit(vec!["Hello".into()], "tam".into()).unwrap();

        let r1 = worker.recv_timeout(WAIT).expect("first result");
        assert_eq!(r1.job_id, first);
        assert_eq!(r1.results, vec!["कन्नड".to_string(), String::new()]);

        let r2 = worker.recv_timeout(WAIT).expect("second result");
        assert_eq!(r2.job_id, second);
        assert_eq!(r2.results, vec!["Hello".to_string()]);
    }

    #[test]
    fn test_large_batch_runs_to_completion() {
        let worker = BatchWorker::new();
        let fragments: Vec<String> = (0..1234).map(|i| format!("ಕ {i}")).collect();
        let id = worker.submit(fragments, "hin".into()).unwrap();
        let result = worker.recv_timeout(WAIT).expect("result");
        assert_eq!(result.job_id, id);
        assert_eq!(result.results.len(), 1234);
        assert_eq!(result.results[1233], "क 1233");
    }

    #[test]
    fn test_submit_after_worker_exit() {
        let (work_tx, work_rx) = mpsc::channel::<BatchWork>();
        let (_result_tx, result_rx) = mpsc::channel::<BatchResult>();
        drop(work_rx);
        let worker = BatchWorker {
            work_tx,
            result_rx: Mutex::new(result_rx),
            next_job: AtomicU64::new(0),
        };
        assert_eq!(worker.submit(vec!["ಕ".into()], "hin".into()), None);
        assert!(worker.try_recv().is_none());
    }

    #[test]
    fn test_try_recv_empty() {
        let worker = BatchWorker::new();
        assert!(worker.try_recv().is_none());
    }
}
