//! Batch transliteration over independent fragments.
//!
//! Fragments are converted in order, a fixed number at a time. Between two
//! chunks the caller gets a scheduling point; chunking never changes the
//! results, only how the work interleaves with whatever else is pending.

use std::thread;

use tracing::{debug, debug_span};

use super::transliterate_to;
use crate::script::Script;
use crate::settings::settings;

/// Results for one chunk of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutput {
    /// Zero-based chunk number.
    pub index: usize,
    pub total_chunks: usize,
    /// Position of the chunk's first fragment in the batch.
    pub start: usize,
    pub results: Vec<String>,
}

/// A batch in progress. Each `next()` converts one chunk.
pub struct BatchJob<'a, S> {
    fragments: &'a [S],
    target: Option<Script>,
    chunk_size: usize,
    next_index: usize,
}

impl<'a, S: AsRef<str>> BatchJob<'a, S> {
    /// An unknown `target_code` yields every fragment unchanged.
    pub fn new(fragments: &'a [S], target_code: &str) -> Self {
        let target = Script::from_code(target_code).ok();
        if target.is_none() {
            debug!(target_code, "unknown batch target, fragments left unchanged");
        }
        Self {
            fragments,
            target,
            chunk_size: settings().batch.chunk_size,
            next_index: 0,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn total_chunks(&self) -> usize {
        self.fragments.len().div_ceil(self.chunk_size)
    }

    pub fn is_done(&self) -> bool {
        self.next_index >= self.total_chunks()
    }

    fn convert(&self, text: &str) -> String {
        match self.target {
            Some(target) => transliterate_to(text, target),
            None => text.to_string(),
        }
    }
}

impl<S: AsRef<str>> Iterator for BatchJob<'_, S> {
    type Item = ChunkOutput;

    fn next(&mut self) -> Option<ChunkOutput> {
        if self.is_done() {
            return None;
        }
        let index = self.next_index;
        let total_chunks = self.total_chunks();
        let start = index * self.chunk_size;
        let end = (start + self.chunk_size).min(self.fragments.len());
        let _span = debug_span!("batch_chunk", index, total_chunks, start, end).entered();

        let results = self.fragments[start..end]
            .iter()
            .map(|fragment| self.convert(fragment.as_ref()))
            .collect();
        self.next_index += 1;
        debug!("chunk {}/{} done", index + 1, total_chunks);

        Some(ChunkOutput {
            index,
            total_chunks,
            start,
            results,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total_chunks().saturating_sub(self.next_index);
        (left, Some(left))
    }
}

/// Transliterate every fragment into `target_code`, preserving order and
/// count. Yields the thread between chunks unless settings turn that off.
pub fn transliterate_batch<S: AsRef<str>>(fragments: &[S], target_code: &str) -> Vec<String> {
    let yield_between = settings().batch.yield_between_chunks;
    transliterate_batch_with(
        BatchJob::new(fragments, target_code),
        |_: &ChunkOutput| {
            if yield_between {
                thread::yield_now();
            }
        },
    )
}

/// Drive `job` to completion, calling `between_chunks` after every chunk
/// that is followed by another.
pub fn transliterate_batch_with<S, F>(job: BatchJob<'_, S>, mut between_chunks: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(&ChunkOutput),
{
    let _span = debug_span!(
        "transliterate_batch",
        fragments = job.fragments.len(),
        chunk_size = job.chunk_size
    )
    .entered();
    let mut results = Vec::with_capacity(job.fragments.len());
    for chunk in job {
        let more = chunk.index + 1 < chunk.total_chunks;
        if more {
            between_chunks(&chunk);
        }
        results.extend(chunk.results);
    }
    debug!(results = results.len());
    results
}
