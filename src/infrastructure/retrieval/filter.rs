//! Fork-join relevance filtering over a partitioned chunk collection

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::domain::{ChunkJudge, RetrieverError};

/// Filters a chunk collection by fanning out relevance judgment across a
/// fixed number of concurrent workers.
///
/// The collection is partitioned into contiguous slices: every worker except
/// the last takes `total / workers` chunks and the last absorbs the
/// remainder. Workers run independently and the results are concatenated in
/// worker-index order, so global input order is preserved regardless of
/// completion order.
///
/// Failure policy is fail-slow: every worker runs its slice to completion
/// before any error is reported, and the first error in worker-index order
/// propagates to the caller. In-flight siblings are never cancelled.
pub struct ParallelChunkFilter<J>
where
    J: ChunkJudge + 'static,
{
    judge: Arc<J>,
    workers: usize,
}

impl<J: ChunkJudge + 'static> ParallelChunkFilter<J> {
    /// Create a filter with the given worker count (clamped to at least 1)
    pub fn new(judge: Arc<J>, workers: usize) -> Self {
        Self {
            judge,
            workers: workers.max(1),
        }
    }

    /// Run the fan-out and return the relevant chunks in original order
    pub async fn filter(
        &self,
        query: &str,
        chunks: Vec<String>,
    ) -> Result<Vec<String>, RetrieverError> {
        let total = chunks.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let workers = self.workers;
        let per_worker = total / workers;

        debug!(
            "dispatching {} workers over {} chunks ({} per worker)",
            workers, total, per_worker
        );

        let chunks = Arc::new(chunks);
        let query: Arc<str> = Arc::from(query);

        let mut handles = Vec::with_capacity(workers);
        for i in 0..workers {
            let start = i * per_worker;
            // last worker absorbs the remainder
            let end = if i == workers - 1 {
                total
            } else {
                start + per_worker
            };

            let judge = Arc::clone(&self.judge);
            let chunks = Arc::clone(&chunks);
            let query = Arc::clone(&query);

            handles.push(tokio::spawn(async move {
                let mut kept = Vec::new();
                for chunk in &chunks[start..end] {
                    if judge.is_relevant(&query, chunk).await? {
                        kept.push(chunk.clone());
                    }
                }
                Ok::<Vec<String>, RetrieverError>(kept)
            }));
        }

        // fork-join barrier: all workers complete before results are inspected
        let outcomes = join_all(handles).await;

        let mut relevant = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(Ok(kept)) => relevant.extend(kept),
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    return Err(RetrieverError::internal(format!(
                        "filter worker failed: {}",
                        e
                    )));
                }
            }
        }

        Ok(relevant)
    }
}
