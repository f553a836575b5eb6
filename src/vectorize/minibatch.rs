use crate::errors::{ConfigurationError, CorrelationError, VectorizeError, VectorizeResult};
use crate::vectorize::MinibatchDispatcher;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::slice::Chunks;
use tracing::{debug, info};

/// Splits `items` into consecutive chunks of at most `batch_size`, in order.
///
/// Every chunk but the last has exactly `batch_size` items. Empty input yields
/// no chunks.
pub fn partition<T>(items: &[T], batch_size: usize) -> Result<Chunks<'_, T>, ConfigurationError> {
    if batch_size == 0 {
        return Err(ConfigurationError::InvalidBatchSize(batch_size));
    }
    Ok(items.chunks(batch_size))
}

/// Concatenates per-chunk results in chunk order.
pub fn assemble<O>(chunk_results: Vec<Vec<O>>) -> Vec<O> {
    chunk_results.into_iter().flatten().collect()
}

async fn dispatch_checked<D>(
    dispatcher: &D,
    batch_index: usize,
    chunk: &[String],
) -> VectorizeResult<Vec<D::Output>>
where
    D: MinibatchDispatcher + ?Sized,
{
    let results = dispatcher.dispatch(batch_index, chunk).await?;
    if results.len() != chunk.len() {
        return Err(VectorizeError::Correlation {
            batch_index,
            source: CorrelationError::LengthMismatch {
                expected: chunk.len(),
                actual: results.len(),
            },
        });
    }
    Ok(results)
}

/// Maps `items` through `dispatcher` one minibatch at a time.
///
/// At most `max_concurrency` minibatches are in flight. Results are assembled
/// by chunk index, so `output[p]` answers `items[p]` whatever order the calls
/// complete in. The first failing minibatch fails the whole call and the
/// remaining in-flight calls are dropped. A minibatch whose result count
/// differs from its size fails with [`CorrelationError::LengthMismatch`].
pub async fn map_with_minibatch<D>(
    dispatcher: &D,
    items: &[String],
    batch_size: usize,
    max_concurrency: usize,
) -> VectorizeResult<Vec<D::Output>>
where
    D: MinibatchDispatcher + ?Sized,
{
    if max_concurrency == 0 {
        return Err(ConfigurationError::InvalidConcurrency(max_concurrency).into());
    }
    let chunks = partition(items, batch_size)?;

    if items.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_count = chunks.len();
    debug!(items = items.len(), chunk_count, batch_size, "Partitioned input");

    let chunk_results: Vec<Vec<D::Output>> = stream::iter(chunks.enumerate())
        .map(|(batch_index, chunk)| dispatch_checked(dispatcher, batch_index, chunk))
        .buffered(max_concurrency)
        .try_collect()
        .await?;

    let output = assemble(chunk_results);
    info!(items = output.len(), chunk_count, "Mapped minibatches");
    Ok(output)
}
