use crate::errors::VectorizeResult;
use async_trait::async_trait;

/// Sends one minibatch to the remote model and returns its results in input
/// order.
///
/// Implementations issue exactly one client call per invocation and never
/// retry. `batch_index` is the 0-based position of `chunk` in the partitioned
/// input and is attached to any error.
#[async_trait]
pub trait MinibatchDispatcher: Send + Sync {
    type Output: Send;

    async fn dispatch(
        &self,
        batch_index: usize,
        chunk: &[String],
    ) -> VectorizeResult<Vec<Self::Output>>;
}
