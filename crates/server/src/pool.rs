//! Bounded pool for blocking model calls

use std::sync::Arc;

use model_facade::{ModelError, Result};
use tokio::sync::Semaphore;

/// Runs model calls on the blocking thread pool, at most `size` at a time
#[derive(Debug, Clone)]
pub struct InferencePool {
    semaphore: Arc<Semaphore>,
    size: usize,
}

impl InferencePool {
    /// Create a pool allowing `size` concurrent calls (minimum one)
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Maximum number of concurrent calls
    pub fn size(&self) -> usize {
        self.size
    }

    /// Permits not currently held by a running call
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Run `task` on a blocking worker once a permit is free
    ///
    /// A panic inside `task` is reported as [`ModelError::Internal`].
    pub async fn run<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| ModelError::Internal("inference pool is closed".to_string()))?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            task()
        })
        .await
        .map_err(|e| ModelError::Internal(format!("inference worker failed: {}", e)))?
    }
}
