use crate::{ApiError, ServerConfig};
use intake_core::PatientCrud;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Application state shared across request handlers.
///
/// Holds the data-access implementation and the directories the form page is served from.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PatientCrud>,
    template_dir: Arc<PathBuf>,
    static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<dyn PatientCrud>, cfg: &ServerConfig) -> Self {
        Self {
            store,
            template_dir: Arc::new(cfg.template_dir().to_path_buf()),
            static_dir: Arc::new(cfg.static_dir().to_path_buf()),
        }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Runs a data-access call on the blocking thread pool.
    ///
    /// Store implementations are synchronous and may touch the filesystem, so they must not run
    /// on the async workers.
    pub async fn call<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn PatientCrud) -> T + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| ApiError::internal(format!("Internal error. {e}")))
    }
}
