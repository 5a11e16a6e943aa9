//! JSON file persistence for the customer collection
//!
//! The whole collection is rewritten on every save. Writes go to a sibling
//! temporary file which is then renamed over the target, so readers see
//! either the old or the new collection and never a truncated one.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{Customer, ProcessId, codec, process_debug, process_warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{ApiError, ApiResult};
use crate::traits::CustomerPersistence;

const DEFAULT_FILE_NAME: &str = "customers.json";

/// File backed persistence
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next save is staged in
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_FILE_NAME));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> ApiError {
        ApiError::Persistence {
            path: self.path.display().to_string(),
            source,
        }
    }

    async fn write_staged(&self, staged: &Path, content: &str) -> std::io::Result<()> {
        let mut file = fs::File::create(staged).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        file.sync_all().await
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

#[async_trait]
impl CustomerPersistence for JsonFileStore {
    async fn load(&self) -> ApiResult<Vec<Customer>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let customers = codec::decode_collection(&content)?;
                process_debug!(
                    ProcessId::current(),
                    "📂 Loaded {} customers from {}",
                    customers.len(),
                    self.path.display()
                );
                Ok(customers)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                process_warn!(
                    ProcessId::current(),
                    "⚠️ Data file {} not found, starting with an empty collection",
                    self.path.display()
                );
                Ok(Vec::new())
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn save(&self, customers: &[Customer]) -> ApiResult<()> {
        let content = codec::encode_collection(customers)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| self.io_error(e))?;
            }
        }

        let staged = self.temp_path();
        if let Err(e) = self.write_staged(&staged, &content).await {
            let _ = fs::remove_file(&staged).await;
            return Err(self.io_error(e));
        }

        if let Err(e) = fs::rename(&staged, &self.path).await {
            let _ = fs::remove_file(&staged).await;
            return Err(self.io_error(e));
        }

        process_debug!(
            ProcessId::current(),
            "💾 Wrote {} customers to {}",
            customers.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
