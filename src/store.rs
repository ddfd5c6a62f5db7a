use serde_json::Value;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::fs;

/// The two JSON documents the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Clients,
    Vehicles,
}

impl Dataset {
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Clients => "clients.json",
            Dataset::Vehicles => "vehicles.json",
        }
    }

    /// Message returned to callers when the dataset cannot be loaded.
    pub fn error_message(self) -> &'static str {
        match self {
            Dataset::Clients => "Error cargando clientes",
            Dataset::Vehicles => "Error cargando vehículos",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Clients => f.write_str("clients"),
            Dataset::Vehicles => f.write_str("vehicles"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// DATA STORE - Read-only directory holding the JSON documents
// ============================================================================
/// Every `load` goes to disk; nothing is cached and the content is never
/// inspected beyond being valid JSON.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(dataset.file_name())
    }

    pub async fn load(&self, dataset: Dataset) -> Result<Value, DataLoadError> {
        let path = self.path_of(dataset);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) => return Err(DataLoadError::Read { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse { path, source })
    }
}

/// Number of records in a loaded document, for logging only.
pub fn record_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
        _ => 1,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{
        ops::Deref,
        path::{Path, PathBuf},
    };

    /// Scratch data directory under `target/test-data/<uuid>`, removed on drop.
    pub struct TempDataDir(PathBuf);

    impl TempDataDir {
        pub fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Deref for TempDataDir {
        type Target = Path;

        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempDataDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    pub fn temp_data_dir() -> TempDataDir {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("target/test-data")
            .join(uuid::Uuid::new_v4().to_string());
        std::fs::create_dir_all(&dir).unwrap();
        TempDataDir(dir)
    }
}
