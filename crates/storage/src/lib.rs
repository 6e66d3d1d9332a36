#![warn(clippy::pedantic)]

use std::{fs, path::PathBuf};

use liftdex_domain::{Catalog, CatalogRepository, LoadError, StorageError};
use log::{debug, error};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogRepository for FileStore {
    fn load_catalog(&self) -> Result<Catalog, LoadError> {
        let dataset = fs::read_to_string(&self.path).map_err(|err| {
            error!("failed to read dataset {}: {err}", self.path.display());
            StorageError::from(err)
        })?;

        debug!(
            "read dataset {} ({} bytes)",
            self.path.display(),
            dataset.len()
        );

        Ok(Catalog::from_dataset(&dataset)?)
    }
}
