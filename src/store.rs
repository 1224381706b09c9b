// Catalogue Store - owns the durable CSV representation
//
// The store path is explicit configuration, handed in at construction.
// Persistence is whole-file replacement: header row + one row per product,
// in catalogue order. Absent numerics and timestamps are empty fields.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};

use crate::catalog::{Catalogue, ProductRecord};
use crate::error::StorageError;
use crate::seed::seed_catalogue;

pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Materialize the store from the seed set if no catalogue file exists,
    /// then return the loaded result. Idempotent when the file is present.
    pub fn bootstrap(&self) -> Result<Catalogue, StorageError> {
        if !self.path.exists() {
            self.persist(&seed_catalogue())?;
        }
        self.read()
    }

    /// Return the persisted catalogue, bootstrapping when absent.
    pub fn load(&self) -> Result<Catalogue, StorageError> {
        if self.path.exists() {
            self.read()
        } else {
            self.bootstrap()
        }
    }

    /// Overwrite the durable store with the given catalogue.
    pub fn persist(&self, catalogue: &[ProductRecord]) -> Result<(), StorageError> {
        let mut writer = Writer::from_path(&self.path).map_err(|source| {
            StorageError::Unwritable {
                path: self.path.clone(),
                source,
            }
        })?;

        for record in catalogue {
            // Header row is emitted automatically on the first serialize
            writer
                .serialize(record)
                .map_err(|source| StorageError::Unwritable {
                    path: self.path.clone(),
                    source,
                })?;
        }

        writer.flush().map_err(|e| StorageError::Unwritable {
            path: self.path.clone(),
            source: csv::Error::from(e),
        })?;

        Ok(())
    }

    fn read(&self) -> Result<Catalogue, StorageError> {
        let file = File::open(&self.path).map_err(|source| StorageError::Unreadable {
            path: self.path.clone(),
            source,
        })?;

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut catalogue = Vec::new();
        for result in reader.deserialize() {
            let record: ProductRecord = result.map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
            catalogue.push(record);
        }

        Ok(catalogue)
    }
}

// ============================================================================
// TESTS
// ============================================================================
