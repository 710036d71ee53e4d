pub mod error;
pub mod loader;
pub mod models;

pub use error::DataError;
pub use loader::{load, DataSource};

use crate::domain::Record;

/// The loaded dataset. Read-only once built.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
