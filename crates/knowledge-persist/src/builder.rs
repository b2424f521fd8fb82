use crate::error::Result;
use crate::memory::{InMemoryStorage, Tables};
use crate::seed;

/// Builds the process-wide `InMemoryStorage`.
///
/// Sample data is loaded by default; call `.seed(false)` for an empty store.
pub struct StorageBuilder {
    seed: bool,
}

impl StorageBuilder {
    pub fn new() -> Self {
        Self { seed: true }
    }
    
    pub fn seed(mut self, enabled: bool) -> Self {
        self.seed = enabled;
        self
    }
    
    pub fn build(self) -> Result<InMemoryStorage> {
        let mut tables = Tables::new();
        if self.seed {
            seed::populate(&mut tables)?;
        }
        Ok(InMemoryStorage::from_tables(tables))
    }
}

impl Default for StorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
