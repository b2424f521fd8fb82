pub mod error;
pub mod trait_client;
pub mod memory;
pub mod seed;
pub mod builder;

pub use error::{PersistError, Result};
pub use trait_client::{EntityCounts, StorageClient};
pub use memory::InMemoryStorage;
pub use builder::StorageBuilder;
