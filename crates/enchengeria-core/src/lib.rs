pub mod collation;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod history;
pub mod preprocess;
pub mod query;
pub mod state;
pub mod storage;
pub mod word_of_day;

#[cfg(test)]
pub(crate) mod test_support;

pub use dictionary::{Dictionary, DictionaryMetadata, Entry, LoadError};
pub use engine::QueryEngine;
pub use error::StorageError;
pub use query::{Filters, compute_results, distinct_parts_of_speech};
pub use state::UserState;
pub use storage::{MemoryStorage, Storage};
