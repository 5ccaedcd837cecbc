//! PS3 title database: CSV loading and title-ID lookup.

pub mod error;
pub mod index;
pub mod titles;

pub use error::DbError;
pub use index::TitleIndex;
pub use titles::{TitleId, TitleRecord, load_title_csv, parse_title_csv};
