//! Data model for the relational view of a document

mod dataset;
mod schema;
mod table;

pub use dataset::Dataset;
pub use schema::Column;
pub use table::{CellValue, Row, Table};
