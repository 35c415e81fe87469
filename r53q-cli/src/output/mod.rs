//! Output formatting

mod table;

pub use table::Table;
