//! DataTable Component
//!
//! A table with a checkbox column whose checked set is owned by the caller.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth};
pub use data_table::{DataTable, TableRow};
pub use pagination::Pagination;
