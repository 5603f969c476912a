//! Client-side paging, sorting and filtering of lists already fetched from the backend.

mod fields;
pub mod filter;
pub mod pagination;
pub mod sort;

pub use filter::{FieldValue, FilterSet, FilterValue, Filterable};
pub use pagination::{PageButton, Pagination};
pub use sort::{SortConfig, SortDirection, SortValue, Sortable};
