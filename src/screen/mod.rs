mod debounce;
mod list;
mod pagination;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use list::ListScreen;
pub use pagination::{Pagination, PAGE_SIZE};
