mod catalog;
mod order;
mod query;

pub use catalog::{Article, Supplier};
pub use order::{DraftOrder, LineItem, ListedOrder, OrderStatus};
pub use query::{FilterCriteria, Statistics};
