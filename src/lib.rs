pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod screen;
pub mod seed;
pub mod service;
pub mod storage;

pub use config::Config;
pub use error::{ProcureError, Result};
pub use form::OrderForm;
pub use model::{Article, DraftOrder, FilterCriteria, LineItem, ListedOrder, OrderStatus, Statistics, Supplier};
pub use screen::{ListScreen, Pagination};
pub use service::{OrderService, Subscription};
pub use storage::{DirStore, KeyValueStore, MemoryStore};
