mod counter;
mod orders;
mod query;
mod subscription;

pub use counter::{format_reference, Counter};
pub use orders::{OrderService, DEFAULT_REFERENCE_PREFIX};
pub use query::{aggregate_at, filter_orders, period_label};
pub use subscription::Subscription;
