mod fields;
mod order_form;

pub use fields::{EntryTouched, HeaderFields, HeaderTouched, LineItemEntry};
pub use order_form::OrderForm;
