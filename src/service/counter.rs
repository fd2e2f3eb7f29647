use serde::{Deserialize, Serialize};

use crate::model::ListedOrder;

/// Persisted sequence state for order ids and generated references.
///
/// Both values only ever grow, so deleting an order never frees a number
/// for reuse.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Counter {
    pub last_number: u32,
    #[serde(default)]
    pub last_id: u64,
}

impl Counter {
    /// Starting point for a list that has no stored counter yet.
    pub fn derive_from(orders: &[ListedOrder]) -> Self {
        let max_id = orders
            .iter()
            .filter_map(|o| o.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            last_number: orders.len() as u32,
            last_id: max_id.max(orders.len() as u64),
        }
    }

    pub fn next_id(&mut self, orders: &[ListedOrder]) -> String {
        loop {
            self.last_id += 1;
            let id = self.last_id.to_string();
            if !orders.iter().any(|o| o.id == id) {
                return id;
            }
        }
    }

    pub fn next_reference(&mut self, prefix: &str, year: i32, orders: &[ListedOrder]) -> String {
        loop {
            self.last_number += 1;
            let reference = format_reference(prefix, year, self.last_number);
            if !orders.iter().any(|o| o.reference == reference) {
                return reference;
            }
        }
    }
}

/// Format a reference like `APP-2026-007`
pub fn format_reference(prefix: &str, year: i32, seq: u32) -> String {
    format!("{prefix}-{year}-{seq:03}")
}
