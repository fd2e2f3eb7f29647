use chrono::{Datelike, Local};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

use super::counter::Counter;
use super::query::{aggregate_at, filter_orders};
use super::subscription::{Publisher, Subscription};
use crate::error::{ProcureError, Result};
use crate::model::{Article, DraftOrder, FilterCriteria, ListedOrder, OrderStatus, Statistics, Supplier};
use crate::seed::{default_articles, default_orders, default_suppliers};
use crate::storage::{
    load_json, save_json, KeyValueStore, ARTICLES_KEY, COUNTER_KEY, ORDERS_KEY, SUPPLIERS_KEY,
};

pub const DEFAULT_REFERENCE_PREFIX: &str = "APP";

/// Owns the order list, mirrors it to storage and notifies subscribers.
pub struct OrderService<S: KeyValueStore> {
    store: S,
    orders: Vec<ListedOrder>,
    counter: Counter,
    reference_prefix: String,
    publisher: Publisher,
}

impl<S: KeyValueStore> OrderService<S> {
    /// Load state from `store`, seeding anything that is missing.
    pub fn open(mut store: S) -> Result<Self> {
        let mut orders = load_orders(&store).unwrap_or_default();
        if orders.is_empty() {
            orders = default_orders();
            save_json(&mut store, ORDERS_KEY, &orders)?;
            info!(count = orders.len(), "seeded default orders");
        }

        seed_catalog(&mut store, SUPPLIERS_KEY, &default_suppliers())?;
        seed_catalog(&mut store, ARTICLES_KEY, &default_articles())?;

        let counter =
            load_json::<Counter, _>(&store, COUNTER_KEY).unwrap_or_else(|| Counter::derive_from(&orders));

        Ok(Self {
            store,
            orders,
            counter,
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
            publisher: Publisher::default(),
        })
    }

    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_prefix = prefix.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current snapshot, most recent first.
    pub fn orders(&self) -> &[ListedOrder] {
        &self.orders
    }

    pub fn list_suppliers(&self) -> Vec<Supplier> {
        load_json(&self.store, SUPPLIERS_KEY).unwrap_or_default()
    }

    pub fn list_articles(&self) -> Vec<Article> {
        load_json(&self.store, ARTICLES_KEY).unwrap_or_default()
    }

    pub fn subscribe_orders(&mut self) -> Subscription {
        self.publisher.subscribe(&self.orders)
    }

    pub fn subscriber_count(&self) -> usize {
        self.publisher.len()
    }

    /// Record a submitted draft as a new pending order at the top of the list.
    pub fn add_order(&mut self, draft: DraftOrder) -> Result<ListedOrder> {
        if !draft.total_amount.is_finite() {
            return Err(ProcureError::InvalidTotal(draft.total_amount));
        }

        let id = self.counter.next_id(&self.orders);
        let reference = match draft.internal_reference.trim() {
            "" => self.counter.next_reference(
                &self.reference_prefix,
                Local::now().year(),
                &self.orders,
            ),
            explicit => explicit.to_string(),
        };

        let order = ListedOrder {
            id,
            reference,
            date: draft.date,
            supplier_name: draft.supplier.map(|s| s.name).unwrap_or_default(),
            article_names: draft
                .line_items
                .iter()
                .map(|item| item.article().name.clone())
                .collect(),
            total_amount: draft.total_amount,
            status: OrderStatus::Pending,
        };

        self.orders.insert(0, order.clone());
        self.publisher.publish(&self.orders);
        info!(id = %order.id, reference = %order.reference, "added order");

        save_json(&mut self.store, ORDERS_KEY, &self.orders)?;
        save_json(&mut self.store, COUNTER_KEY, &self.counter)?;
        Ok(order)
    }

    /// Remove the order with `id`. Returns false, without writing, when there
    /// is no such order.
    pub fn delete_order(&mut self, id: &str) -> Result<bool> {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        if self.orders.len() == before {
            return Ok(false);
        }

        self.publisher.publish(&self.orders);
        info!(id, "deleted order");
        save_json(&mut self.store, ORDERS_KEY, &self.orders)?;
        Ok(true)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<ListedOrder> {
        let suppliers = if criteria.supplier_id.is_empty() {
            Vec::new()
        } else {
            self.list_suppliers()
        };
        let articles = if criteria.article_id.is_empty() {
            Vec::new()
        } else {
            self.list_articles()
        };
        filter_orders(&self.orders, criteria, &suppliers, &articles)
    }

    pub fn aggregate(&self, orders: &[ListedOrder]) -> Statistics {
        aggregate_at(orders, Local::now().date_naive())
    }
}

/// Write the default catalog only when the key is absent. A key that cannot
/// be read is left alone.
fn seed_catalog<S, T>(store: &mut S, key: &str, defaults: &T) -> Result<()>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    match store.get(key) {
        Ok(Some(_)) => {}
        Ok(None) => {
            save_json(store, key, defaults)?;
            info!(key, "seeded catalog");
        }
        Err(e) => warn!(key, error = %e, "catalog unreadable, not overwriting"),
    }
    Ok(())
}

/// Strict load of the order list: a bad shape or duplicate ids count as absent.
fn load_orders<S: KeyValueStore>(store: &S) -> Option<Vec<ListedOrder>> {
    let orders: Vec<ListedOrder> = load_json(store, ORDERS_KEY)?;

    let mut seen = HashSet::new();
    if let Some(dup) = orders.iter().find(|o| !seen.insert(o.id.as_str())) {
        warn!(id = %dup.id, "stored orders contain a duplicate id, treating as absent");
        return None;
    }
    Some(orders)
}
