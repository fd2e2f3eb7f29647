use chrono::{Local, NaiveDate};
use std::time::Instant;

use super::debounce::{Debouncer, SEARCH_DEBOUNCE};
use super::pagination::Pagination;
use crate::error::Result;
use crate::model::{Article, FilterCriteria, ListedOrder, Statistics, Supplier};
use crate::service::{aggregate_at, filter_orders, OrderService, Subscription};
use crate::storage::KeyValueStore;

/// State behind the order list: filters, the current page and statistics.
///
/// Statistics always cover the whole filtered set, not just the visible page.
pub struct ListScreen {
    criteria: FilterCriteria,
    orders: Vec<ListedOrder>,
    filtered: Vec<ListedOrder>,
    pagination: Pagination,
    statistics: Statistics,
    suppliers: Vec<Supplier>,
    articles: Vec<Article>,
    search: Debouncer<String>,
    subscription: Subscription,
}

impl ListScreen {
    pub fn open<S: KeyValueStore>(service: &mut OrderService<S>) -> Self {
        let subscription = service.subscribe_orders();
        let orders = subscription.latest().unwrap_or_default();

        let mut screen = Self {
            criteria: FilterCriteria::default(),
            orders,
            filtered: Vec::new(),
            pagination: Pagination::default(),
            statistics: Statistics::default(),
            suppliers: service.list_suppliers(),
            articles: service.list_articles(),
            search: Debouncer::new(SEARCH_DEBOUNCE, String::new()),
            subscription,
        };
        screen.apply();
        screen
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn all_orders(&self) -> &[ListedOrder] {
        &self.orders
    }

    pub fn filtered_orders(&self) -> &[ListedOrder] {
        &self.filtered
    }

    pub fn visible_orders(&self) -> &[ListedOrder] {
        &self.filtered[self.pagination.range(self.filtered.len())]
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Replace every criterion at once, search text included, and apply.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.search.reset(criteria.search_text.clone());
        self.criteria = criteria;
        self.apply();
    }

    pub fn set_supplier(&mut self, supplier_id: impl Into<String>) {
        self.criteria.supplier_id = supplier_id.into();
        self.apply();
    }

    pub fn set_article(&mut self, article_id: impl Into<String>) {
        self.criteria.article_id = article_id.into();
        self.apply();
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.criteria.date_from = date;
        self.apply();
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.criteria.date_to = date;
        self.apply();
    }

    pub fn reset_filters(&mut self) {
        self.apply_criteria(FilterCriteria::default());
    }

    /// Record a keystroke in the search box. Takes effect through `tick`.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search.input(text.into(), now);
    }

    /// Apply the search text once typing has settled. Returns whether the
    /// view was recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(text) => {
                self.criteria.search_text = text;
                self.apply();
                true
            }
            None => false,
        }
    }

    /// Pick up the newest list published by the service, if any.
    pub fn refresh(&mut self) -> bool {
        match self.subscription.latest() {
            Some(orders) => {
                self.orders = orders;
                self.apply();
                true
            }
            None => false,
        }
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page)
    }

    /// Delete `id` after `confirm` approves it. A declined confirmation or an
    /// unknown id does nothing. Pending snapshots are drained first so an
    /// order added since the last refresh can be found.
    pub fn delete<S, F>(&mut self, service: &mut OrderService<S>, id: &str, confirm: F) -> Result<bool>
    where
        S: KeyValueStore,
        F: FnOnce(&ListedOrder) -> bool,
    {
        self.refresh();
        let Some(order) = self.orders.iter().find(|o| o.id == id) else {
            return Ok(false);
        };
        if !confirm(order) {
            return Ok(false);
        }

        let removed = service.delete_order(id)?;
        self.refresh();
        Ok(removed)
    }

    pub fn close(self) {
        self.subscription.unsubscribe();
    }

    fn apply(&mut self) {
        self.filtered = filter_orders(&self.orders, &self.criteria, &self.suppliers, &self.articles);
        self.pagination.reset(self.filtered.len());
        self.statistics = aggregate_at(&self.filtered, Local::now().date_naive());
    }
}
