use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use crate::model::{Article, FilterCriteria, ListedOrder, Statistics, Supplier};

/// Select the orders matching every non-empty criterion, keeping source order.
///
/// Supplier and article ids resolve to names through the given catalogs; an
/// id missing from its catalog matches nothing.
pub fn filter_orders(
    orders: &[ListedOrder],
    criteria: &FilterCriteria,
    suppliers: &[Supplier],
    articles: &[Article],
) -> Vec<ListedOrder> {
    let search = criteria.search_text.to_lowercase();

    let supplier_name = (!criteria.supplier_id.is_empty()).then(|| {
        suppliers
            .iter()
            .find(|s| s.id == criteria.supplier_id)
            .map(|s| s.name.as_str())
            .unwrap_or("")
    });

    let article_name = (!criteria.article_id.is_empty()).then(|| {
        articles
            .iter()
            .find(|a| a.id == criteria.article_id)
            .map(|a| a.name.as_str())
    });

    let filtered: Vec<ListedOrder> = orders
        .iter()
        .filter(|o| {
            search.is_empty()
                || o.reference.to_lowercase().contains(&search)
                || o.supplier_name.to_lowercase().contains(&search)
                || o.article_names
                    .iter()
                    .any(|a| a.to_lowercase().contains(&search))
        })
        .filter(|o| supplier_name.map_or(true, |name| o.supplier_name == name))
        .filter(|o| match article_name {
            None => true,
            Some(None) => false,
            Some(Some(name)) => o.article_names.iter().any(|a| a == name),
        })
        .filter(|o| criteria.date_from.map_or(true, |d| o.date >= d))
        .filter(|o| criteria.date_to.map_or(true, |d| o.date <= d))
        .cloned()
        .collect();

    debug!(
        source = orders.len(),
        matched = filtered.len(),
        "filtered orders"
    );
    filtered
}

/// Compute statistics over `orders`, labelling the period with `today`.
pub fn aggregate_at(orders: &[ListedOrder], today: NaiveDate) -> Statistics {
    let total: f64 = orders.iter().map(|o| o.total_amount).sum();

    let mut by_supplier: IndexMap<&str, f64> = IndexMap::new();
    for order in orders {
        *by_supplier.entry(order.supplier_name.as_str()).or_insert(0.0) += order.total_amount;
    }

    // Strictly greater: the first supplier to reach the maximum keeps it.
    let mut top: Option<(&str, f64)> = None;
    for (&name, &amount) in &by_supplier {
        if amount > top.map_or(0.0, |(_, max)| max) {
            top = Some((name, amount));
        }
    }

    let top_amount = top.map_or(0.0, |(_, amount)| amount);
    let percentage = if total > 0.0 {
        (top_amount / total * 100.0).round() as u32
    } else {
        0
    };

    debug!(count = orders.len(), total, "aggregated orders");

    Statistics {
        total_amount: total,
        count: orders.len(),
        top_supplier_name: top.map(|(name, _)| name.to_string()),
        top_supplier_amount: top_amount,
        top_supplier_percentage: percentage,
        period: period_label(today),
    }
}

/// Month and year label, e.g. "October 2026"
pub fn period_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
