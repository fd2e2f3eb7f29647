use chrono::NaiveDate;

/// List screen filter state. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub supplier_id: String,
    pub article_id: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Aggregates over a filtered set of orders. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total_amount: f64,
    pub count: usize,
    pub top_supplier_name: Option<String>,
    pub top_supplier_amount: f64,
    pub top_supplier_percentage: u32,
    /// Calendar month of evaluation, e.g. "October 2026"
    pub period: String,
}
