use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Article, Supplier};

/// One article/quantity/price entry of a draft order.
///
/// Fields are private so that `amount` always equals `quantity * unit_price`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    article: Article,
    quantity: f64,
    unit_price: f64,
    amount: f64,
}

impl LineItem {
    pub fn new(article: Article, quantity: f64, unit_price: f64) -> Self {
        Self {
            article,
            quantity,
            unit_price,
            amount: quantity * unit_price,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recompute();
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.amount = self.quantity * self.unit_price;
    }
}

/// An order being assembled in the creation form. Never persisted as-is.
#[derive(Debug, Clone)]
pub struct DraftOrder {
    pub date: NaiveDate,
    pub supplier: Option<Supplier>,
    /// Supplier-side document reference (delivery note, quote number)
    pub reference: String,
    /// Procurement number; generated on submission when blank
    pub internal_reference: String,
    pub notes: String,
    pub line_items: Vec<LineItem>,
    pub total_amount: f64,
}

impl DraftOrder {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            supplier: None,
            reference: String::new(),
            internal_reference: String::new(),
            notes: String::new(),
            line_items: Vec::new(),
            total_amount: 0.0,
        }
    }

    pub fn recompute_total(&mut self) {
        self.total_amount = self.line_items.iter().map(LineItem::amount).sum();
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Received,
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Received => write!(f, "Received"),
            OrderStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// The persisted projection of a submitted order. Supplier and articles are
/// flattened to their display names at creation time.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListedOrder {
    pub id: String,
    pub reference: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub supplier_name: String,
    #[serde(default)]
    pub article_names: Vec<String>,
    pub total_amount: f64,
    pub status: OrderStatus,
}

/// Dates are stored as `YYYY-MM-DD`; full RFC 3339 timestamps are accepted on
/// load and truncated to their date.
mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.date_naive()))
            .map_err(|_| D::Error::custom(format!("invalid ISO date '{raw}'")))
    }
}
