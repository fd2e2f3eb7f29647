use chrono::NaiveDate;

use crate::error::{ProcureError, Result};
use crate::model::{Article, LineItem, Supplier};

/// Order header inputs. Date and supplier are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFields {
    pub date: Option<NaiveDate>,
    pub supplier: Option<Supplier>,
    pub reference: String,
    pub internal_reference: String,
    pub notes: String,
}

impl HeaderFields {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.date.is_none() {
            return Err(ProcureError::MissingDate);
        }
        if self.supplier.is_none() {
            return Err(ProcureError::MissingSupplier);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderTouched {
    pub date: bool,
    pub supplier: bool,
    pub reference: bool,
    pub internal_reference: bool,
    pub notes: bool,
}

impl HeaderTouched {
    pub fn mark_all(&mut self) {
        *self = Self {
            date: true,
            supplier: true,
            reference: true,
            internal_reference: true,
            notes: true,
        };
    }
}

/// The line item being typed in, before it is added to the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemEntry {
    pub article: Option<Article>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
}

impl LineItemEntry {
    /// Preview of `quantity * unit_price` while both are filled in.
    pub fn amount(&self) -> Option<f64> {
        Some(self.quantity? * self.unit_price?)
    }

    /// Build a line item; quantity must be at least 1 and the price not negative.
    pub fn to_line_item(&self) -> Result<LineItem> {
        let article = self.article.clone().ok_or(ProcureError::MissingArticle)?;

        let Some(quantity) = self.quantity else {
            return Err(ProcureError::InvalidQuantity {
                article: article.name,
                qty: String::new(),
            });
        };
        let Some(unit_price) = self.unit_price else {
            return Err(ProcureError::InvalidUnitPrice {
                article: article.name,
                price: String::new(),
            });
        };

        validate_line(&article.name, quantity, unit_price)?;
        Ok(LineItem::new(article, quantity, unit_price))
    }
}

/// Quantity and price must be finite, within bounds, and multiply to a
/// finite amount. Anything else cannot be stored as JSON.
pub(crate) fn validate_line(article: &str, quantity: f64, unit_price: f64) -> Result<()> {
    if !(quantity.is_finite() && quantity >= 1.0) {
        return Err(ProcureError::InvalidQuantity {
            article: article.to_string(),
            qty: quantity.to_string(),
        });
    }
    if !(unit_price.is_finite() && unit_price >= 0.0 && (quantity * unit_price).is_finite()) {
        return Err(ProcureError::InvalidUnitPrice {
            article: article.to_string(),
            price: unit_price.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryTouched {
    pub article: bool,
    pub quantity: bool,
    pub unit_price: bool,
}

impl EntryTouched {
    pub fn mark_all(&mut self) {
        *self = Self {
            article: true,
            quantity: true,
            unit_price: true,
        };
    }
}
