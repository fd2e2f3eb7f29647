use chrono::NaiveDate;
use tracing::debug;

use super::fields::{validate_line, EntryTouched, HeaderFields, HeaderTouched, LineItemEntry};
use crate::error::{ProcureError, Result};
use crate::model::{Article, DraftOrder, LineItem, ListedOrder, Supplier};
use crate::service::OrderService;
use crate::storage::KeyValueStore;

/// Collects a new order: header fields plus an accumulating list of line
/// items with a running total.
pub struct OrderForm {
    suppliers: Vec<Supplier>,
    articles: Vec<Article>,
    header: HeaderFields,
    header_touched: HeaderTouched,
    entry: LineItemEntry,
    entry_touched: EntryTouched,
    line_items: Vec<LineItem>,
    total_amount: f64,
}

impl OrderForm {
    pub fn new(suppliers: Vec<Supplier>, articles: Vec<Article>, today: NaiveDate) -> Self {
        Self {
            suppliers,
            articles,
            header: HeaderFields::new(today),
            header_touched: HeaderTouched::default(),
            entry: LineItemEntry::default(),
            entry_touched: EntryTouched::default(),
            line_items: Vec::new(),
            total_amount: 0.0,
        }
    }

    /// A form backed by the service's current catalogs.
    pub fn for_service<S: KeyValueStore>(service: &OrderService<S>, today: NaiveDate) -> Self {
        Self::new(service.list_suppliers(), service.list_articles(), today)
    }

    pub fn header(&self) -> &HeaderFields {
        &self.header
    }

    pub fn header_touched(&self) -> HeaderTouched {
        self.header_touched
    }

    pub fn entry(&self) -> &LineItemEntry {
        &self.entry
    }

    pub fn entry_touched(&self) -> EntryTouched {
        self.entry_touched
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.header.date = date;
        self.header_touched.date = true;
    }

    pub fn select_supplier(&mut self, supplier_id: &str) -> Result<()> {
        self.header_touched.supplier = true;
        self.header.supplier = self.suppliers.iter().find(|s| s.id == supplier_id).cloned();
        match self.header.supplier {
            Some(_) => Ok(()),
            None => Err(ProcureError::SupplierNotFound(supplier_id.to_string())),
        }
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.header.reference = reference.into();
        self.header_touched.reference = true;
    }

    pub fn set_internal_reference(&mut self, reference: impl Into<String>) {
        self.header.internal_reference = reference.into();
        self.header_touched.internal_reference = true;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.header.notes = notes.into();
        self.header_touched.notes = true;
    }

    pub fn select_article(&mut self, article_id: &str) -> Result<()> {
        self.entry_touched.article = true;
        self.entry.article = self.articles.iter().find(|a| a.id == article_id).cloned();
        match self.entry.article {
            Some(_) => Ok(()),
            None => Err(ProcureError::ArticleNotFound(article_id.to_string())),
        }
    }

    pub fn set_quantity(&mut self, quantity: Option<f64>) {
        self.entry.quantity = quantity;
        self.entry_touched.quantity = true;
    }

    pub fn set_unit_price(&mut self, unit_price: Option<f64>) {
        self.entry.unit_price = unit_price;
        self.entry_touched.unit_price = true;
    }

    pub fn entry_amount(&self) -> Option<f64> {
        self.entry.amount()
    }

    /// Move the entry group into the draft as a new line item.
    pub fn add_line_item(&mut self) -> Result<&LineItem> {
        let item = match self.entry.to_line_item() {
            Ok(item) => item,
            Err(e) => {
                self.entry_touched.mark_all();
                return Err(e);
            }
        };

        debug!(article = %item.article().name, amount = item.amount(), "line item added");
        self.line_items.push(item);
        self.entry = LineItemEntry::default();
        self.entry_touched = EntryTouched::default();
        self.recompute_total();

        Ok(&self.line_items[self.line_items.len() - 1])
    }

    /// Change quantity and price of an existing line item.
    pub fn edit_line_item(&mut self, index: usize, quantity: f64, unit_price: f64) -> Result<()> {
        let Some(item) = self.line_items.get_mut(index) else {
            return Ok(());
        };
        validate_line(&item.article().name, quantity, unit_price)?;

        item.set_quantity(quantity);
        item.set_unit_price(unit_price);
        self.recompute_total();
        Ok(())
    }

    pub fn remove_line_item(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.line_items.len() {
            return None;
        }
        let removed = self.line_items.remove(index);
        self.recompute_total();
        Some(removed)
    }

    pub fn is_valid(&self) -> bool {
        self.header.validate().is_ok() && !self.line_items.is_empty()
    }

    /// Hand the completed order to the service.
    ///
    /// An invalid header or an empty item list marks every header field as
    /// touched and fails with [`ProcureError::IncompleteOrder`].
    pub fn submit<S: KeyValueStore>(&mut self, service: &mut OrderService<S>) -> Result<ListedOrder> {
        let Some(draft) = self.draft() else {
            self.header_touched.mark_all();
            return Err(ProcureError::IncompleteOrder);
        };
        service.add_order(draft)
    }

    /// Clear everything and start over with `today` as the date.
    pub fn cancel(&mut self, today: NaiveDate) {
        self.header = HeaderFields::new(today);
        self.header_touched = HeaderTouched::default();
        self.entry = LineItemEntry::default();
        self.entry_touched = EntryTouched::default();
        self.line_items.clear();
        self.total_amount = 0.0;
    }

    fn draft(&self) -> Option<DraftOrder> {
        if !self.is_valid() {
            return None;
        }
        let date = self.header.date?;

        let mut draft = DraftOrder::new(date);
        draft.supplier = self.header.supplier.clone();
        draft.reference = self.header.reference.clone();
        draft.internal_reference = self.header.internal_reference.clone();
        draft.notes = self.header.notes.clone();
        draft.line_items = self.line_items.clone();
        draft.recompute_total();
        Some(draft)
    }

    fn recompute_total(&mut self) {
        self.total_amount = self.line_items.iter().map(LineItem::amount).sum();
    }
}
