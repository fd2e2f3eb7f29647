use chrono::NaiveDate;
use procure::{MemoryStore, OrderForm, OrderService, OrderStatus, ProcureError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn setup() -> (OrderService<MemoryStore>, OrderForm) {
    let service = OrderService::open(MemoryStore::new()).unwrap();
    let form = OrderForm::for_service(&service, today());
    (service, form)
}

fn add_item(form: &mut OrderForm, article_id: &str, qty: f64, price: f64) {
    form.select_article(article_id).unwrap();
    form.set_quantity(Some(qty));
    form.set_unit_price(Some(price));
    form.add_line_item().unwrap();
}

#[test]
fn test_new_form_defaults_to_today() {
    let (_, form) = setup();
    assert_eq!(form.header().date, Some(today()));
    assert!(form.header().supplier.is_none());
    assert!(form.line_items().is_empty());
    assert_eq!(form.total_amount(), 0.0);
}

#[test]
fn test_entry_amount_preview() {
    let (_, mut form) = setup();
    assert_eq!(form.entry_amount(), None);

    form.set_quantity(Some(4.0));
    form.set_unit_price(Some(250.0));
    assert_eq!(form.entry_amount(), Some(1000.0));
}

#[test]
fn test_add_line_item_accumulates_total() {
    let (_, mut form) = setup();

    add_item(&mut form, "1", 2.0, 1000.0);
    add_item(&mut form, "7", 3.0, 500.0);

    assert_eq!(form.line_items().len(), 2);
    assert_eq!(form.line_items()[0].amount(), 2000.0);
    assert_eq!(form.line_items()[1].amount(), 1500.0);
    assert_eq!(form.total_amount(), 3500.0);

    // entry group is cleared after each add
    assert!(form.entry().article.is_none());
    assert_eq!(form.entry().quantity, None);
    assert!(!form.entry_touched().quantity);
}

#[test]
fn test_add_line_item_requires_article() {
    let (_, mut form) = setup();
    form.set_quantity(Some(1.0));
    form.set_unit_price(Some(10.0));

    let err = form.add_line_item().unwrap_err();
    assert!(matches!(err, ProcureError::MissingArticle));
    assert!(form.entry_touched().article);
    assert!(form.line_items().is_empty());
}

#[test]
fn test_add_line_item_rejects_zero_quantity() {
    let (_, mut form) = setup();
    form.select_article("2").unwrap();
    form.set_quantity(Some(0.0));
    form.set_unit_price(Some(10.0));

    let err = form.add_line_item().unwrap_err();
    assert!(matches!(err, ProcureError::InvalidQuantity { .. }));
    assert!(form.line_items().is_empty());
    assert_eq!(form.entry().quantity, Some(0.0));
}

#[test]
fn test_add_line_item_rejects_negative_price_but_allows_zero() {
    let (_, mut form) = setup();
    form.select_article("2").unwrap();
    form.set_quantity(Some(1.0));
    form.set_unit_price(Some(-1.0));
    assert!(matches!(
        form.add_line_item().unwrap_err(),
        ProcureError::InvalidUnitPrice { .. }
    ));

    form.set_unit_price(Some(0.0));
    assert_eq!(form.add_line_item().unwrap().amount(), 0.0);
}

#[test]
fn test_add_line_item_rejects_non_finite_values() {
    let (_, mut form) = setup();
    form.select_article("2").unwrap();

    form.set_quantity(Some(f64::INFINITY));
    form.set_unit_price(Some(10.0));
    assert!(matches!(
        form.add_line_item().unwrap_err(),
        ProcureError::InvalidQuantity { .. }
    ));

    form.set_quantity(Some(1.0));
    form.set_unit_price(Some(f64::NAN));
    assert!(matches!(
        form.add_line_item().unwrap_err(),
        ProcureError::InvalidUnitPrice { .. }
    ));

    // each factor is finite, the amount is not
    form.set_quantity(Some(1e308));
    form.set_unit_price(Some(1e308));
    assert!(matches!(
        form.add_line_item().unwrap_err(),
        ProcureError::InvalidUnitPrice { .. }
    ));
    assert!(form.line_items().is_empty());
    assert_eq!(form.total_amount(), 0.0);
}

#[test]
fn test_edit_line_item_rejects_non_finite_values() {
    let (_, mut form) = setup();
    add_item(&mut form, "1", 2.0, 1000.0);

    assert!(form.edit_line_item(0, f64::INFINITY, 1000.0).is_err());
    assert!(form.edit_line_item(0, 2.0, f64::INFINITY).is_err());
    assert!(form.edit_line_item(0, 1e308, 1e308).is_err());

    assert_eq!(form.line_items()[0].amount(), 2000.0);
    assert_eq!(form.total_amount(), 2000.0);
}

#[test]
fn test_unknown_catalog_ids_are_errors() {
    let (_, mut form) = setup();
    assert!(matches!(
        form.select_supplier("99").unwrap_err(),
        ProcureError::SupplierNotFound(_)
    ));
    assert!(matches!(
        form.select_article("99").unwrap_err(),
        ProcureError::ArticleNotFound(_)
    ));
}

#[test]
fn test_remove_and_edit_recompute_total() {
    let (_, mut form) = setup();
    add_item(&mut form, "1", 2.0, 1000.0);
    add_item(&mut form, "7", 3.0, 500.0);

    let removed = form.remove_line_item(0).unwrap();
    assert_eq!(removed.article().name, "Ordinateur portable");
    assert_eq!(form.total_amount(), 1500.0);
    assert!(form.remove_line_item(5).is_none());

    form.edit_line_item(0, 5.0, 500.0).unwrap();
    assert_eq!(form.line_items()[0].amount(), 2500.0);
    assert_eq!(form.total_amount(), 2500.0);

    assert!(form.edit_line_item(0, 0.5, 500.0).is_err());
    assert_eq!(form.total_amount(), 2500.0);
}

#[test]
fn test_submit_without_items_is_blocked() {
    let (mut service, mut form) = setup();
    form.select_supplier("3").unwrap();

    let err = form.submit(&mut service).unwrap_err();
    assert!(matches!(err, ProcureError::IncompleteOrder));
    assert_eq!(
        err.to_string(),
        "Please fill in all required fields and add at least one article."
    );
    assert!(form.header_touched().date);
    assert!(form.header_touched().notes);
    assert_eq!(service.orders().len(), 5);
}

#[test]
fn test_submit_without_supplier_is_blocked() {
    let (mut service, mut form) = setup();
    add_item(&mut form, "1", 1.0, 10.0);

    assert!(matches!(
        form.submit(&mut service).unwrap_err(),
        ProcureError::IncompleteOrder
    ));
    assert!(form.header_touched().supplier);
    assert_eq!(service.orders().len(), 5);
}

#[test]
fn test_submit_records_order() {
    let (mut service, mut form) = setup();
    form.select_supplier("3").unwrap();
    form.set_reference("BL-2210");
    form.set_notes("Livraison partielle");
    add_item(&mut form, "1", 2.0, 1000.0);
    add_item(&mut form, "7", 3.0, 500.0);

    let order = form.submit(&mut service).unwrap();

    assert_eq!(order.total_amount, 3500.0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.date, today());
    assert_eq!(order.supplier_name, "Tissus Premium");
    assert_eq!(order.article_names, vec!["Ordinateur portable", "Papier A4"]);
    assert_eq!(service.orders()[0], order);
    assert_eq!(service.orders().len(), 6);
}

#[test]
fn test_submit_uses_internal_reference() {
    let (mut service, mut form) = setup();
    form.select_supplier("1").unwrap();
    form.set_internal_reference("APP-SPECIAL-1");
    add_item(&mut form, "4", 10.0, 2500.0);

    let order = form.submit(&mut service).unwrap();
    assert_eq!(order.reference, "APP-SPECIAL-1");
    assert_eq!(order.total_amount, 25_000.0);
}

#[test]
fn test_cancel_clears_everything() {
    let (_, mut form) = setup();
    form.select_supplier("2").unwrap();
    form.set_notes("draft");
    add_item(&mut form, "1", 1.0, 10.0);
    form.select_article("3").unwrap();

    let tomorrow = today().succ_opt().unwrap();
    form.cancel(tomorrow);

    assert_eq!(form.header().date, Some(tomorrow));
    assert!(form.header().supplier.is_none());
    assert!(form.header().notes.is_empty());
    assert!(form.entry().article.is_none());
    assert!(form.line_items().is_empty());
    assert_eq!(form.total_amount(), 0.0);
}
