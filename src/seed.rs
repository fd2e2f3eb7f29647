use chrono::NaiveDate;

use crate::model::{Article, ListedOrder, OrderStatus, Supplier};

pub fn default_suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new("1", "Sidy SARL TEXTILE"),
        Supplier::new("2", "Mercerie DU COINS"),
        Supplier::new("3", "Tissus Premium"),
        Supplier::new("4", "Fournisseur I"),
        Supplier::new("5", "Fournisseur II"),
    ]
}

pub fn default_articles() -> Vec<Article> {
    vec![
        Article::new("1", "Ordinateur portable"),
        Article::new("2", "Souris sans casques"),
        Article::new("3", "Clavier"),
        Article::new("4", "Clés Usb"),
        Article::new("5", "Caméra HD"),
        Article::new("6", "Imprimante laser"),
        Article::new("7", "Papier A4"),
    ]
}

/// Orders used to bootstrap empty storage, most recent first.
pub fn default_orders() -> Vec<ListedOrder> {
    vec![
        seed_order(
            "1",
            "APP-2023-001",
            (2023, 4, 19),
            "SIDY DIOP SARL",
            &["Ordinateur portable", "Souris sans fil", "Clavier mécanique"],
            750_000.0,
            OrderStatus::Received,
        ),
        seed_order(
            "2",
            "APP-2023-002",
            (2023, 4, 10),
            "Mercerie DU COINS",
            &["Écran 24 pouces", "Camera HD"],
            320_000.0,
            OrderStatus::Received,
        ),
        seed_order(
            "3",
            "APP-2023-003",
            (2023, 4, 6),
            "Tissus Premium",
            &["Imprimante laser", "Papier A32"],
            450_000.0,
            OrderStatus::Pending,
        ),
        seed_order(
            "4",
            "APP-2023-004",
            (2023, 4, 1),
            "Textiles Dakar SARL",
            &["Chaises de bureau", "Bureau réglable", "Lampe de bureau"],
            680_000.0,
            OrderStatus::Received,
        ),
        seed_order(
            "5",
            "APP-2023-005",
            (2023, 3, 26),
            "Mercerie Centrale",
            &["Téléphone IP", "Casque audio"],
            520_000.0,
            OrderStatus::Received,
        ),
    ]
}

fn seed_order(
    id: &str,
    reference: &str,
    (year, month, day): (i32, u32, u32),
    supplier_name: &str,
    article_names: &[&str],
    total_amount: f64,
    status: OrderStatus,
) -> ListedOrder {
    ListedOrder {
        id: id.to_string(),
        reference: reference.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        supplier_name: supplier_name.to_string(),
        article_names: article_names.iter().map(|s| s.to_string()).collect(),
        total_amount,
        status,
    }
}
