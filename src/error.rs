use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcureError {
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Data directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Supplier '{0}' not found. Use 'procure suppliers' to see the catalog.")]
    SupplierNotFound(String),

    #[error("Article '{0}' not found. Use 'procure articles' to see the catalog.")]
    ArticleNotFound(String),

    #[error("No article selected for the line item")]
    MissingArticle,

    #[error("Invalid quantity '{qty}' for article '{article}': must be a finite number of at least 1")]
    InvalidQuantity { article: String, qty: String },

    #[error("Invalid unit price '{price}' for article '{article}': must be a finite number, zero or more")]
    InvalidUnitPrice { article: String, price: String },

    #[error("Order total {0} is not a finite amount")]
    InvalidTotal(f64),

    #[error("No supplier selected")]
    MissingSupplier,

    #[error("No order date set")]
    MissingDate,

    #[error("Please fill in all required fields and add at least one article.")]
    IncompleteOrder,

    #[error("Invalid item format '{0}'. Expected 'article:quantity@price' (e.g., '1:2@150000')")]
    InvalidItemFormat(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid page {page} (only {total} page(s) available)")]
    InvalidPage { page: usize, total: usize },

    #[error("Failed to access storage key '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode stored data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcureError>;
