use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

use procure::config::{data_dir, load_config, CONFIG_TEMPLATE};
use procure::{
    Config, DirStore, FilterCriteria, ListScreen, OrderForm, OrderService, ProcureError, Result,
    Statistics,
};

#[derive(Parser)]
#[command(name = "procure")]
#[command(version, about = "Minimal CLI procurement tracking", long_about = None)]
struct Cli {
    /// Path to data directory (default: XDG data dir or ~/.procure)
    #[arg(short = 'C', long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with a config template and seed data
    Init,

    /// List orders, most recent first
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (10 orders per page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show statistics for the matching orders
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Record a new supply order
    Add {
        /// Supplier identifier (see 'procure suppliers')
        #[arg(short, long)]
        supplier: String,

        /// Line items in format "article:quantity@unit_price" (can be repeated)
        #[arg(short, long, value_name = "ARTICLE:QTY@PRICE")]
        item: Vec<String>,

        /// Order date (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Order reference (default: generated, e.g. APP-2026-006)
        #[arg(short, long)]
        reference: Option<String>,

        /// Supplier's own document reference
        #[arg(long)]
        supplier_ref: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an order
    Delete {
        /// Order id (see 'procure list')
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the supplier catalog
    Suppliers,

    /// List the article catalog
    Articles,
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive text matched against reference, supplier and articles
    #[arg(short = 's', long)]
    search: Option<String>,

    /// Only orders from this supplier id
    #[arg(long)]
    supplier: Option<String>,

    /// Only orders containing this article id
    #[arg(long)]
    article: Option<String>,

    /// Only orders on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Only orders on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,
}

impl FilterArgs {
    fn to_criteria(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria {
            search_text: self.search.clone().unwrap_or_default(),
            supplier_id: self.supplier.clone().unwrap_or_default(),
            article_id: self.article.clone().unwrap_or_default(),
            date_from: self.from.as_deref().map(parse_date).transpose()?,
            date_to: self.to.as_deref().map(parse_date).transpose()?,
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let dir = match cli.data_dir {
        Some(p) => p,
        None => data_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&dir),
        Commands::List { filters, page } => cmd_list(&dir, &filters, page),
        Commands::Stats { filters } => cmd_stats(&dir, &filters),
        Commands::Add {
            supplier,
            item,
            date,
            reference,
            supplier_ref,
            notes,
        } => cmd_add(
            &dir,
            &supplier,
            &item,
            date,
            reference,
            supplier_ref,
            notes,
        ),
        Commands::Delete { id, yes } => cmd_delete(&dir, &id, yes),
        Commands::Suppliers => cmd_suppliers(&dir),
        Commands::Articles => cmd_articles(&dir),
    }
}

fn open_service(dir: &Path) -> Result<(Config, OrderService<DirStore>)> {
    let config = load_config(dir)?;
    let store = DirStore::open(dir)?;
    let service =
        OrderService::open(store)?.with_reference_prefix(config.orders.reference_prefix.clone());
    Ok((config, service))
}

/// Initialize the data directory
fn cmd_init(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Err(ProcureError::AlreadyInitialized(dir.to_path_buf()));
    }

    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("config.toml"), CONFIG_TEMPLATE)?;
    let (_, service) = open_service(dir)?;

    println!("Initialized procurement data at: {}", dir.display());
    println!(
        "  Seeded {} orders, {} suppliers, {} articles",
        service.orders().len(),
        service.list_suppliers().len(),
        service.list_articles().len()
    );
    println!();
    println!("Record your first order:");
    println!("  procure add --supplier <supplier-id> --item <article-id>:<qty>@<price>");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "REFERENCE")]
    reference: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "SUPPLIER")]
    supplier: String,
    #[tabled(rename = "ARTICLES")]
    articles: String,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
}

fn format_money(value: f64, currency_symbol: &str) -> String {
    format!("{} {}", format_grouped_int(value.round() as i64), currency_symbol)
}

fn format_grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ProcureError::InvalidDate(s.to_string()))
}

/// Parse item input like "1:2@150000" into (article_id, quantity, unit_price)
fn parse_item_input(input: &str) -> Result<(&str, f64, f64)> {
    let (article_id, rest) = input
        .split_once(':')
        .ok_or_else(|| ProcureError::InvalidItemFormat(input.to_string()))?;
    let (qty_str, price_str) = rest
        .split_once('@')
        .ok_or_else(|| ProcureError::InvalidItemFormat(input.to_string()))?;
    if article_id.is_empty() {
        return Err(ProcureError::InvalidItemFormat(input.to_string()));
    }

    let quantity: f64 = qty_str.parse().map_err(|_| ProcureError::InvalidQuantity {
        article: article_id.to_string(),
        qty: qty_str.to_string(),
    })?;
    let unit_price: f64 = price_str.parse().map_err(|_| ProcureError::InvalidUnitPrice {
        article: article_id.to_string(),
        price: price_str.to_string(),
    })?;

    Ok((article_id, quantity, unit_price))
}

fn print_statistics(stats: &Statistics, currency_symbol: &str) {
    println!("Statistics ({})", stats.period);
    println!("{}", "-".repeat(50));
    println!("Orders:        {}", stats.count);
    println!(
        "Total amount:  {}",
        format_money(stats.total_amount, currency_symbol)
    );
    match &stats.top_supplier_name {
        Some(name) => println!(
            "Top supplier:  {} - {} ({}%)",
            name,
            format_money(stats.top_supplier_amount, currency_symbol),
            stats.top_supplier_percentage
        ),
        None => println!("Top supplier:  none"),
    }
}

/// List orders with filters and pagination
fn cmd_list(dir: &Path, filters: &FilterArgs, page: usize) -> Result<()> {
    let criteria = filters.to_criteria()?;
    let (config, mut service) = open_service(dir)?;
    let symbol = &config.display.currency_symbol;

    let mut screen = ListScreen::open(&mut service);
    screen.apply_criteria(criteria);

    if page != 1 && !screen.go_to_page(page) {
        return Err(ProcureError::InvalidPage {
            page,
            total: screen.pagination().total_pages,
        });
    }

    let pagination = screen.pagination();
    let offset = (pagination.current_page - 1) * pagination.page_size;

    if screen.visible_orders().is_empty() {
        println!("No orders match the given filters.");
    } else {
        let rows: Vec<OrderRow> = screen
            .visible_orders()
            .iter()
            .enumerate()
            .map(|(idx, order)| OrderRow {
                index: offset + idx + 1,
                id: order.id.clone(),
                reference: order.reference.clone(),
                date: order.date.format("%Y-%m-%d").to_string(),
                supplier: order.supplier_name.clone(),
                articles: order.article_names.join(", "),
                total: format_money(order.total_amount, symbol),
                status: order.status.to_string(),
            })
            .collect();

        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
        println!(
            "Page {} of {} ({} matching orders)",
            pagination.current_page,
            pagination.total_pages.max(1),
            screen.filtered_orders().len()
        );
    }

    println!();
    print_statistics(screen.statistics(), symbol);
    screen.close();

    Ok(())
}

/// Show statistics only
fn cmd_stats(dir: &Path, filters: &FilterArgs) -> Result<()> {
    let criteria = filters.to_criteria()?;
    let (config, service) = open_service(dir)?;

    let matching = service.filter(&criteria);
    let stats = service.aggregate(&matching);
    print_statistics(&stats, &config.display.currency_symbol);

    Ok(())
}

/// Record a new order through the order form
#[allow(clippy::too_many_arguments)]
fn cmd_add(
    dir: &Path,
    supplier_id: &str,
    items_input: &[String],
    date: Option<String>,
    reference: Option<String>,
    supplier_ref: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let (config, mut service) = open_service(dir)?;
    let symbol = &config.display.currency_symbol;

    let mut form = OrderForm::for_service(&service, Local::now().date_naive());
    if let Some(d) = date {
        form.set_date(Some(parse_date(&d)?));
    }
    form.select_supplier(supplier_id)?;
    if let Some(r) = reference {
        form.set_internal_reference(r);
    }
    if let Some(r) = supplier_ref {
        form.set_reference(r);
    }
    if let Some(n) = notes {
        form.set_notes(n);
    }

    for input in items_input {
        let (article_id, quantity, unit_price) = parse_item_input(input)?;
        form.select_article(article_id)?;
        form.set_quantity(Some(quantity));
        form.set_unit_price(Some(unit_price));
        form.add_line_item()?;
    }

    let order = form.submit(&mut service)?;

    println!("Recorded {} (id {})", order.reference, order.id);
    println!("  Supplier: {}", order.supplier_name);
    println!("  Articles: {}", order.article_names.join(", "));
    println!("  Total:    {}", format_money(order.total_amount, symbol));
    println!("  Status:   {}", order.status);

    Ok(())
}

/// Delete an order after confirmation
fn cmd_delete(dir: &Path, id: &str, yes: bool) -> Result<()> {
    let (_, mut service) = open_service(dir)?;
    let mut screen = ListScreen::open(&mut service);

    if !screen.all_orders().iter().any(|o| o.id == id) {
        println!("No order with id '{id}'.");
        return Ok(());
    }

    let removed = screen.delete(&mut service, id, |order| {
        yes || confirm(&format!(
            "Delete order {} from {}? [y/N] ",
            order.reference, order.supplier_name
        ))
    })?;

    if removed {
        println!("Deleted order {id}");
    } else {
        println!("Cancelled.");
    }
    screen.close();

    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// List the supplier catalog
fn cmd_suppliers(dir: &Path) -> Result<()> {
    let (_, service) = open_service(dir)?;
    let suppliers = service.list_suppliers();

    if suppliers.is_empty() {
        println!("No suppliers configured.");
        return Ok(());
    }

    let rows: Vec<CatalogRow> = suppliers
        .into_iter()
        .map(|s| CatalogRow {
            id: s.id,
            name: s.name,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}

/// List the article catalog
fn cmd_articles(dir: &Path) -> Result<()> {
    let (_, service) = open_service(dir)?;
    let articles = service.list_articles();

    if articles.is_empty() {
        println!("No articles configured.");
        return Ok(());
    }

    let rows: Vec<CatalogRow> = articles
        .into_iter()
        .map(|a| CatalogRow {
            id: a.id,
            name: a.name,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}
