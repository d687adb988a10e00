//! Storefront cart CLI

use std::io::{self, Write};

use anyhow::Context;
use rusty_money::iso::VND;
use tracing::{debug, warn};

use storefront_cart::{
    badges::{CartBadge, selection_badge, status_badge},
    cart::QuantityChange,
    catalog::{Catalog, fixtures::load_catalog},
    config::{CartConfig, Command},
    observability::init_subscriber,
    observer::{CartChange, CartObserver, PersistenceWarning},
    orders::{CustomerDetails, OrderRequest},
    products::Product,
    receipt::Receipt,
    storage::FileStorage,
    store::{CartOptions, CartStore},
};

/// Warnings surfaced on stderr once per run.
#[derive(Debug, Default)]
struct StderrWarnings;

impl CartObserver for StderrWarnings {
    fn on_change(&mut self, _change: &CartChange) {}

    fn on_warning(&mut self, warning: &PersistenceWarning) {
        _ = writeln!(io::stderr().lock(), "warning: {warning}");
    }
}

fn main() -> anyhow::Result<()> {
    let config = CartConfig::load()?;

    init_subscriber(&config.logging)?;

    let catalog = load_catalog(&config.storage.catalog).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.storage.catalog.display()
        )
    })?;

    debug!(products = catalog.len(), "catalog loaded");

    let mut store = CartStore::initialize(
        FileStorage::new(&config.storage.storage_dir),
        CartOptions {
            key: config.storage.storage_key,
            currency: catalog.currency().unwrap_or(VND),
        },
    );

    store.subscribe(StderrWarnings);

    let mut out = io::stdout().lock();

    run(config.command, &catalog, &mut store, &mut out)
}

fn run(
    command: Command,
    catalog: &Catalog,
    store: &mut CartStore<FileStorage>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Products { featured } => write_products(catalog, featured, store, out)?,
        Command::Add { id } => {
            if !store.add_product(catalog, id) {
                warn!(%id, "product not added");
            }

            write_count(store, out)?;
        }
        Command::Increase { id } => {
            store.change_quantity(id, QuantityChange::Increase);
            write_count(store, out)?;
        }
        Command::Decrease { id } => {
            store.change_quantity(id, QuantityChange::Decrease);
            write_count(store, out)?;
        }
        Command::Remove { id } => {
            store.remove_item(id);
            write_count(store, out)?;
        }
        Command::Clear => {
            store.clear();
            write_count(store, out)?;
        }
        Command::Show => Receipt::new(store.cart()).write_to(&mut *out)?,
        Command::OrderPayload(args) => {
            let request = OrderRequest::new(&CustomerDetails::from(args), store.snapshot_for_order())?;

            serde_json::to_writer_pretty(&mut *out, &request)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn write_products(
    catalog: &Catalog,
    featured: bool,
    store: &CartStore<FileStorage>,
    out: &mut impl Write,
) -> io::Result<()> {
    let products: Box<dyn Iterator<Item = &Product> + '_> = if featured {
        Box::new(catalog.featured())
    } else {
        Box::new(catalog.iter())
    };

    for product in products {
        let selection = selection_badge(product, store.contains(product.id));
        let status = status_badge(product)
            .map(|badge| format!(" [{}]", badge.text))
            .unwrap_or_default();
        let savings = product
            .discount_amount()
            .map(|saved| format!(" (save {saved})"))
            .unwrap_or_default();
        let availability = if product.is_available {
            ""
        } else {
            " (unavailable)"
        };

        writeln!(
            out,
            "{:>3}  {} ({}){status}  {}{savings}{availability}",
            product.id, product.name, selection.text, product.price
        )?;
    }

    Ok(())
}

fn write_count(store: &CartStore<FileStorage>, out: &mut impl Write) -> io::Result<()> {
    let badge = CartBadge::new(store.total_item_count());

    writeln!(out, "{} items, {}", badge.text(), store.total_amount())
}
