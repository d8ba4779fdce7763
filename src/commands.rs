//! One-shot subcommands: fetch once, run the stores and the selection
//! engine, render text.

use std::fmt::Write as _;

use anyhow::{bail, Context};

use crate::catalog::loader::{load_categories, load_products};
use crate::catalog::{select_products, CatalogSource, Product, SortOption};
use crate::ui::filters::{FiltersIntent, FiltersStore};
use crate::ui::products::{DetailLookup, FetchStatus, ProductsStore};

/// Fetch products and print those matching the filters.
pub async fn list<S>(
    source: &S,
    search: &str,
    category: &str,
    sort: SortOption,
    json: bool,
) -> anyhow::Result<String>
where
    S: CatalogSource + ?Sized,
{
    let products = ProductsStore::default();
    load_products(&products, source).await;
    ensure_loaded(&products)?;

    let filters = FiltersStore::default();
    filters.dispatch(FiltersIntent::SetSearchQuery(search.to_string()));
    filters.dispatch(FiltersIntent::SetSelectedCategory(category.to_string()));
    filters.dispatch(FiltersIntent::SetSortBy(sort));

    let selected = products.select(|catalog| {
        filters.select(|f| select_products(catalog.items(), f.criteria()))
    });

    if json {
        return serde_json::to_string_pretty(&selected).context("Failed to encode products");
    }
    Ok(render_table(&selected))
}

/// Fetch and print category names. A failed fetch prints nothing.
pub async fn categories<S>(source: &S, json: bool) -> anyhow::Result<String>
where
    S: CatalogSource + ?Sized,
{
    let products = ProductsStore::default();
    load_categories(&products, source).await;
    let categories = products.select(|s| s.categories().to_vec());

    if json {
        return serde_json::to_string_pretty(&categories).context("Failed to encode categories");
    }
    let mut out = String::new();
    for category in &categories {
        let _ = writeln!(out, "{}", category);
    }
    Ok(out)
}

/// Fetch products and print the one with `raw_id`.
pub async fn show<S>(source: &S, raw_id: &str, json: bool) -> anyhow::Result<String>
where
    S: CatalogSource + ?Sized,
{
    let products = ProductsStore::default();
    load_products(&products, source).await;
    ensure_loaded(&products)?;

    let state = products.state();
    let product = match state.lookup(raw_id) {
        DetailLookup::Found(product) => product,
        DetailLookup::NotFound | DetailLookup::Loading => bail!("Product not found: {}", raw_id),
    };

    if json {
        return serde_json::to_string_pretty(product).context("Failed to encode product");
    }
    Ok(render_detail(product))
}

fn ensure_loaded(products: &ProductsStore) -> anyhow::Result<()> {
    let (status, error) = products.select(|s| (s.status(), s.error().map(str::to_string)));
    if status == FetchStatus::Failed {
        bail!(error.unwrap_or_else(|| crate::catalog::loader::PRODUCTS_FALLBACK_ERROR.to_string()));
    }
    Ok(())
}

pub fn render_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:>10}  {:<18}  TITLE", "ID", "PRICE", "CATEGORY");
    for product in products {
        let _ = writeln!(
            out,
            "{:>4}  {:>10}  {:<18}  {}",
            product.id,
            product.formatted_price(),
            product.category,
            product.title
        );
    }
    let _ = writeln!(out, "Showing {} products", products.len());
    out
}

pub fn render_detail(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = writeln!(out, "Price:    {}", product.formatted_price());
    let _ = writeln!(
        out,
        "Rating:   {} / 5 ({} reviews)",
        product.rating.rate, product.rating.count
    );
    let _ = writeln!(out, "Image:    {}", product.image);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", product.description);
    out
}
