//! Catalog view aggregator.
//!
//! Holds the product and category collections, each with its own load
//! lifecycle, and exposes the derived views over the products. The two loads
//! never wait on each other.

use crate::api::CatalogApi;
use crate::category::{Category, CategoryId};
use crate::cell::StateCell;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::product::Product;
use crate::views;

/// Lifecycle of one remotely loaded collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Unloaded,
    Loading,
    Loaded(Vec<T>),
    Failed(CatalogError),
}

impl<T> LoadState<T> {
    /// Loaded items; empty for every other state.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Nothing to show yet: never requested or still in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Unloaded | LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Enter `Loading`. Returns false if a load is already in flight.
    fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = LoadState::Loading;
        true
    }

    fn settle(&mut self, result: Result<Vec<T>, CatalogError>) {
        *self = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(err) => LoadState::Failed(err),
        };
    }
}

/// Client-side view of the remote catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: LoadState<Product>,
    categories: LoadState<Category>,
    product_limit: u32,
    product_offset: u32,
    category_limit: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl Catalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            products: LoadState::Unloaded,
            categories: LoadState::Unloaded,
            product_limit: config.product_limit,
            product_offset: config.product_offset,
            category_limit: config.category_limit,
        }
    }

    pub fn products(&self) -> &LoadState<Product> {
        &self.products
    }

    pub fn categories(&self) -> &LoadState<Category> {
        &self.categories
    }

    pub fn featured(&self) -> &[Product] {
        views::featured(self.products.items())
    }

    pub fn latest(&self) -> Vec<&Product> {
        views::latest(self.products.items())
    }

    pub fn by_category(&self, category: CategoryId) -> Vec<&Product> {
        views::by_category(self.products.items(), category)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.items().iter().find(|c| c.id == id)
    }

    pub fn begin_products_load(&mut self) -> bool {
        self.products.begin()
    }

    pub fn settle_products(&mut self, result: Result<Vec<Product>, CatalogError>) {
        self.products.settle(result);
    }

    pub fn begin_categories_load(&mut self) -> bool {
        self.categories.begin()
    }

    pub fn settle_categories(&mut self, result: Result<Vec<Category>, CatalogError>) {
        self.categories.settle(result);
    }
}

/// Fetch the configured product page into `catalog`.
///
/// No-op while a product load is already in flight. Failures are logged and
/// stored; the derived views then read as empty.
pub async fn load_products<A, S>(api: &A, catalog: &S)
where
    A: CatalogApi,
    S: StateCell<Catalog>,
{
    let Some((limit, offset)) = catalog.update(|c| {
        c.begin_products_load()
            .then_some((c.product_limit, c.product_offset))
    }) else {
        tracing::debug!("product load already in flight");
        return;
    };

    let result = api.fetch_products(limit, offset).await;
    match &result {
        Ok(products) => tracing::info!(count = products.len(), "products loaded"),
        Err(err) => tracing::warn!(error = %err, kind = err.kind(), "product load failed"),
    }
    catalog.update(|c| c.settle_products(result));
}

/// Fetch the configured number of categories into `catalog`.
pub async fn load_categories<A, S>(api: &A, catalog: &S)
where
    A: CatalogApi,
    S: StateCell<Catalog>,
{
    let Some(limit) = catalog.update(|c| c.begin_categories_load().then_some(c.category_limit))
    else {
        tracing::debug!("category load already in flight");
        return;
    };

    let result = api.fetch_categories(limit).await;
    match &result {
        Ok(categories) => tracing::info!(count = categories.len(), "categories loaded"),
        Err(err) => tracing::warn!(error = %err, kind = err.kind(), "category load failed"),
    }
    catalog.update(|c| c.settle_categories(result));
}
