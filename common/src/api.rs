use crate::category::Category;
use crate::error::CatalogError;
use crate::product::{NewProduct, Product, ProductId};

/// Operations offered by the remote catalog service.
///
/// Every call is a single exchange: no retry, no cancellation once issued.
/// [`crate::remote::HttpCatalogClient`] is the production implementation;
/// tests substitute stubs.
#[allow(async_fn_in_trait)] // single-threaded callers, no Send bound wanted
pub trait CatalogApi {
    /// At most `limit` categories, in service order.
    async fn fetch_categories(&self, limit: u32) -> Result<Vec<Category>, CatalogError>;

    /// One page of products starting at `offset`.
    async fn fetch_products(&self, limit: u32, offset: u32) -> Result<Vec<Product>, CatalogError>;

    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Create a listing; returns the product as stored by the service.
    async fn create_product(&self, product: &NewProduct) -> Result<Product, CatalogError>;
}
