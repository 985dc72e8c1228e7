use dioxus::prelude::*;

use catalog_common::catalog::{self, Catalog};
use catalog_common::remote::HttpCatalogClient;
use catalog_common::{CatalogError, StateCell};

/// Client handed to every page. Building it can fail (TLS setup), in which
/// case the app shows the error instead of the router.
pub type ClientSlot = Result<HttpCatalogClient, CatalogError>;

/// Lets the core's async drivers write straight into a Dioxus signal.
pub struct SignalCell<T: 'static>(pub Signal<T>);

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: 'static> StateCell<T> for SignalCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.0;
        let mut guard = signal.write();
        f(&mut *guard)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.read();
        f(&*guard)
    }
}

/// Catalog collections shared by all pages.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

pub fn use_catalog_client() -> Option<HttpCatalogClient> {
    use_context::<ClientSlot>().ok()
}

/// Kick off the product load once, when the calling page mounts.
pub fn use_products_on_mount() {
    let catalog = use_catalog();
    let client = use_catalog_client();
    use_hook(move || {
        if let Some(client) = client {
            spawn(async move {
                catalog::load_products(&client, &SignalCell(catalog)).await;
            });
        }
    });
}

/// Kick off the category load once, when the calling page mounts.
pub fn use_categories_on_mount() {
    let catalog = use_catalog();
    let client = use_catalog_client();
    use_hook(move || {
        if let Some(client) = client {
            spawn(async move {
                catalog::load_categories(&client, &SignalCell(catalog)).await;
            });
        }
    });
}
