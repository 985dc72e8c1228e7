pub mod api;
pub mod catalog;
pub mod category;
pub mod cell;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod product;
pub mod remote;
pub mod views;

pub use api::CatalogApi;
pub use cell::StateCell;
pub use config::CatalogConfig;
pub use error::{CatalogError, FormValidationError};
