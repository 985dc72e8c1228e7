pub mod app;
pub mod home_view;
pub mod product_card;
pub mod product_detail;
pub mod product_form;
pub mod products_view;
pub mod shared_state;
