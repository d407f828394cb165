//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod products;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use products::{
    create_product_handler, delete_product_handler, find_product_handler, list_products_handler,
    update_product_handler,
};
pub use redirect::redirect_handler;
pub use shorten::{shorten_url_handler, shorten_url_info_handler};
