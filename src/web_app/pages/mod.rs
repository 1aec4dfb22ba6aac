// web_app/pages/mod.rs - Page components module
//
// - ShopPage: storefront listing
// - ProductPage: single product detail

pub mod product;
pub mod shop;

pub use product::ProductPage;
pub use shop::{ShopPage, ShopView};
