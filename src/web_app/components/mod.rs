// web_app/components/mod.rs - UI components module
//
// - common.rs: Loading, ErrorDisplay, Badge
// - product.rs: ProductCell, ProductGrid, ProductDetail
// - shop.rs: static storefront sections (header, pagination, info panel)

pub mod common;
pub mod product;
pub mod shop;

pub use common::*;
pub use product::*;
pub use shop::*;
