// web_app/api/mod.rs - API module for server-side logic
//
// Catalog access: the source abstraction, the Sanity HTTP client, and the
// GROQ queries the pages need.

pub mod queries;
pub mod sanity;
pub mod source;

pub use queries::{fetch_all_products, fetch_product, load_catalog};
pub use sanity::{SanityClient, SanityConfig};
pub use source::{CatalogError, CatalogSource, GroqQuery, SharedCatalog};
