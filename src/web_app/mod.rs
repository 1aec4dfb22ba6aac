// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - routes.rs: Navigation targets and static asset paths
// - server_fns.rs: Server function declarations (both client and server)
// - api/: Catalog client and queries (server only)
// - components/: Reusable UI components
// - pages/: Page-level components
// - app.rs: Root application component with routing

pub mod model;
pub mod routes;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(feature = "catalog-tools")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
