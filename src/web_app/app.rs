// web_app/app.rs - Root application component
//
// Sets up meta tags, routing and the 404 fallback.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{ProductPage, ShopPage};
use crate::web_app::routes::HOME_ROUTE;

pub const APP_TITLE: &str = "Shop";
pub const APP_DESCRIPTION: &str = "Browse the full furniture and homeware catalog";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ShopPage />
                    <Route path=path!("/shop") view=ShopPage />
                    <Route path=path!("/product/:id") view=ProductPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=HOME_ROUTE
                    class="px-6 py-3 bg-black text-white rounded-md hover:bg-gray-800 transition-colors"
                >
                    "Back to shop"
                </a>
            </div>
        </div>
    }
}
