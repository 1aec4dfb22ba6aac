// web_app/pages/product.rs - Single product page at /product/:id

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::routes::HOME_ROUTE;
use crate::web_app::server_fns::get_product;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    let product = Resource::new(product_id, get_product);

    view! {
        <div class="bg-gray-50 min-h-screen">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 pt-8 text-sm text-gray-500">
                <a href=HOME_ROUTE class="hover:text-gray-900">"← Back to shop"</a>
            </div>

            <Suspense fallback=|| view! { <Loading /> }>
                {move || match product.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(Err(e)) => view! {
                        <div class="max-w-3xl mx-auto px-4 py-16">
                            <ErrorDisplay error=e.to_string() />
                        </div>
                    }.into_any(),
                    Some(Ok(None)) => view! { <ProductNotFound /> }.into_any(),
                    Some(Ok(Some(p))) => view! { <ProductDetail product=p /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="text-center py-24" data-testid="product-not-found">
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Product not found"</h2>
            <a
                href=HOME_ROUTE
                class="px-6 py-3 bg-black text-white rounded-md hover:bg-gray-800 transition-colors"
            >
                "Back to shop"
            </a>
        </div>
    }
}
