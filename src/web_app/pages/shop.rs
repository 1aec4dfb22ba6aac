// web_app/pages/shop.rs - Storefront listing page
//
// `ShopPage` owns the single catalog read; `ShopView` renders whichever state
// that read is in.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::CatalogState;
use crate::web_app::server_fns::list_products;

/// Storefront listing page
///
/// Issues one `list_products` call per mount. The retry button bumps
/// `reload`, which re-runs the same read.
#[component]
pub fn ShopPage() -> impl IntoView {
    let reload = RwSignal::new(0_u32);

    let catalog = Resource::new(
        move || reload.get(),
        |_| list_products(),
    );

    let on_retry = Callback::new(move |()| {
        reload.update(|n| *n += 1);
    });

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {move || {
                let state = CatalogState::from_pending(catalog.get());
                view! { <ShopView state=state on_retry=on_retry /> }
            }}
        </Suspense>
    }
}

/// Renders one catalog state
///
/// - `Loading`: the loading indicator and nothing else
/// - `Loaded`: header, grid, pagination, info panel
/// - `Failed`: the error with a retry control
#[component]
pub fn ShopView(
    state: CatalogState,
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    match state {
        CatalogState::Loading => view! { <Loading /> }.into_any(),
        CatalogState::Failed(reason) => view! {
            <div class="max-w-3xl mx-auto px-4 py-16">
                <ErrorDisplay error=reason on_retry=on_retry />
            </div>
        }
        .into_any(),
        CatalogState::Loaded(products) => view! {
            <div class="bg-gray-50 min-h-screen">
                <ShopHeader />
                <ProductGrid products=products />
                <StaticPagination />
                <InfoPanel />
            </div>
        }
        .into_any(),
    }
}
