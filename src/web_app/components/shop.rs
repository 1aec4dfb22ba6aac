// web_app/components/shop.rs - Static storefront sections
//
// Header with breadcrumb, the placeholder pagination row, and the marketing
// info panel. None of these depend on catalog data.

use leptos::prelude::*;

use crate::web_app::routes::{HERO_IMAGE, HOME_ROUTE, LOGO_IMAGE};

pub const SHOP_TITLE: &str = "Shop";

/// Page numbers shown in the pagination row
pub const PAGE_LABELS: [&str; 3] = ["1", "2", "3"];

/// Heading and body of each info panel call-out
pub const INFO_CALLOUTS: [(&str, &str); 3] = [
    ("Free Delivery", "For all orders over $50, consectetur adipiscing elit."),
    ("90 Days Return", "If goods have problems, consectetur adipiscing elit."),
    ("Secure Payment", "100% secure payment, consectetur adipiscing elit."),
];

/// Header block: logo, title, breadcrumb over a faded hero image
#[component]
pub fn ShopHeader() -> impl IntoView {
    view! {
        <div class="relative bg-white overflow-hidden" data-testid="shop-header">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="py-16 text-center">
                    <div class="w-16 h-16 mx-auto mb-4">
                        <img src=LOGO_IMAGE alt="Logo" width="64" height="64" class="object-contain" />
                    </div>

                    <h1 class="text-4xl font-bold text-gray-900">{SHOP_TITLE}</h1>

                    <Breadcrumb />
                </div>
            </div>

            <div class="absolute inset-0 z-0">
                <img src=HERO_IMAGE alt="Background" class="pointer-events-none opacity-30" />
            </div>
        </div>
    }
}

/// "Home › Shop"
#[component]
pub fn Breadcrumb() -> impl IntoView {
    view! {
        <p class="text-sm text-gray-500 mt-2 flex items-center justify-center space-x-2" data-testid="breadcrumb">
            <span>
                <a href=HOME_ROUTE data-testid="breadcrumb-home">"Home"</a>
            </span>
            <span class="text-gray-900 text-xs" aria-hidden="true">"›"</span>
            <span>{SHOP_TITLE}</span>
        </p>
    }
}

/// Pagination row. Placeholder only: the buttons have no handlers.
#[component]
pub fn StaticPagination() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center space-x-4 py-6" data-testid="pagination">
            <div class="flex space-x-2">
                {PAGE_LABELS.iter().enumerate().map(|(i, label)| {
                    let class = if i == 0 {
                        "px-4 py-2 rounded-md bg-[#FBEBB5] text-black hover:bg-[#FFF9E5]"
                    } else {
                        "px-4 py-2 rounded-md bg-[#FFF9E5] text-gray-900 hover:bg-gray-300"
                    };
                    view! { <button type="button" class=class>{*label}</button> }
                }).collect_view()}
            </div>

            <button type="button" class="px-4 py-2 bg-[#FFF9E5] text-black rounded-md hover:bg-gray-700">
                "Next"
            </button>
        </div>
    }
}

/// Three static marketing call-outs
#[component]
pub fn InfoPanel() -> impl IntoView {
    view! {
        <div class="bg-[#FAF4F4] py-24" data-testid="info-panel">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 text-left">
                    {INFO_CALLOUTS.iter().map(|(heading, body)| view! {
                        <div class="flex flex-col items-left">
                            <div class="text-2xl font-bold text-gray-800">{*heading}</div>
                            <p class="mt-2 text-gray-600">{*body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
