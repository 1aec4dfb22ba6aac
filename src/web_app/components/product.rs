// web_app/components/product.rs - Product display components
//
// - ProductCell: one grid cell on the storefront
// - ProductGrid: responsive grid of cells, in catalog order
// - ProductDetail: full record on the single-product page

use leptos::prelude::*;

use super::common::Badge;
use crate::web_app::model::Product;
use crate::web_app::routes::product_route;

/// Storefront grid cell
///
/// The description doubles as the heading; `name` is not shown here.
#[component]
pub fn ProductCell(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let href = product_route(&product.id);
    let title = product.card_title().to_string();
    let body = product.description.clone();
    let price = product.price_label();

    view! {
        <div class="relative group text-center p-6" data-testid="product-cell" data-product-id=product.id.clone()>
            <img
                src=product.image_path.clone()
                alt=product.description.clone()
                width="300"
                height="300"
                class="mx-auto h-64 object-contain transition-transform duration-200 group-hover:scale-105"
            />

            <h3 class="mt-4 text-xl font-semibold text-gray-800">{title}</h3>
            <p class="mt-2 text-gray-600">{body}</p>
            <p class="mt-2 text-lg text-gray-500" data-testid="price">{price}</p>

            // Revealed on hover
            <a href=href data-testid="product-link">
                <button
                    type="button"
                    class="absolute inset-x-0 bottom-4 mx-auto w-10/12 bg-black text-white text-sm font-medium py-2 \
                           rounded-md opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                >
                    "Add to Cart"
                </button>
            </a>
        </div>
    }
}

/// Row key for the grid. Ids may be blank or repeated, so the position is part of it.
fn cell_key(entry: &(usize, Product)) -> (usize, String) {
    (entry.0, entry.1.id.clone())
}

/// Product grid, one cell per record in fetch order
///
/// An empty collection renders an empty grid with no message.
#[component]
pub fn ProductGrid(
    products: Vec<Product>,
) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" data-testid="product-grid">
                <For
                    each={move || products.clone().into_iter().enumerate().collect::<Vec<_>>()}
                    key=cell_key
                    children={move |(_, product)| view! { <ProductCell product=product /> }}
                />
            </div>
        </div>
    }
}

/// Product detail view
#[component]
pub fn ProductDetail(
    product: Product,
) -> impl IntoView {
    let price = product.price_label();
    let discount = product.discount_label();

    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12 flex flex-col md:flex-row gap-10">
            <div class="w-full md:w-1/2 aspect-square bg-[#FFF9E5] rounded-xl flex items-center justify-center">
                <img
                    src=product.image_path.clone()
                    alt=product.name.clone()
                    class="max-h-full object-contain"
                />
            </div>

            <div class="flex-1 space-y-4">
                <h1 class="text-4xl font-bold text-gray-900" data-testid="product-name">
                    {product.name.clone()}
                </h1>
                <div class="flex items-center gap-3">
                    <span class="text-2xl text-gray-500" data-testid="price">{price}</span>
                    {discount.map(|d| view! { <Badge variant="red">{d}</Badge> })}
                    {product.is_featured_product.then(|| view! { <Badge variant="yellow">"Featured"</Badge> })}
                </div>

                <p class="text-gray-600 leading-relaxed">{product.description.clone()}</p>

                <dl class="grid grid-cols-2 gap-2 text-sm pt-4 border-t border-gray-200">
                    <dt class="text-gray-500">"Category"</dt>
                    <dd class="text-gray-900">{product.category.clone()}</dd>
                    <dt class="text-gray-500">"In stock"</dt>
                    <dd class="text-gray-900">
                        {product.stock_level.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}
                    </dd>
                </dl>
            </div>
        </div>
    }
}
