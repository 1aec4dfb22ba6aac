// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the pages. All data comes in via props.

use leptos::prelude::*;

/// Minimal loading indicator
#[component]
pub fn Loading(
    /// Message shown next to the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" data-testid="loading">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-gray-900"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Shows the failure reason and, when given a handler, a retry button.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    /// Invoked when the user asks to retry
    #[prop(optional_no_strip)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4" data-testid="error">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div class="flex-1">
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="mt-4 px-4 py-2 bg-black text-white text-sm font-medium rounded-md hover:bg-gray-800"
                        on:click=move |_| retry.run(())
                    >
                        "Try again"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-[#FBEBB5] text-black border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("red").contains("bg-red-100"));
        assert!(badge_class("yellow").contains("bg-[#FBEBB5]"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
    }

    #[test]
    fn test_badge_common_properties() {
        for variant in ["green", "red", "yellow", "gray"] {
            let class = badge_class(variant);
            assert!(class.contains("rounded-full"), "Rounded for {}", variant);
            assert!(class.contains("text-xs"), "Text size for {}", variant);
        }
    }
}
