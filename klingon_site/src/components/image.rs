//! Image element with explicit intrinsic dimensions.

use crate::catalog::ImageAsset;
use leptos::prelude::*;

/// Renders an `<img>` for a catalog asset.
///
/// # Props
///
/// * `asset` - File name and pixel dimensions
/// * `asset_base` - URL prefix from the site config
/// * `alt` - Alternative text
/// * `class` - Additional CSS classes (default: "")
/// * `lazy` - Defer loading until near the viewport (default: false)
#[component]
pub fn AssetImage(
    /// File name and pixel dimensions
    asset: ImageAsset,
    /// URL prefix from the site config
    #[prop(into)]
    asset_base: String,
    /// Alternative text
    alt: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Defer loading until near the viewport
    #[prop(default = false)]
    lazy: bool,
) -> impl IntoView {
    let src = asset.url(&asset_base);
    let loading = if lazy { "lazy" } else { "eager" };

    view! {
        <img
            class=class
            src=src
            alt=alt
            width=asset.width.to_string()
            height=asset.height.to_string()
            loading=loading
            decoding="async"
        />
    }
}
