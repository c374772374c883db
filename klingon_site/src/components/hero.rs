//! Hero banner.

use super::AssetImage;
use crate::catalog::HERO_IMAGE;
use leptos::prelude::*;

/// Headline, pitch, primary button, and hero artwork.
#[component]
pub fn Hero(
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    view! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="hero-content">
                <span class="eyebrow">"Honor Your Words"</span>
                <h1 id="hero-heading" class="hero-title">
                    "Qapla'! Master the Klingon Tongue."
                </h1>
                <p class="hero-subtitle">
                    "Unlock the secrets of Klingon culture through language. Train your voice, honor your "
                    "lineage, and command respect across the quadrant."
                </p>
                <div class="hero-actions">
                    <a class="primary-button" href="#features">
                        "Begin Your Training"
                    </a>
                </div>
            </div>

            <div class="hero-image-wrapper">
                <span class="logo-badge">"Honor Grade AI"</span>
                <AssetImage
                    asset=HERO_IMAGE
                    asset_base=asset_base
                    alt="Stylized Klingon warrior with the Learn Klingon emblem"
                />
            </div>
        </section>
    }
}
