//! Features grid.

use super::{AssetImage, SectionHeading};
use crate::catalog::{FEATURES, FeatureRecord};
use leptos::prelude::*;

/// The `#features` landmark: one card per [`FEATURES`] entry, keyed by title.
#[component]
pub fn FeaturesSection(
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    view! {
        <section id="features" class="section" aria-labelledby="features-heading">
            <SectionHeading
                eyebrow="Command Core"
                heading_id="features-heading"
                title="Weapons of Linguistic Mastery"
            />
            <div class="features-grid">
                <For
                    each=move || FEATURES.clone().map(|feature| (feature, asset_base.clone()))
                    key=|(feature, _): &(FeatureRecord, String)| feature.title
                    let:card
                >
                    <FeatureCard feature={card.0} asset_base={card.1} />
                </For>
            </div>
        </section>
    }
}

/// A single feature: icon, title, and description.
#[component]
pub fn FeatureCard(
    /// Record to render
    feature: FeatureRecord,
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <AssetImage
                asset=feature.icon
                asset_base=asset_base
                alt=feature.alt
                class="feature-icon"
            />
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
