//! App showcase panel.

use super::{AssetImage, SectionHeading};
use crate::catalog::{HIGHLIGHTS, HighlightRecord, SHOWCASE_IMAGE};
use leptos::prelude::*;

/// The `#showcase` landmark: intro copy, keyed highlights, and the mockup.
#[component]
pub fn ShowcaseSection(
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    view! {
        <section id="showcase" class="section" aria-labelledby="showcase-heading">
            <SectionHeading
                eyebrow="PADD Interface"
                heading_id="showcase-heading"
                title="Designed for Warriors, Forged for Precision"
            />
            <div class="showcase">
                <div class="showcase-text">
                    <p>
                        "The Learn Klingon PADD interface delivers layered mission briefings, dialect trees, "
                        "and biometric feedback in one battle-ready console. Navigate lessons, track honor "
                        "ranks, and command instant translation with a single tap."
                    </p>
                    <div class="showcase-highlights">
                        <For
                            each=move || HIGHLIGHTS.clone()
                            key=|highlight: &HighlightRecord| highlight.label
                            let:highlight
                        >
                            <div class="highlight">
                                <strong>{highlight.label}</strong>
                                <span>{highlight.detail}</span>
                            </div>
                        </For>
                    </div>
                </div>
                <AssetImage
                    asset=SHOWCASE_IMAGE
                    asset_base=asset_base
                    alt="Mockup of the Learn Klingon app displayed on a Klingon PADD"
                    lazy=true
                />
            </div>
        </section>
    }
}
