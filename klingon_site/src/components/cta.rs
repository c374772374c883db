//! Call-to-action banner.

use crate::catalog::{STORE_LINKS, StoreLink};
use leptos::prelude::*;

/// The `#download` landmark with outbound store links.
///
/// Store links open in a new browsing context with `noopener noreferrer`.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="download" class="section cta-banner" aria-label="Call to action">
            <div class="cta-content">
                <span class="eyebrow">"Final Directive"</span>
                <h2 class="cta-title">"Seize Your Destiny. Download Learn Klingon Today!"</h2>
                <p class="hero-subtitle">
                    "Harness the discipline of the Empire across every device. Your command of the tongue "
                    "begins where pride meets precision."
                </p>
            </div>
            <div class="download-buttons">
                <For
                    each=move || STORE_LINKS.clone()
                    key=|store: &StoreLink| store.label
                    let:store
                >
                    <a
                        class="download-button"
                        href=store.href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {store.label}
                    </a>
                </For>
            </div>
        </section>
    }
}
