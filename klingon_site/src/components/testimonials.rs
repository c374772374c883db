//! Testimonials list.

use super::{AssetImage, SectionHeading};
use crate::catalog::{TESTIMONIALS, TestimonialRecord};
use leptos::prelude::*;

/// The `#testimonials` landmark: one card per [`TESTIMONIALS`] entry, keyed by name.
#[component]
pub fn TestimonialsSection(
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    view! {
        <section id="testimonials" class="section" aria-labelledby="testimonials-heading">
            <SectionHeading
                eyebrow="Honor Guard"
                heading_id="testimonials-heading"
                title="Voices From the Empire"
            />
            <div class="testimonials">
                <For
                    each=move || {
                        TESTIMONIALS
                            .clone()
                            .map(|testimonial| (testimonial, asset_base.clone()))
                    }
                    key=|(testimonial, _): &(TestimonialRecord, String)| testimonial.name
                    let:card
                >
                    <TestimonialCard testimonial={card.0} asset_base={card.1} />
                </For>
            </div>
        </section>
    }
}

/// A single testimonial: portrait, quote, name, and role.
#[component]
pub fn TestimonialCard(
    /// Record to render
    testimonial: TestimonialRecord,
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    view! {
        <article class="testimonial-card">
            <div class="testimonial-portrait">
                <AssetImage asset=testimonial.portrait asset_base=asset_base alt=testimonial.alt />
            </div>
            <p class="testimonial-quote">{testimonial.quote}</p>
            <div>
                <p class="testimonial-name">{testimonial.name}</p>
                <p class="testimonial-title">{testimonial.role}</p>
            </div>
        </article>
    }
}
