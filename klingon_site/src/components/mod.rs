//! Leptos UI components for rendering the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── LandingPage
//!     ├── NavBar (reads NavigationMenu)
//!     ├── Hero
//!     ├── FeaturesSection      → FeatureCard per FEATURES entry
//!     ├── ShowcaseSection      → Highlight per HIGHLIGHTS entry
//!     ├── TestimonialsSection  → TestimonialCard per TESTIMONIALS entry
//!     ├── CallToAction         → one link per STORE_LINKS entry
//!     └── Footer
//! ```
//!
//! Only `NavBar` touches the menu state. Every other component is a pure
//! projection of the catalog, and list items are keyed by their record's
//! identity field.

mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod image;
mod nav;
mod showcase;
mod testimonials;

pub use cta::CallToAction;
pub use document::{LandingPage, PageDocument};
pub use features::{FeatureCard, FeaturesSection};
pub use footer::Footer;
pub use hero::Hero;
pub use image::AssetImage;
pub use nav::NavBar;
pub use showcase::ShowcaseSection;
pub use testimonials::{TestimonialCard, TestimonialsSection};

use leptos::prelude::*;

/// Eyebrow plus `<h2>` used at the top of each content section.
///
/// `heading_id` is the target of the section's `aria-labelledby`.
#[component]
pub fn SectionHeading(
    /// Small caps line above the heading
    eyebrow: &'static str,
    /// `id` of the `<h2>`
    heading_id: &'static str,
    /// Heading text
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <span>{eyebrow}</span>
            <h2 id=heading_id>{title}</h2>
        </div>
    }
}
