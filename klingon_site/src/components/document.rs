//! Root document component - the complete HTML page
//!
//! `LandingPage` composes the header and the content sections. It owns no
//! state. It only passes the [`NavigationMenu`] handle to the header.
//! `PageDocument` wraps it in the `<html>` shell.

use super::{
    CallToAction, FeaturesSection, Footer, Hero, NavBar, ShowcaseSection, TestimonialsSection,
};
use crate::config::SiteConfig;
use crate::menu::NavigationMenu;
use crate::styles::{CSP, PAGE_CSS};
use leptos::prelude::*;

/// Skip link, header, main landmark with all sections, and footer.
#[component]
pub fn LandingPage(
    /// Menu state handle, passed through to the header
    menu: NavigationMenu,
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
    /// Copyright year, computed by the caller for this render
    year: i32,
) -> impl IntoView {
    view! {
        <div class="page">
            <a class="sr-only" href="#main-content">
                "Skip to main content"
            </a>

            <NavBar menu=menu />

            <main id="main-content">
                <Hero asset_base=asset_base.clone() />
                <FeaturesSection asset_base=asset_base.clone() />
                <ShowcaseSection asset_base=asset_base.clone() />
                <TestimonialsSection asset_base=asset_base.clone() />
                <CallToAction />
            </main>

            <Footer year=year asset_base=asset_base />
        </div>
    }
}

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    /// Title, description, language, and asset base
    config: SiteConfig,
    /// Menu state handle
    menu: NavigationMenu,
    /// Copyright year for the footer
    year: i32,
) -> impl IntoView {
    view! {
        <html lang=config.lang.clone()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{config.title.clone()}</title>
                <meta name="description" content=config.description.clone() />
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <LandingPage menu=menu asset_base=config.asset_base.clone() year=year />
                <script>{MENU_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Browser-side menu transitions for the exported static page.
///
/// Toggle flips `aria-expanded` and the `nav-links-open` hook. Any
/// `[data-closes-menu]` link collapses the menu. The open state is read
/// back from `aria-expanded` so the attribute cannot drift from it.
const MENU_SCRIPT: &str = r#"
(() => {
  const toggle = document.querySelector('[data-menu-toggle]');
  if (!toggle) return;
  const menu = document.getElementById(toggle.getAttribute('aria-controls'));
  if (!menu) return;

  const render = (open) => {
    toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    menu.classList.toggle('nav-links-open', open);
  };

  toggle.addEventListener('click', () => {
    render(toggle.getAttribute('aria-expanded') !== 'true');
  });

  document.querySelectorAll('[data-closes-menu]').forEach((link) => {
    link.addEventListener('click', () => render(false));
  });
})();
"#;
