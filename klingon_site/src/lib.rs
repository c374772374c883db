//! # klingon-site
//!
//! Leptos SSR renderer for the Learn Klingon landing page.
//!
//! The page is built from fixed content plus one piece of interactive state:
//! whether the mobile navigation menu is open. Rendering is a pure function
//! of the site config, the menu state, and the current year, and the output
//! is a self-contained HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use klingon_site::{render_page, clock::FixedClock, config::SiteConfig, menu::NavigationMenu};
//!
//! let html = render_page(&SiteConfig::default(), NavigationMenu::new(), &FixedClock(2025));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("2025 Learn Klingon"));
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - Feature, testimonial, highlight, and store-link records
//! - [`menu`] - Menu state machine and the [`menu::NavigationMenu`] handle
//! - [`components`] - Leptos UI components
//! - [`config`] - `site.toml` loading
//! - [`clock`] - Year source for the footer
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod clock;
pub mod components;
pub mod config;
pub mod menu;
pub mod styles;

use clock::{Clock, SystemClock};
use components::PageDocument;
use config::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use menu::NavigationMenu;

/// Render the complete landing page.
///
/// The year is read from `clock` on every call. `menu` decides the
/// rendered `aria-expanded` value and link-list class, so tests can render
/// any menu state.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_page(config: &SiteConfig, menu: NavigationMenu, clock: &dyn Clock) -> String {
    let year = clock.current_year();

    // Keyed lists need a reactive owner while the view is built and rendered
    let html = Owner::new().with(|| {
        let doc = view! {
            <PageDocument config=config.clone() menu=menu year=year />
        };
        doc.to_html()
    });
    tracing::debug!(year, state = ?menu.state(), bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page as first loaded: menu closed, year from the system clock.
pub fn render_default(config: &SiteConfig) -> String {
    render_page(config, NavigationMenu::new(), &SystemClock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::menu::{MENU_ID, MenuState, NavLink};
    use pretty_assertions::assert_eq;

    fn render(menu: NavigationMenu) -> String {
        render_page(&SiteConfig::default(), menu, &FixedClock(2025))
    }

    /// Byte offsets of each needle, asserting every one is present.
    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| {
                html.find(needle)
                    .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
            })
            .collect()
    }

    fn is_sorted(offsets: &[usize]) -> bool {
        offsets.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn renders_complete_document() {
        let html = render(NavigationMenu::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("Learn Klingon: Honor Your Words</title>"));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn initial_load_renders_closed_menu() {
        let html = render(NavigationMenu::new());
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("class=\"nav-links\""));
        assert!(!html.contains("class=\"nav-links nav-links-open\""));
    }

    #[test]
    fn toggled_menu_renders_open() {
        let menu = NavigationMenu::new();
        menu.toggle();
        let html = render(menu);
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("class=\"nav-links nav-links-open\""));
    }

    #[test]
    fn toggle_then_link_renders_closed_again() {
        let menu = NavigationMenu::new();
        menu.toggle();
        assert_eq!(menu.activate(NavLink::Features), "#features");

        let html = render(menu);
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("id=\"features\""));
    }

    #[test]
    fn aria_expanded_tracks_state_without_drift() {
        for state in [MenuState::Closed, MenuState::Open] {
            let menu = NavigationMenu::with_state(state);
            let html = render(menu);
            let expected = format!("aria-expanded=\"{}\"", menu.state().aria_expanded());
            assert!(html.contains(&expected), "state {state:?}");
            assert_eq!(html.matches("aria-expanded=").count(), 1);
        }
    }

    #[test]
    fn controls_association_is_static() {
        for state in [MenuState::Closed, MenuState::Open] {
            let html = render(NavigationMenu::with_state(state));
            assert!(html.contains(&format!("aria-controls=\"{MENU_ID}\"")));
            assert!(html.contains(&format!("id=\"{MENU_ID}\"")));
        }
    }

    #[test]
    fn navigation_links_collapse_menu() {
        let html = render(NavigationMenu::new());
        // three menu links plus the header CTA; the script selector is not a link
        let marked = html.matches("data-closes-menu").count();
        let in_script = html.matches("[data-closes-menu]").count();
        assert_eq!(marked - in_script, 4);
        assert!(html.contains("href=\"#download\""));
    }

    #[test]
    fn menu_script_hooks_are_rendered() {
        let html = render(NavigationMenu::new());
        // the inline script selects the toggle by this attribute
        assert!(html.contains("[data-menu-toggle]"));
        assert!(html.contains("data-menu-toggle=\"\""));
        let toggle_at = html.find("data-menu-toggle=\"\"").expect("toggle hook");
        let button_at = html[..toggle_at].rfind("<button").expect("toggle is a button");
        assert!(!html[button_at..toggle_at].contains('>'));
    }

    #[test]
    fn default_render_starts_closed_with_current_year() {
        use chrono::Datelike;

        let before = chrono::Local::now().year();
        let html = render_default(&SiteConfig::default());
        let after = chrono::Local::now().year();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(
            html.contains(&format!("\u{a9} {before} Learn Klingon"))
                || html.contains(&format!("\u{a9} {after} Learn Klingon"))
        );
    }

    #[test]
    fn renders_three_features_in_order() {
        let html = render(NavigationMenu::new());
        assert_eq!(html.matches("class=\"feature-card\"").count(), 3);
        let offsets = positions(
            &html,
            &["Interactive Lessons", "Cultural Immersion", "Phrasebook"],
        );
        assert!(is_sorted(&offsets));
    }

    #[test]
    fn renders_three_testimonials_in_order() {
        let html = render(NavigationMenu::new());
        assert_eq!(html.matches("class=\"testimonial-card\"").count(), 3);
        let offsets = positions(
            &html,
            &["Scholar Kor", "Strategist Lursa", "Captain Martor"],
        );
        assert!(is_sorted(&offsets));
    }

    #[test]
    fn renders_showcase_highlights_in_order() {
        let html = render(NavigationMenu::new());
        assert_eq!(html.matches("class=\"highlight\"").count(), 3);
        let offsets = positions(
            &html,
            &["Honor Track", "Real-Time Analyzer", "Mission Scenarios"],
        );
        assert!(is_sorted(&offsets));
    }

    #[test]
    fn landmarks_are_anchored_and_labelled() {
        let html = render(NavigationMenu::new());
        for id in ["features", "showcase", "testimonials", "download"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        for heading in [
            "hero-heading",
            "features-heading",
            "showcase-heading",
            "testimonials-heading",
        ] {
            assert!(html.contains(&format!("aria-labelledby=\"{heading}\"")));
            assert!(html.contains(&format!("id=\"{heading}\"")));
        }
        assert!(html.contains("aria-label=\"Call to action\""));
        assert!(html.contains("aria-label=\"Primary\""));
        assert!(html.contains("aria-label=\"Footer\""));
        assert!(html.contains("href=\"#main-content\""));
        assert!(html.contains("<main id=\"main-content\""));
    }

    #[test]
    fn store_links_isolate_referrer() {
        let html = render(NavigationMenu::new());
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 2);
        assert!(html.contains("https://apps.apple.com"));
        assert!(html.contains("https://play.google.com/store"));
    }

    #[test]
    fn images_carry_explicit_dimensions() {
        let html = render(NavigationMenu::new());
        assert!(html.contains("src=\"/assets/hero-warrior.svg\""));
        assert_eq!(html.matches("width=\"120\" height=\"120\"").count(), 3);
        assert_eq!(html.matches("width=\"200\" height=\"200\"").count(), 3);
        assert_eq!(html.matches("width=\"640\" height=\"640\"").count(), 1);
        assert_eq!(html.matches("width=\"960\" height=\"640\"").count(), 1);
        assert_eq!(html.matches("width=\"96\" height=\"96\"").count(), 1);
    }

    #[test]
    fn asset_base_comes_from_config() {
        let config = SiteConfig {
            asset_base: "https://cdn.example.org/klingon/".into(),
            ..SiteConfig::default()
        };
        let html = render_page(&config, NavigationMenu::new(), &FixedClock(2025));
        assert!(html.contains("src=\"https://cdn.example.org/klingon/padd-showcase.svg\""));
    }

    #[test]
    fn footer_year_is_read_on_every_render() {
        let config = SiteConfig::default();
        let first = render_page(&config, NavigationMenu::new(), &FixedClock(2371));
        let second = render_page(&config, NavigationMenu::new(), &FixedClock(2372));
        assert!(first.contains("2371 Learn Klingon: Honor Your Words. All rights reserved."));
        assert!(second.contains("2372 Learn Klingon: Honor Your Words. All rights reserved."));
    }
}
