//! Header navigation with the collapsible mobile menu.

use crate::menu::{MENU_ID, NavLink, NavigationMenu};
use leptos::prelude::*;

/// Site header: brand, menu toggle, link list, and the primary CTA.
///
/// `aria-controls` on the toggle and `id` on the link list are both
/// [`MENU_ID`], independent of state. `aria-expanded` and the
/// `nav-links-open` class hook follow the menu state.
#[component]
pub fn NavBar(
    /// Menu state handle; the only writer of the open/closed state
    menu: NavigationMenu,
) -> impl IntoView {
    let links_class = move || {
        if menu.is_open() {
            "nav-links nav-links-open"
        } else {
            "nav-links"
        }
    };

    view! {
        <header>
            <nav class="nav" aria-label="Primary">
                <div class="brand">
                    <span class="brand-logo" aria-hidden="true"></span>
                    <span class="brand-name">"Learn Klingon"</span>
                </div>

                <button
                    type="button"
                    class="menu-toggle"
                    data-menu-toggle=""
                    aria-expanded=move || menu.state().aria_expanded()
                    aria-controls=MENU_ID
                    on:click=move |_| menu.toggle()
                >
                    "Menu"
                </button>

                <div id=MENU_ID class=links_class>
                    {NavLink::MENU
                        .into_iter()
                        .map(|link| view! { <MenuLink menu=menu link=link /> })
                        .collect::<Vec<_>>()}
                </div>

                <MenuLink menu=menu link=NavLink::Download class="nav-cta" />
            </nav>
        </header>
    }
}

/// An in-page anchor that collapses the menu when followed.
#[component]
fn MenuLink(
    menu: NavigationMenu,
    link: NavLink,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=link.href()
            class=class
            data-closes-menu=""
            on:click=move |_| {
                menu.activate(link);
            }
        >
            {link.menu_label()}
        </a>
    }
}
