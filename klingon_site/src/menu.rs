//! Mobile navigation menu state.
//!
//! The menu is the page's only piece of interactive state. [`MenuState`]
//! holds the transition table as pure functions. [`NavigationMenu`] owns the
//! reactive signal that views read, and it is the only thing that writes to
//! that signal.
//!
//! ```text
//!   from     toggle   close
//!   Closed   Open     Closed
//!   Open     Closed   Closed
//! ```

use leptos::prelude::*;

/// DOM id of the collapsible link list, referenced by `aria-controls`.
pub const MENU_ID: &str = "primary-navigation";

/// Open/closed state of the mobile navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Link list collapsed. The initial state.
    #[default]
    Closed,
    /// Link list expanded
    Open,
}

impl MenuState {
    /// The state after a toggle.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// The state after a close. Always `Closed`.
    pub const fn closed(self) -> Self {
        Self::Closed
    }

    /// Whether the link list is expanded.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Value for the toggle control's `aria-expanded` attribute.
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// In-page destinations reachable from the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavLink {
    /// `#features`
    Features,
    /// `#showcase`
    Showcase,
    /// `#testimonials`
    Testimonials,
    /// The call-to-action link next to the menu
    Download,
}

impl NavLink {
    /// Links shown inside the collapsible list, in display order.
    pub const MENU: [NavLink; 3] = [NavLink::Features, NavLink::Showcase, NavLink::Testimonials];

    /// Anchor of the landmark this link jumps to.
    pub const fn href(self) -> &'static str {
        match self {
            Self::Features => "#features",
            Self::Showcase => "#showcase",
            Self::Testimonials => "#testimonials",
            Self::Download => "#download",
        }
    }

    /// Short label used in the header.
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Showcase => "App",
            Self::Testimonials => "Honor",
            Self::Download => "Begin",
        }
    }

    /// Descriptive label used in the footer.
    pub const fn footer_label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Showcase => "Showcase",
            Self::Testimonials => "Testimonials",
            Self::Download => "Download",
        }
    }
}

/// Handle to the menu's reactive state.
///
/// The handle is `Copy`, so event closures can capture it by value. The
/// signal is private. Only [`toggle`](Self::toggle), [`close`](Self::close),
/// and [`activate`](Self::activate) change it.
#[derive(Clone, Copy, Debug)]
pub struct NavigationMenu {
    state: RwSignal<MenuState>,
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationMenu {
    /// A new menu, starting closed.
    pub fn new() -> Self {
        Self::with_state(MenuState::Closed)
    }

    /// A menu in the given state, for rendering a particular snapshot.
    pub fn with_state(state: MenuState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Current state. Tracked when read inside a reactive closure.
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Whether the menu is open. Tracked like [`state`](Self::state).
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Flip between open and closed.
    pub fn toggle(&self) {
        self.state.update(|state| *state = state.toggled());
        tracing::debug!(state = ?self.state.get_untracked(), "menu toggled");
    }

    /// Collapse the menu. Idempotent.
    pub fn close(&self) {
        if self.state.get_untracked().is_open() {
            self.state.set(MenuState::Closed);
            tracing::debug!("menu closed");
        }
    }

    /// Follow a navigation link: collapse the menu and return the anchor
    /// the browser should scroll to.
    pub fn activate(&self, link: NavLink) -> &'static str {
        self.close();
        link.href()
    }
}
