//! Navigation state shared by the header, footer and router.
//!
//! Holds the current path and whether the mobile menu panel is expanded.
//! The active navigation link is derived from the path on demand.

use super::routes::Route;

/// Visibility of the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// A link in the primary navigation; the only links ever marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        self.route.label()
    }

    pub fn to(&self) -> &'static str {
        self.route.path()
    }
}

/// Primary navigation, one link per route.
pub static PRIMARY_NAV: [NavLink; 6] = [
    NavLink { route: Route::Home },
    NavLink { route: Route::About },
    NavLink { route: Route::Services },
    NavLink { route: Route::Clients },
    NavLink { route: Route::Opportunities },
    NavLink { route: Route::Contact },
];

/// Quick links in the footer. Plain links, never highlighted.
pub const FOOTER_LINKS: [(&str, &str); 4] = [
    ("About", "/about"),
    ("Services", "/services"),
    ("Clients", "/clients"),
    ("Opportunities", "/opportunities"),
];

pub const HELPLINE_TARGET: &str = "/contact";

/// Current location plus the mobile menu flag.
///
/// # Examples
///
/// ```
/// use ehighway::domain::{NavigationState, Route};
///
/// let mut nav = NavigationState::new("/");
/// nav.toggle_menu();
/// assert!(nav.is_menu_open());
///
/// nav.activate_link("/services");
/// assert!(!nav.is_menu_open());
/// assert_eq!(nav.active_link().map(|link| link.route), Some(Route::Services));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    menu: MenuState,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

impl NavigationState {
    pub fn new(path: &str) -> Self {
        Self {
            current_path: path.to_string(),
            menu: MenuState::Closed,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_route(&self) -> Option<Route> {
        Route::resolve(&self.current_path)
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// Flips the mobile menu. Never touches the path.
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    /// Moves to `path`. Returns whether the path changed.
    ///
    /// A changed path always closes the mobile menu.
    pub fn set_path(&mut self, path: &str) -> bool {
        if self.current_path == path {
            return false;
        }
        self.current_path = path.to_string();
        self.menu = MenuState::Closed;
        true
    }

    /// Follows a link: closes the menu, then moves to `to`.
    ///
    /// Returns whether the path changed.
    pub fn activate_link(&mut self, to: &str) -> bool {
        self.menu = MenuState::Closed;
        self.set_path(to)
    }

    /// The primary nav link whose target equals the current path.
    pub fn active_link(&self) -> Option<&'static NavLink> {
        PRIMARY_NAV.iter().find(|link| link.to() == self.current_path)
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        link.to() == self.current_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::default();
        assert_eq!(nav.current_path(), "/");
        assert_eq!(nav.menu(), MenuState::Closed);
        assert_eq!(nav.current_route(), Some(Route::Home));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut nav = NavigationState::new("/about");
        let before = nav.clone();
        nav.toggle_menu();
        assert_ne!(nav, before);
        nav.toggle_menu();
        assert_eq!(nav, before);

        nav.toggle_menu();
        let open = nav.clone();
        nav.toggle_menu();
        nav.toggle_menu();
        assert_eq!(nav, open);
    }

    #[test]
    fn test_toggle_keeps_path() {
        let mut nav = NavigationState::new("/clients");
        nav.toggle_menu();
        assert_eq!(nav.current_path(), "/clients");
    }

    #[test]
    fn test_path_change_closes_menu() {
        for start in [MenuState::Closed, MenuState::Open] {
            let mut nav = NavigationState::new("/");
            if start == MenuState::Open {
                nav.toggle_menu();
            }
            assert!(nav.set_path("/contact"));
            assert_eq!(nav.menu(), MenuState::Closed);
        }
    }

    #[test]
    fn test_same_path_is_not_a_change() {
        let mut nav = NavigationState::new("/about");
        nav.toggle_menu();
        assert!(!nav.set_path("/about"));
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_activate_link_to_current_path_closes_menu() {
        let mut nav = NavigationState::new("/about");
        nav.toggle_menu();
        assert!(!nav.activate_link("/about"));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_exactly_one_active_link_per_route() {
        for route in Route::ALL {
            let nav = NavigationState::new(route.path());
            let active: Vec<_> = PRIMARY_NAV.iter().filter(|link| nav.is_active(link)).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].route, route);
            assert_eq!(nav.active_link().map(|link| link.route), Some(route));
        }
    }

    #[test]
    fn test_unknown_path_has_no_active_link() {
        let nav = NavigationState::new("/unknown");
        assert!(nav.active_link().is_none());
        assert!(PRIMARY_NAV.iter().all(|link| !nav.is_active(link)));
    }

    #[test]
    fn test_footer_links_resolve() {
        for (_, to) in FOOTER_LINKS {
            assert!(Route::resolve(to).is_some());
        }
        assert_eq!(Route::resolve(HELPLINE_TARGET), Some(Route::Contact));
    }
}
