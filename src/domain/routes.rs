//! The fixed route table of the site.
//!
//! Six exact-match paths, each bound to one view. The table is closed at
//! compile time, so resolving a path is a total lookup that either finds a
//! route or reports that none matches.

use super::content::{self, Page};

/// One of the six pages the site can show.
///
/// # Examples
///
/// ```
/// use ehighway::domain::Route;
///
/// assert_eq!(Route::resolve("/services"), Some(Route::Services));
/// assert_eq!(Route::resolve("/services/"), None);
/// assert_eq!(Route::Contact.path(), "/contact");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Clients,
    Opportunities,
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Clients,
        Route::Opportunities,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Clients => "/clients",
            Route::Opportunities => "/opportunities",
            Route::Contact => "/contact",
        }
    }

    /// Label used by navigation links pointing at this route.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Services => "Services",
            Route::Clients => "Clients",
            Route::Opportunities => "Opportunities",
            Route::Contact => "Contact",
        }
    }

    /// Finds the route whose path equals `path` exactly.
    ///
    /// No trailing-slash normalisation, no query strings, no wildcards.
    pub fn resolve(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Builds this route's page.
    pub fn view(self) -> Page {
        match self {
            Route::Home => content::home(),
            Route::About => content::about(),
            Route::Services => content::services(),
            Route::Clients => content::clients(),
            Route::Opportunities => content::opportunities(),
            Route::Contact => content::contact(),
        }
    }
}

/// Builds the page for any path, falling back to the not-found view.
pub fn view_for_path(path: &str) -> Page {
    match Route::resolve(path) {
        Some(route) => route.view(),
        None => content::not_found(path),
    }
}
