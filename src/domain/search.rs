//! Case-insensitive text search over the site's pages.

use super::routes::Route;

/// One page that matched a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub route: Route,
    /// First text on the page containing the query.
    pub excerpt: String,
}

/// Searches every routed page for `query`.
///
/// Returns at most one hit per page, in route order. An empty or
/// whitespace-only query matches nothing.
///
/// # Examples
///
/// ```
/// use ehighway::domain::{search_site, Route};
///
/// let hits = search_site("cctv");
/// assert!(hits.iter().any(|hit| hit.route == Route::Services));
/// assert!(search_site("   ").is_empty());
/// ```
pub fn search_site(query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    Route::ALL
        .into_iter()
        .filter_map(|route| {
            let page = route.view();
            let excerpt = page
                .searchable_text()
                .into_iter()
                .find(|text| text.to_lowercase().contains(&needle))
                .map(str::to_string);
            excerpt.map(|excerpt| SearchHit { route, excerpt })
        })
        .collect()
}
