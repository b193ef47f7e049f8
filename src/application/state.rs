//! Application state for the terminal site.
//!
//! `App` owns the navigation state, the router, the body viewport and the
//! state of every input surface (address bar, search box, contact form).
//! The input handler mutates it; the renderer reads it once per frame.

use super::contact::{ContactField, ContactForm, ContactSink, UnconfiguredSink};
use super::router::{Effect, Router};
use super::scroll::Viewport;
use crate::domain::{
    search_site, view_for_path, NavigationState, Page, Route, SearchHit, SiteResult,
    FOOTER_LINKS, HELPLINE_TARGET, PRIMARY_NAV,
};

/// Default terminal width, in columns, below which the mobile layout is used.
pub const DEFAULT_BREAKPOINT: u16 = 100;

/// Determines how key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Reading a page; shortcuts and focus navigation available
    Browsing,
    /// Typing a path into the address bar
    AddressBar,
    /// Typing into the header search box
    Search,
    /// Typing into a contact form field
    ContactForm,
    /// Key binding help is displayed
    Help,
}

/// Something Tab can land on and Enter can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focusable {
    /// Index into [`Page::links`] of the current page
    PageLink(usize),
    Field(ContactField),
    Submit,
    /// Index into [`FOOTER_LINKS`]
    FooterLink(usize),
    Helpline,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use ehighway::application::App;
///
/// let mut app = App::default();
/// assert_eq!(app.nav.current_path(), "/");
///
/// app.navigate("/clients");
/// assert_eq!(app.nav.current_path(), "/clients");
/// ```
#[derive(Debug)]
pub struct App {
    pub nav: NavigationState,
    pub router: Router,
    pub mode: AppMode,
    pub viewport: Viewport,
    /// Terminal width in columns
    pub width: u16,
    /// Widths below this use the mobile layout
    pub breakpoint: u16,
    /// Index into [`App::focusables`]
    pub focus: Option<usize>,
    /// Focus target last scrolled into view
    pub revealed_focus: Option<Focusable>,
    /// Address bar input buffer
    pub address_input: String,
    /// Cursor position (bytes) within the address or search buffer
    pub cursor_position: usize,
    pub search_query: String,
    pub search_results: Vec<SearchHit>,
    pub search_result_index: usize,
    pub contact: ContactForm,
    pub contact_sink: Box<dyn ContactSink>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Number of scroll-to-top effects applied so far
    pub scroll_resets: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::Home.path(), DEFAULT_BREAKPOINT)
    }
}

impl App {
    pub fn new(start_path: &str, breakpoint: u16) -> Self {
        Self {
            nav: NavigationState::new(start_path),
            router: Router::default(),
            mode: AppMode::Browsing,
            viewport: Viewport::default(),
            width: 120,
            breakpoint,
            focus: None,
            revealed_focus: None,
            address_input: String::new(),
            cursor_position: 0,
            search_query: String::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            contact: ContactForm::default(),
            contact_sink: Box::new(UnconfiguredSink),
            help_scroll: 0,
            status_message: None,
            scroll_resets: 0,
        }
    }

    pub fn with_contact_sink(mut self, sink: Box<dyn ContactSink>) -> Self {
        self.contact_sink = sink;
        self
    }

    /// The view for the current path.
    pub fn page(&self) -> Page {
        view_for_path(self.nav.current_path())
    }

    pub fn is_narrow(&self) -> bool {
        self.width < self.breakpoint
    }

    /// Whether the mobile panel is on screen.
    pub fn menu_panel_visible(&self) -> bool {
        self.is_narrow() && self.nav.is_menu_open()
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
        tracing::debug!(open = self.nav.is_menu_open(), "toggled mobile menu");
    }

    /// Follows a link to `to`. Closes the mobile menu even when `to` is the
    /// current path. Returns whether the path changed.
    pub fn navigate(&mut self, to: &str) -> bool {
        let from = self.nav.current_path().to_string();
        if !self.nav.activate_link(to) {
            return false;
        }
        self.router.record_visit(&from);
        self.on_path_changed(&from);
        true
    }

    /// Goes to the previous page in session history.
    pub fn go_back(&mut self) -> bool {
        let from = self.nav.current_path().to_string();
        match self.router.back(&from) {
            Some(previous) => self.move_without_history(&from, &previous),
            None => false,
        }
    }

    /// Goes to the next page in session history.
    pub fn go_forward(&mut self) -> bool {
        let from = self.nav.current_path().to_string();
        match self.router.forward(&from) {
            Some(next) => self.move_without_history(&from, &next),
            None => false,
        }
    }

    fn move_without_history(&mut self, from: &str, to: &str) -> bool {
        if !self.nav.set_path(to) {
            return false;
        }
        self.on_path_changed(from);
        true
    }

    fn on_path_changed(&mut self, from: &str) {
        tracing::info!(from, to = self.nav.current_path(), "navigated");
        // The form belongs to the contact view and goes away with it.
        if Route::resolve(from) == Some(Route::Contact) {
            self.contact.clear();
        }
        self.contact.end();
        self.focus = None;
        self.status_message = None;
        if matches!(self.mode, AppMode::ContactForm) {
            self.mode = AppMode::Browsing;
        }
    }

    /// Runs after a frame has been drawn: commits the path and applies
    /// whatever effect the router fires.
    pub fn after_render(&mut self) {
        if let Some(effect) = self.router.commit(self.nav.current_path()) {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScrollToTop => {
                self.viewport.scroll_to_top_smooth();
                self.scroll_resets += 1;
                tracing::debug!(path = self.nav.current_path(), "scroll to top");
            }
        }
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        self.viewport.tick();
    }

    /// Follows the primary nav link at `index`.
    pub fn activate_nav(&mut self, index: usize) {
        if let Some(link) = PRIMARY_NAV.get(index) {
            self.navigate(link.to());
        }
    }

    pub fn start_address_bar(&mut self) {
        self.mode = AppMode::AddressBar;
        self.address_input = self.nav.current_path().to_string();
        self.cursor_position = self.address_input.len();
        self.status_message = None;
    }

    pub fn cancel_address_bar(&mut self) {
        self.mode = AppMode::Browsing;
        self.address_input.clear();
        self.cursor_position = 0;
    }

    /// Navigates to the typed path. Empty input means `/`.
    pub fn finish_address_bar(&mut self) {
        let typed = self.address_input.trim();
        let target = (if typed.is_empty() { Route::Home.path() } else { typed }).to_string();
        self.cancel_address_bar();

        let from = self.nav.current_path().to_string();
        if self.nav.set_path(&target) {
            self.router.record_visit(&from);
            self.on_path_changed(&from);
        }
    }

    pub fn start_search(&mut self) {
        self.mode = AppMode::Search;
        self.search_query.clear();
        self.search_results.clear();
        self.search_result_index = 0;
        self.cursor_position = 0;
        self.status_message = None;
    }

    pub fn cancel_search(&mut self) {
        self.mode = AppMode::Browsing;
        self.search_query.clear();
        self.search_results.clear();
        self.search_result_index = 0;
        self.cursor_position = 0;
    }

    pub fn perform_search(&mut self) {
        self.search_results = search_site(&self.search_query);
        self.search_result_index = 0;
    }

    pub fn next_search_result(&mut self) {
        if !self.search_results.is_empty() {
            self.search_result_index = (self.search_result_index + 1) % self.search_results.len();
        }
    }

    pub fn previous_search_result(&mut self) {
        if !self.search_results.is_empty() {
            if self.search_result_index == 0 {
                self.search_result_index = self.search_results.len() - 1;
            } else {
                self.search_result_index -= 1;
            }
        }
    }

    /// Leaves search, following the selected hit if there is one.
    pub fn finish_search(&mut self) {
        let query = self.search_query.clone();
        let selected = self.search_results.get(self.search_result_index).map(|hit| hit.route);
        let count = self.search_results.len();
        self.cancel_search();

        match selected {
            Some(route) => {
                tracing::info!(query = %query, results = count, "search");
                self.navigate(route.path());
                self.status_message = Some(format!(
                    "{} result{} for '{}'",
                    count,
                    if count == 1 { "" } else { "s" },
                    query
                ));
            }
            None => {
                self.status_message = Some(format!("No results found for '{query}'"));
            }
        }
    }

    /// Everything Tab cycles through on the current screen, in order.
    pub fn focusables(&self) -> Vec<Focusable> {
        let page = self.page();
        let mut items: Vec<Focusable> = (0..page.links().len()).map(Focusable::PageLink).collect();
        if page.has_contact_form() {
            items.extend(ContactField::ALL.into_iter().map(Focusable::Field));
            items.push(Focusable::Submit);
        }
        items.extend((0..FOOTER_LINKS.len()).map(Focusable::FooterLink));
        if !self.is_narrow() || self.nav.is_menu_open() {
            items.push(Focusable::Helpline);
        }
        items
    }

    pub fn focused(&self) -> Option<Focusable> {
        self.focus.and_then(|index| self.focusables().get(index).copied())
    }

    pub fn focus_next(&mut self) {
        let count = self.focusables().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    pub fn focus_previous(&mut self) {
        let count = self.focusables().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(0) | None => count - 1,
            Some(index) => (index - 1).min(count - 1),
        });
    }

    /// Scrolls the body to the focused item, laid out at content rows
    /// `rows`, and to the editing cursor at `cursor_row`.
    ///
    /// Focus is only revealed when it has moved, so the body can still be
    /// scrolled by hand while something keeps focus.
    pub fn reveal_focus(&mut self, rows: Option<(usize, usize)>, cursor_row: Option<usize>) {
        let target = self.focused();
        if target != self.revealed_focus {
            if let Some((top, bottom)) = rows {
                self.viewport.ensure_visible(top, bottom);
            }
            self.revealed_focus = target;
        }
        if let Some(row) = cursor_row {
            self.viewport.ensure_visible(row, row);
        }
    }

    fn focus_on(&mut self, target: Focusable) {
        self.focus = self.focusables().iter().position(|item| *item == target);
    }

    /// Activates whatever has focus.
    pub fn activate_focused(&mut self) {
        let Some(target) = self.focused() else { return };
        match target {
            Focusable::PageLink(index) => {
                let to = self.page().links().get(index).map(|link| link.to.clone());
                if let Some(to) = to {
                    self.navigate(&to);
                }
            }
            Focusable::Field(field) => self.begin_contact_edit(field),
            Focusable::Submit => self.submit_contact(),
            Focusable::FooterLink(index) => {
                if let Some((_, to)) = FOOTER_LINKS.get(index) {
                    self.navigate(to);
                }
            }
            Focusable::Helpline => {
                self.navigate(HELPLINE_TARGET);
            }
        }
    }

    pub fn begin_contact_edit(&mut self, field: ContactField) {
        if !self.page().has_contact_form() {
            return;
        }
        self.mode = AppMode::ContactForm;
        self.contact.begin(field);
        self.focus_on(Focusable::Field(field));
        self.status_message = None;
    }

    /// Moves to the next field, or to the submit button after the last one.
    pub fn next_contact_field(&mut self) {
        match self.contact.editing.and_then(ContactField::next) {
            Some(next) => self.begin_contact_edit(next),
            None => {
                self.finish_contact_edit();
                self.focus_on(Focusable::Submit);
            }
        }
    }

    pub fn finish_contact_edit(&mut self) {
        self.contact.end();
        self.mode = AppMode::Browsing;
    }

    /// Hands the form to the contact sink. The form is kept on failure.
    pub fn submit_contact(&mut self) {
        self.finish_contact_edit();
        match self.contact_sink.deliver(&self.contact.values) {
            Ok(()) => {
                tracing::info!("contact message delivered");
                self.contact.clear();
                self.status_message = Some("Message sent. We'll be in touch.".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message not delivered");
                self.status_message = Some(format!("Message not sent: {err}"));
            }
        }
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Browsing;
    }

    pub fn set_copy_result(&mut self, result: SiteResult<()>) {
        match result {
            Ok(()) => {
                self.status_message = Some("Helpline numbers copied to clipboard".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "copy failed");
                self.status_message = Some(format!("Copy failed: {err}"));
            }
        }
    }
}
