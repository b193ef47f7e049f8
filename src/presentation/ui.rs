use crate::application::{App, AppMode, ContactField, Focusable};
use crate::domain::{
    Block as ContentBlock, Card, CardBody, Hero, Icon, Link, LinkStyle, Page, Route, Section, ADDRESS,
    COMPANY, EMAIL, FOOTER_LINKS, HELPLINE, PRIMARY_NAV, SEARCH_PLACEHOLDER, TAGLINE,
};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::LightGreen;
const EMERALD: Color = Color::Green;
const MUTED: Color = Color::Gray;
const SUBTLE: Color = Color::DarkGray;

const ADDRESS_HOST: &str = "ehighway.tech";
const FOOTER_HEIGHT: u16 = 7;
const MENU_PANEL_LINES: u16 = Route::ALL.len() as u16 + 2;
const MESSAGE_ROWS: usize = 4;
const CURSOR: char = '▏';

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.set_width(area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(header_height(app)),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    render_address_bar(f, app, chunks[0]);
    render_header(f, app, chunks[1]);
    render_body(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
    render_status_bar(f, app, chunks[4]);

    match app.mode {
        AppMode::Search => render_search_results(f, app, chunks[2]),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        _ => {}
    }
}

fn header_height(app: &App) -> u16 {
    if app.menu_panel_visible() {
        3 + MENU_PANEL_LINES
    } else {
        3
    }
}

fn focus_style(style: Style, focused: bool) -> Style {
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn button(label: &str, style: LinkStyle, focused: bool) -> Span<'static> {
    let (text, base) = match style {
        LinkStyle::Solid => (
            format!(" {label} "),
            Style::default().bg(EMERALD).fg(Color::Black).add_modifier(Modifier::BOLD),
        ),
        LinkStyle::Outline => (format!("[ {label} ]"), Style::default().fg(ACCENT)),
    };
    Span::styled(text, focus_style(base, focused))
}

fn helpline_button(app: &App) -> Span<'static> {
    let label = format!("{} Helpline", Icon::Phone.glyph());
    button(&label, LinkStyle::Solid, app.focused() == Some(Focusable::Helpline))
}

fn logo() -> Vec<Span<'static>> {
    vec![
        Span::styled(Icon::Shield.glyph(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" {COMPANY}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Inserts a cursor marker at byte offset `cursor`.
fn with_cursor(text: &str, cursor: usize) -> String {
    let mut shown = text.to_string();
    let cursor = cursor.min(shown.len());
    if shown.is_char_boundary(cursor) {
        shown.insert(cursor, CURSOR);
    } else {
        shown.push(CURSOR);
    }
    shown
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

/// `width` characters of `text`, scrolled horizontally so the character at
/// index `anchor` is inside the window.
fn window(text: &str, width: usize, anchor: usize) -> String {
    let start = (anchor + 1).saturating_sub(width);
    let tail: String = text.chars().skip(start).collect();
    fit(&tail, width)
}

fn render_address_bar(f: &mut Frame, app: &App, area: Rect) {
    let history = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(SUBTLE)
        }
    };

    let mut spans = vec![
        Span::styled(" ◀", history(app.router.can_go_back())),
        Span::styled(" ▶ ", history(app.router.can_go_forward())),
        Span::styled(ADDRESS_HOST, Style::default().fg(SUBTLE)),
    ];
    if matches!(app.mode, AppMode::AddressBar) {
        spans.push(Span::styled(
            with_cursor(&app.address_input, app.cursor_position),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            app.nav.current_path().to_string(),
            Style::default().fg(Color::White),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn search_box(app: &App, compact: bool) -> Span<'static> {
    let glyph = Icon::Search.glyph();
    if matches!(app.mode, AppMode::Search) {
        let query = with_cursor(&app.search_query, app.cursor_position);
        return Span::styled(
            format!(" {glyph} {query} "),
            Style::default().fg(Color::White).bg(SUBTLE),
        );
    }
    let text = if compact {
        format!(" {glyph} Search… (/) ")
    } else {
        format!(" {glyph} {SEARCH_PLACEHOLDER} ")
    };
    Span::styled(text, Style::default().fg(MUTED))
}

fn nav_link_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(MUTED)
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUBTLE));
    let bar = block.inner(parts[0]);
    f.render_widget(block, parts[0]);

    if app.is_narrow() {
        render_narrow_bar(f, app, bar);
    } else {
        let mut spans = logo();
        spans.push(Span::raw("  "));
        spans.push(search_box(app, true));
        spans.push(Span::raw("  "));
        for (i, link) in PRIMARY_NAV.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(link.label(), nav_link_style(app.nav.is_active(link))));
        }
        spans.push(Span::raw("  "));
        spans.push(helpline_button(app));
        f.render_widget(Paragraph::new(Line::from(spans)), bar);
    }

    if app.menu_panel_visible() {
        render_menu_panel(f, app, parts[1]);
    }
}

fn render_narrow_bar(f: &mut Frame, app: &App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(logo())), parts[0]);

    let icon = if app.nav.is_menu_open() { Icon::Close } else { Icon::Menu };
    let toggle = Paragraph::new(format!("[{}]", icon.glyph()))
        .style(Style::default().fg(ACCENT))
        .alignment(Alignment::Right);
    f.render_widget(toggle, parts[1]);
}

fn render_menu_panel(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(search_box(app, false))];
    for link in &PRIMARY_NAV {
        lines.push(Line::from(Span::styled(
            format!("  {}", link.label()),
            nav_link_style(app.nav.is_active(link)),
        )));
    }
    lines.push(Line::from(vec![Span::raw("  "), helpline_button(app)]));

    let panel = area.inner(Margin { horizontal: 1, vertical: 0 });
    f.render_widget(Paragraph::new(lines), panel);
}

fn render_body(f: &mut Frame, app: &mut App, area: Rect) {
    let inner = area.inner(Margin { horizontal: 2, vertical: 0 });
    let page = app.page();
    let layout = layout_page(app, &page, inner.width as usize);
    app.viewport.resize(inner.height as usize, layout.lines.len());
    app.reveal_focus(layout.focus_rows, layout.cursor_row);

    let offset = u16::try_from(app.viewport.offset()).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(layout.lines).scroll((offset, 0)), inner);
}

/// A page laid out as terminal lines.
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    /// First and last row of the focused item
    pub focus_rows: Option<(usize, usize)>,
    /// Row holding the cursor of the field being edited
    pub cursor_row: Option<usize>,
}

/// Lays out a page for a body `width` columns wide.
pub fn layout_page(app: &App, page: &Page, width: usize) -> PageLayout {
    let mut writer = PageWriter {
        app,
        width,
        focused: app.focused(),
        next_link: 0,
        lines: Vec::new(),
        focus_rows: None,
        cursor_row: None,
    };
    if let Some(hero) = &page.hero {
        writer.hero(hero);
    }
    for section in &page.sections {
        writer.section(section);
    }
    PageLayout {
        lines: writer.lines,
        focus_rows: writer.focus_rows,
        cursor_row: writer.cursor_row,
    }
}

struct PageWriter<'a> {
    app: &'a App,
    width: usize,
    focused: Option<Focusable>,
    /// Index of the next page link, matching [`Page::links`] order
    next_link: usize,
    lines: Vec<Line<'static>>,
    focus_rows: Option<(usize, usize)>,
    cursor_row: Option<usize>,
}

impl PageWriter<'_> {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Marks the rows from `top` to the last line written as focused.
    fn mark_focus(&mut self, top: usize) {
        self.focus_rows = Some((top, self.lines.len().saturating_sub(1)));
    }

    fn wrapped(&mut self, text: &str, indent: usize, style: Style) {
        let pad = " ".repeat(indent);
        for row in wrap(text, self.width.saturating_sub(indent)) {
            self.lines.push(Line::styled(format!("{pad}{row}"), style));
        }
    }

    fn buttons(&mut self, links: &[Link], trailing: Option<Span<'static>>) {
        let mut spans = Vec::new();
        let mut holds_focus = false;
        for link in links {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            let focused = self.focused == Some(Focusable::PageLink(self.next_link));
            holds_focus |= focused;
            spans.push(button(&link.label, link.style, focused));
            self.next_link += 1;
        }
        if let Some(span) = trailing {
            spans.push(Span::raw("  "));
            spans.push(span);
        }
        self.lines.push(Line::from(spans));
        if holds_focus {
            self.mark_focus(self.lines.len() - 1);
        }
    }

    fn hero(&mut self, hero: &Hero) {
        let bold = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        self.blank();
        self.lines.push(Line::from(vec![
            Span::styled(hero.lead.clone(), bold),
            Span::styled(hero.highlight.clone(), bold.fg(ACCENT)),
            Span::styled(",", bold),
        ]));
        self.wrapped(&hero.trail, 0, bold);
        self.blank();
        self.wrapped(&hero.lede, 0, Style::default().fg(MUTED));
        self.blank();
        let chip = Span::styled(format!(" {} ", hero.chip), Style::default().fg(ACCENT));
        self.buttons(&hero.actions, Some(chip));
        self.blank();
        self.lines.push(Line::from(vec![
            Span::styled(Icon::Shield.glyph(), Style::default().fg(ACCENT)),
            Span::styled(format!(" {}", hero.badge), Style::default().fg(MUTED)),
        ]));
        self.blank();
    }

    fn section(&mut self, section: &Section) {
        self.blank();
        self.wrapped(
            &section.title,
            0,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        );
        if let Some(subtitle) = &section.subtitle {
            self.wrapped(subtitle, 0, Style::default().fg(SUBTLE));
        }
        self.blank();

        for block in &section.blocks {
            match block {
                ContentBlock::Cards(cards) => self.cards(cards),
                ContentBlock::Tiles(tiles) => self.tiles(tiles),
                ContentBlock::Paragraph(text) => {
                    self.wrapped(text, 0, Style::default().fg(MUTED));
                    self.blank();
                }
                ContentBlock::Links(links) => {
                    self.buttons(links, None);
                    self.blank();
                }
                ContentBlock::ContactForm => self.contact_form(),
            }
        }
    }

    fn cards(&mut self, cards: &[Card]) {
        for card in cards {
            let mut heading = Vec::new();
            if let Some(icon) = card.icon {
                heading.push(Span::styled(format!("{} ", icon.glyph()), Style::default().fg(ACCENT)));
            }
            heading.push(Span::styled(
                card.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            self.lines.push(Line::from(heading));

            match &card.body {
                CardBody::Text(text) => self.wrapped(text, 2, Style::default().fg(MUTED)),
                CardBody::Bullets(items) => {
                    for item in items {
                        self.wrapped(&format!("• {item}"), 2, Style::default().fg(MUTED));
                    }
                }
            }
            self.blank();
        }
    }

    fn tiles(&mut self, tiles: &[String]) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for tile in tiles {
            let text = format!("[ {tile} ]");
            let len = text.chars().count();
            if used > 0 && used + 2 + len > self.width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw("  "));
                used += 2;
            }
            spans.push(Span::styled(text, Style::default().fg(MUTED)));
            used += len;
        }
        if !spans.is_empty() {
            self.lines.push(Line::from(spans));
        }
        self.blank();
    }

    fn contact_form(&mut self) {
        let app = self.app;
        let form = &app.contact;
        let inner_width = self.width.min(60).saturating_sub(4).max(8);

        for field in ContactField::ALL {
            let editing = form.editing == Some(field);
            let focused = self.focused == Some(Focusable::Field(field));
            let value = form.value(field);

            let (text, text_style) = if editing {
                (with_cursor(value, form.cursor_position), Style::default().fg(Color::White))
            } else if value.is_empty() {
                (field.placeholder().to_string(), Style::default().fg(SUBTLE))
            } else {
                (value.to_string(), Style::default().fg(Color::White))
            };
            let text_style = focus_style(text_style, focused && !editing);
            let border = if editing || focused {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(SUBTLE)
            };

            let mut rows: Vec<&str> = text.split('\n').collect();
            if field.is_multiline() {
                while rows.len() < MESSAGE_ROWS {
                    rows.push("");
                }
            }

            let top = self.lines.len();
            let rule = "─".repeat(inner_width + 2);
            self.lines.push(Line::styled(format!("┌{rule}┐"), border));
            for row in rows {
                let shown = match row.chars().position(|c| c == CURSOR) {
                    Some(cursor) if editing => {
                        self.cursor_row = Some(self.lines.len());
                        window(row, inner_width, cursor)
                    }
                    _ => fit(row, inner_width),
                };
                self.lines.push(Line::from(vec![
                    Span::styled("│ ", border),
                    Span::styled(shown, text_style),
                    Span::styled(" │", border),
                ]));
            }
            self.lines.push(Line::styled(format!("└{rule}┘"), border));
            if editing || focused {
                self.mark_focus(top);
            }
        }

        self.blank();
        let submit_focused = self.focused == Some(Focusable::Submit);
        let submit = button("Send Message", LinkStyle::Solid, submit_focused);
        self.lines.push(Line::from(submit));
        if submit_focused {
            self.mark_focus(self.lines.len() - 1);
        }
        self.blank();
    }
}

fn quick_link_spans(app: &App) -> Vec<Span<'static>> {
    let focused = app.focused();
    let mut spans = Vec::new();
    for (i, (label, _)) in FOOTER_LINKS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = focus_style(
            Style::default().fg(MUTED),
            focused == Some(Focusable::FooterLink(i)),
        );
        spans.push(Span::styled(format!("[{label}]"), style));
    }
    spans
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(SUBTLE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED);
    let contact_line = |icon: Icon, text: &str| {
        Line::from(vec![
            Span::styled(format!("{} ", icon.glyph()), Style::default().fg(ACCENT)),
            Span::styled(text.to_string(), muted),
        ])
    };

    if app.is_narrow() {
        let lines = vec![
            Line::from(logo()),
            contact_line(Icon::Phone, HELPLINE),
            Line::from(quick_link_spans(app)),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[0]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[0]);

        let brand = vec![Line::from(logo()), Line::styled(TAGLINE, muted)];
        let contact = vec![
            Line::styled("Contact", heading),
            contact_line(Icon::Phone, HELPLINE),
            contact_line(Icon::Mail, EMAIL),
            contact_line(Icon::MapPin, ADDRESS),
        ];
        let links = vec![Line::styled("Quick Links", heading), Line::from(quick_link_spans(app))];

        for (lines, column) in [brand, contact, links].into_iter().zip(columns.iter()) {
            let column = column.inner(Margin { horizontal: 1, vertical: 0 });
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), column);
        }
    }

    let copyright = Paragraph::new(format!(
        "© {} eHIGHWAY — All rights reserved.",
        chrono::Local::now().year()
    ))
    .style(Style::default().fg(SUBTLE))
    .alignment(Alignment::Center);
    f.render_widget(copyright, rows[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Browsing => match &app.status_message {
            Some(status) => status.clone(),
            None => format!(
                "{} | 1-6: pages | Tab: focus | Enter: open | g: address | /: search | m: menu | b/f: back/forward | y: copy helpline | ?: help | q: quit",
                app.page().title()
            ),
        },
        AppMode::AddressBar => "Address: type a path (Enter to go, Esc to cancel)".to_string(),
        AppMode::Search => format!(
            "Search: {} (↑↓ to select, Enter to open, Esc to cancel)",
            app.search_query
        ),
        AppMode::ContactForm => {
            let field = app.contact.editing.map(ContactField::placeholder).unwrap_or("");
            format!("Editing '{field}' (Tab: next field, Esc: done)")
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let style = match app.mode {
        AppMode::Browsing => Style::default().fg(MUTED),
        AppMode::AddressBar => Style::default().fg(Color::Yellow),
        AppMode::Search => Style::default().fg(Color::Cyan),
        AppMode::ContactForm => Style::default().fg(ACCENT),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn render_search_results(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(4).min(72);
    let rows = app.search_results.len().max(1) as u16;
    let height = (rows + 2).min(area.height);
    if width < 8 || height < 3 {
        return;
    }
    let popup = Rect { x: area.x + 2, y: area.y, width, height };

    let items: Vec<ListItem> = if app.search_results.is_empty() {
        let hint = if app.search_query.trim().is_empty() {
            "Type to search the site"
        } else {
            "No matches"
        };
        vec![ListItem::new(Line::styled(hint, Style::default().fg(SUBTLE)))]
    } else {
        app.search_results
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                let style = if i == app.search_result_index {
                    Style::default().bg(EMERALD).fg(Color::Black)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<14}", hit.route.label()),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(hit.excerpt.clone(), style),
                ]))
            })
            .collect()
    };

    f.render_widget(Clear, popup);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, popup);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width - area.width / 5,
        height: area.height - area.height / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("eHIGHWAY Keys (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"EHIGHWAY — TERMINAL SITE

=== PAGES ===
1               Home            /
2               About           /about
3               Services        /services
4               Clients         /clients
5               Opportunities   /opportunities
6               Contact         /contact

=== NAVIGATION ===
Tab / Shift+Tab Move focus between links and form fields
Enter           Open the focused link or field
g or Ctrl+L     Edit the address bar (Enter to go, Esc to cancel)
b / f           Back / forward in session history
m               Open or close the menu (narrow terminals)
/               Search the site (↑↓ select, Enter open)

=== READING ===
↑↓ or j/k       Scroll one line
Page Up/Down    Scroll one page
Home / End      Jump to top / bottom
                Changing page scrolls back to the top

=== CONTACT FORM ===
Enter           Start typing in the focused field
Tab             Next field
Enter           New line in the message, next field elsewhere
Esc             Stop typing (text is kept)
                Sending needs a delivery endpoint; none is set up

=== OTHER ===
y               Copy the helpline numbers
F1 or ?         Show this help
q               Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DEFAULT_BREAKPOINT;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    fn column_of(row: &str, needle: &str) -> Option<u16> {
        row.find(needle).map(|byte| row[..byte].chars().count() as u16)
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("overlong word", 3), vec!["overlong", "word"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abcd");
    }

    #[test]
    fn test_with_cursor() {
        assert_eq!(with_cursor("/ab", 1), "/▏ab");
        assert_eq!(with_cursor("", 0), "▏");
        assert_eq!(with_cursor("ab", 9), "ab▏");
    }

    #[test]
    fn test_wide_header_marks_active_link() {
        let mut app = App::new("/services", DEFAULT_BREAKPOINT);
        let buffer = draw(&mut app, 120, 40);
        let header = &rows(&buffer)[2];

        let services = column_of(header, "Services").expect("nav link rendered");
        let cell = &buffer[(services, 2)];
        assert_eq!(cell.fg, ACCENT);
        assert!(cell.modifier.contains(Modifier::BOLD));

        let about = column_of(header, "About").expect("nav link rendered");
        assert_eq!(buffer[(about, 2)].fg, MUTED);
    }

    #[test]
    fn test_unknown_path_marks_no_link() {
        let mut app = App::new("/unknown", DEFAULT_BREAKPOINT);
        let buffer = draw(&mut app, 120, 40);
        let all = rows(&buffer);
        let header = &all[2];

        for link in &PRIMARY_NAV {
            let x = column_of(header, link.label()).expect("nav link rendered");
            assert_eq!(buffer[(x, 2)].fg, MUTED, "{} should be inactive", link.label());
        }
        let body = all.join("\n");
        assert!(body.contains("Page not found"));
        assert!(body.contains("Nothing lives at /unknown"));
    }

    #[test]
    fn test_narrow_menu_panel() {
        let mut app = App::default();
        let closed = rows(&draw(&mut app, 60, 40));
        let header = closed[1..4].join("\n");
        assert!(header.contains("[≡]"));
        assert!(!header.contains("About"));

        app.toggle_menu();
        let open = rows(&draw(&mut app, 60, 40));
        let header = open[1..(4 + MENU_PANEL_LINES as usize)].join("\n");
        assert!(header.contains("[×]"));
        for link in &PRIMARY_NAV {
            assert!(header.contains(link.label()), "{} missing from panel", link.label());
        }
        assert!(header.contains("Helpline"));
    }

    #[test]
    fn test_body_shows_only_current_view() {
        let markers = [
            (Route::Home, "Mission & Vision"),
            (Route::About, "Our Story"),
            (Route::Services, "Everything under one roof"),
            (Route::Clients, "Some names we"),
            (Route::Opportunities, "Partner, reseller"),
            (Route::Contact, "Your name"),
        ];

        for (route, marker) in markers {
            let mut app = App::new(route.path(), DEFAULT_BREAKPOINT);
            let screen = rows(&draw(&mut app, 120, 40)).join("\n");
            assert!(screen.contains(marker), "{marker} missing on {}", route.path());

            for (other, other_marker) in markers {
                // The home page previews the opportunities section.
                if other == route || (route == Route::Home && other == Route::Opportunities) {
                    continue;
                }
                assert!(
                    !screen.contains(other_marker),
                    "{other_marker} shown on {}",
                    route.path()
                );
            }
        }
    }

    #[test]
    fn test_render_reports_viewport_size() {
        let mut app = App::default();
        draw(&mut app, 120, 40);
        assert_eq!(app.width, 120);
        assert_eq!(app.viewport.body_height(), 28);
        assert!(app.viewport.max_offset() > 0);
    }

    #[test]
    fn test_address_bar_shows_path() {
        let mut app = App::new("/clients", DEFAULT_BREAKPOINT);
        let screen = rows(&draw(&mut app, 120, 40));
        assert!(screen[0].contains("ehighway.tech/clients"));

        app.start_address_bar();
        let screen = rows(&draw(&mut app, 120, 40));
        assert!(screen[0].contains("ehighway.tech/clients▏"));
    }

    #[test]
    fn test_search_overlay_lists_hits() {
        let mut app = App::default();
        app.start_search();
        app.search_query = "story".to_string();
        app.cursor_position = 5;
        app.perform_search();

        let screen = rows(&draw(&mut app, 120, 40)).join("\n");
        assert!(screen.contains("story▏"));
        assert!(screen.contains("Our Story"));
    }

    #[test]
    fn test_contact_form_shows_typed_text() {
        let mut app = App::new("/contact", DEFAULT_BREAKPOINT);
        app.begin_contact_edit(ContactField::Phone);
        for c in "01711".chars() {
            app.contact.insert_char(c);
        }
        let screen = rows(&draw(&mut app, 120, 40)).join("\n");
        assert!(screen.contains("01711▏"));
        assert!(screen.contains("Your name"));
        assert!(screen.contains("Send Message"));
    }

    #[test]
    fn test_window_follows_cursor() {
        assert_eq!(window("abcdef", 4, 1), "abcd");
        assert_eq!(window("abcdef", 4, 5), "cdef");
        assert_eq!(window("ab", 4, 1), "ab  ");
    }

    #[test]
    fn test_editing_message_below_the_fold_is_visible() {
        let mut app = App::new("/contact", DEFAULT_BREAKPOINT);
        for _ in 0..4 {
            app.focus_next();
        }
        assert_eq!(app.focused(), Some(Focusable::Field(ContactField::Message)));
        app.activate_focused();
        for c in "zebrahello".chars() {
            app.contact.insert_char(c);
        }

        let screen = rows(&draw(&mut app, 80, 24)).join("\n");
        assert!(app.viewport.offset() > 0);
        assert!(screen.contains("zebrahello▏"));
    }

    #[test]
    fn test_focused_submit_scrolls_once() {
        let mut app = App::new("/contact", DEFAULT_BREAKPOINT);
        for _ in 0..5 {
            app.focus_next();
        }
        assert_eq!(app.focused(), Some(Focusable::Submit));

        let screen = rows(&draw(&mut app, 80, 24)).join("\n");
        assert_eq!(app.viewport.offset(), 9);
        assert!(screen.contains("Send Message"));

        app.viewport.jump_to_top();
        draw(&mut app, 80, 24);
        assert_eq!(app.viewport.offset(), 0);
    }

    #[test]
    fn test_long_field_value_keeps_cursor_visible() {
        let mut app = App::new("/contact", DEFAULT_BREAKPOINT);
        app.begin_contact_edit(ContactField::Email);
        for c in "customer.relations.department@hiltown-hotel-and-resort.example.com.bd".chars() {
            app.contact.insert_char(c);
        }

        let screen = rows(&draw(&mut app, 120, 40)).join("\n");
        assert!(screen.contains("example.com.bd▏"));

        app.contact.move_home();
        let screen = rows(&draw(&mut app, 120, 40)).join("\n");
        assert!(screen.contains("▏customer.relations"));
    }

    #[test]
    fn test_help_popup_on_very_wide_terminal() {
        let backend = TestBackend::new(17_000, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_help_popup(f, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1_700, 0)].symbol(), "┌");
        assert_eq!(buffer[(15_299, 0)].symbol(), "┐");
    }

    #[test]
    fn test_help_popup() {
        let mut app = App::default();
        app.open_help();
        let screen = rows(&draw(&mut app, 120, 40)).join("\n");
        assert!(screen.contains("eHIGHWAY Keys"));
    }
}
