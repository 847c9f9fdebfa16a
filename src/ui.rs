// 🖥️ Terminal UI - browse, filter, sort, select and compare tools
//
// Views read through the ToolStore and redraw when its subscription marks
// them dirty.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::comparison::{rating_cell, ComparisonTable};
use crate::entities::{Category, Tool};
use crate::sort::{sort_tools, SortKey};
use crate::store::{SaveStatus, SubscriptionId, ToolStore};

const PAGE_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Compare,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Catalog => Page::Compare,
            Page::Compare => Page::Catalog,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Catalog => "Catalog",
            Page::Compare => "Compare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct App<'a> {
    store: &'a mut ToolStore,
    dirty: Arc<AtomicBool>,
    subscription: SubscriptionId,
    /// Ids of the rows currently shown, in display order
    pub visible: Vec<String>,
    pub state: TableState,
    pub current_page: Page,
    pub input_mode: InputMode,
    pub search: String,
    pub category: Option<Category>,
    pub sort: SortKey,
    pub show_detail: bool,
    pub pending_delete: Option<String>,
    pub status: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(store: &'a mut ToolStore) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = dirty.clone();
        let subscription = store.subscribe(move |_| flag.store(true, Ordering::SeqCst));

        let mut app = Self {
            store,
            dirty,
            subscription,
            visible: Vec::new(),
            state: TableState::default(),
            current_page: Page::Catalog,
            input_mode: InputMode::Normal,
            search: String::new(),
            category: None,
            sort: SortKey::default(),
            show_detail: false,
            pending_delete: None,
            status: None,
        };
        app.sync();
        app
    }

    pub fn store(&self) -> &ToolStore {
        self.store
    }

    /// Recompute rows if the store changed since the last call
    pub fn sync(&mut self) {
        if self.dirty.swap(false, Ordering::SeqCst) {
            self.refresh();
        }
    }

    /// Recompute rows from the current search, filter and sort
    pub fn refresh(&mut self) {
        let mut rows = self.store.query_category(&self.search, self.category);
        sort_tools(&mut rows, self.sort);

        let previous = self.selected_tool().map(|t| t.id.clone());
        self.visible = rows.into_iter().map(|t| t.id.clone()).collect();

        let index = previous
            .and_then(|id| self.visible.iter().position(|v| *v == id))
            .or_else(|| self.state.selected().map(|i| i.min(self.visible.len().saturating_sub(1))));

        if self.visible.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(index.unwrap_or(0)));
        }
    }

    pub fn visible_tools(&self) -> Vec<&Tool> {
        self.visible
            .iter()
            .filter_map(|id| self.store.get_by_id(id))
            .collect()
    }

    pub fn selected_tool(&self) -> Option<&Tool> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i))
            .and_then(|id| self.store.get_by_id(id))
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn cycle_category(&mut self) {
        self.category = Category::cycle(self.category);
        self.refresh();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.category = None;
        self.refresh();
    }

    pub fn toggle_compare(&mut self) {
        let Some(id) = self.selected_tool().map(|t| t.id.clone()) else {
            return;
        };
        let selected = self.store.toggle_selection(&id);
        self.status = Some(if selected {
            "Added to comparison".to_string()
        } else {
            "Removed from comparison".to_string()
        });
        self.sync();
    }

    pub fn clear_compare(&mut self) {
        self.store.clear_selection();
        self.status = Some("Comparison cleared".to_string());
        self.sync();
    }

    /// First press arms, second press on the same row deletes
    pub fn request_delete(&mut self) {
        let Some(tool) = self.selected_tool() else {
            return;
        };
        let id = tool.id.clone();
        let name = tool.name.clone();

        if self.pending_delete.as_deref() == Some(id.as_str()) {
            self.pending_delete = None;
            let status = self.store.delete(&id);
            self.report(status, &format!("Deleted {}", name));
            self.sync();
        } else {
            self.status = Some(format!("Press d again to delete {}", name));
            self.pending_delete = Some(id);
        }
    }

    fn report(&mut self, status: SaveStatus, done: &str) {
        self.status = Some(match status {
            SaveStatus::NotSaved(warning) => format!("{} (warning: {})", done, warning),
            SaveStatus::Saved | SaveStatus::Unchanged => done.to_string(),
        });
    }

    pub fn next(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| (i + PAGE_STEP).min(len - 1));
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(PAGE_STEP));
        self.state.select(Some(i));
    }

    /// Apply one key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if self.input_mode == InputMode::Search {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.refresh();
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.refresh();
                }
                _ => {}
            }
            return false;
        }

        if key.code != KeyCode::Char('d') {
            self.pending_delete = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab | KeyCode::BackTab => self.next_page(),
            KeyCode::Enter => self.toggle_detail(),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.current_page = Page::Catalog;
            }
            KeyCode::Char('f') => self.cycle_category(),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Char(' ') => self.toggle_compare(),
            KeyCode::Char('x') => self.clear_compare(),
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home if !self.visible.is_empty() => self.state.select(Some(0)),
            KeyCode::End if !self.visible.is_empty() => {
                self.state.select(Some(self.visible.len() - 1))
            }
            _ => {}
        }
        false
    }
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.sync();
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Catalog if app.show_detail => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);

            render_table(f, content_chunks[0], app);
            render_detail_panel(f, content_chunks[1], app);
        }
        Page::Catalog => render_table(f, chunks[1], app),
        Page::Compare => render_compare(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(key, Style::default().fg(Color::Yellow))
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];
    for (i, page) in [Page::Catalog, Page::Compare].iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(page.title().to_string(), style));
    }

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("{} of {} tools", app.visible.len(), app.store.len()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("{} selected", app.store.selected_ids().len()),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("Sort: {}", app.sort.label()),
        Style::default().fg(Color::Cyan),
    ));

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Text => Color::Blue,
        Category::Image => Color::Magenta,
        Category::Audio => Color::Yellow,
        Category::Video => Color::Red,
        Category::Multimodal => Color::Cyan,
        Category::Code => Color::Green,
        Category::Analytics => Color::LightBlue,
        Category::Other => Color::Gray,
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["", "Name", "Category", "Developer", "Rating", "Pricing"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows: Vec<Row> = app
        .visible_tools()
        .into_iter()
        .map(|tool| {
            let marker = if app.store.is_selected(&tool.id) { "[x]" } else { "[ ]" };
            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Green)),
                Cell::from(truncate(&tool.name, 28)),
                Cell::from(tool.category.label())
                    .style(Style::default().fg(category_color(tool.category))),
                Cell::from(truncate(&tool.developer, 22)),
                Cell::from(rating_cell(tool)),
                Cell::from(truncate(tool.pricing.as_deref().unwrap_or("-"), 26)),
            ])
            .height(1)
        })
        .collect();

    let title = match app.category {
        Some(category) => format!(" Tools - {} ", category.label()),
        None => " Tools ".to_string(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(30),
            Constraint::Length(12),
            Constraint::Length(24),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Tool Details ");

    let Some(tool) = app.selected_tool() else {
        f.render_widget(Paragraph::new("No tool selected").block(block), area);
        return;
    };

    let label = |text: &'static str| {
        Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };
    let tags = if tool.tags.is_empty() {
        "No tags".to_string()
    } else {
        tool.tags.join(", ")
    };

    let content = vec![
        Line::from(vec![Span::styled(
            tool.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![label("Developer: "), Span::raw(tool.developer.clone())]),
        Line::from(vec![
            label("Category: "),
            Span::styled(
                tool.category.label(),
                Style::default().fg(category_color(tool.category)),
            ),
        ]),
        Line::from(vec![label("Rating: "), Span::raw(rating_cell(tool))]),
        Line::from(vec![
            label("Pricing: "),
            Span::raw(tool.pricing.clone().unwrap_or_else(|| "Not specified".to_string())),
        ]),
        Line::from(vec![
            label("API access: "),
            Span::raw(if tool.api_access { "Yes" } else { "No" }),
        ]),
        Line::from(vec![label("Website: "), Span::raw(tool.url.clone())]),
        Line::from(vec![label("Tags: "), Span::raw(tags)]),
        Line::from(vec![label("Added: "), Span::raw(tool.created_at.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            tool.description.clone(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
    ];

    f.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_compare(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Compare Tools ");

    let selected = app.store.selected_tools();
    if selected.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("  No tools selected."),
            Line::from(vec![
                Span::raw("  Press "),
                key_span("space"),
                Span::raw(" on the Catalog page to add tools to the comparison."),
            ]),
        ])
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let table = ComparisonTable::build(&selected);

    let header = Row::new(
        std::iter::once(Cell::from("Features")).chain(table.tool_names.iter().map(|name| {
            Cell::from(name.clone()).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        })),
    )
    .style(Style::default().bg(Color::DarkGray));

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| {
            Row::new(
                std::iter::once(
                    Cell::from(row.label).style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .chain(row.values.iter().map(|v| Cell::from(v.clone()))),
            )
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    let column = (100 / table.tool_names.len().max(1)) as u16;
    widths.extend(table.tool_names.iter().map(|_| Constraint::Percentage(column)));

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.input_mode == InputMode::Search {
        spans.push(Span::styled(" Search: ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(app.search.clone()));
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("  ("));
        spans.push(key_span("Enter"));
        spans.push(Span::raw(" done)"));
    } else {
        let row = app.state.selected().map(|i| i + 1).unwrap_or(0);
        spans.push(Span::styled(
            format!(" Row: {}/{} ", row, app.visible.len()),
            Style::default().fg(Color::Cyan),
        ));

        if !app.search.is_empty() || app.category.is_some() {
            spans.push(Span::raw("| "));
            let mut filter = Vec::new();
            if !app.search.is_empty() {
                filter.push(format!("\"{}\"", app.search));
            }
            if let Some(category) = app.category {
                filter.push(category.label().to_string());
            }
            spans.push(Span::styled(
                format!("Filter: {} ", filter.join(" in ")),
                Style::default().fg(Color::Green),
            ));
        }

        if let Some(status) = &app.status {
            spans.push(Span::raw("| "));
            spans.push(Span::styled(status.clone(), Style::default().fg(Color::Magenta)));
            spans.push(Span::raw(" "));
        }

        for (key, action) in [
            ("/", " Search "),
            ("f", " Category "),
            ("s", " Sort "),
            ("space", " Compare "),
            ("Tab", " Page "),
            ("d", " Delete "),
        ] {
            spans.push(Span::raw("| "));
            spans.push(key_span(key));
            spans.push(Span::raw(action));
        }
        spans.push(Span::raw("| "));
        spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ToolPatch;
    use crate::seed::builtin_tools;
    use crate::storage::MemoryStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded_store() -> ToolStore {
        ToolStore::load(Box::new(MemoryStore::new()), builtin_tools())
    }

    fn names(app: &App) -> Vec<String> {
        app.visible_tools().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_initial_view_sorted_by_name() {
        let mut store = seeded_store();
        let app = App::new(&mut store);

        assert_eq!(app.visible.len(), 8);
        assert_eq!(names(&app)[0], "ChatGPT");
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_search_mode_filters_as_you_type() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);

        app.handle_key(press(KeyCode::Char('/')));
        for c in "video".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(names(&app), vec!["Runway Gen-2", "Synthesia"]);

        // 'q' typed while searching is text, not quit
        app.handle_key(press(KeyCode::Char('/')));
        assert!(!app.handle_key(press(KeyCode::Char('q'))));
        assert!(app.visible.is_empty());
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_category_filter_and_sort_cycle() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);

        app.handle_key(press(KeyCode::Char('f'))); // text
        assert_eq!(app.category, Some(Category::Text));
        assert_eq!(names(&app), vec!["ChatGPT", "Claude"]);

        app.handle_key(press(KeyCode::Char('s'))); // name desc
        assert_eq!(names(&app), vec!["Claude", "ChatGPT"]);

        app.handle_key(press(KeyCode::Char('c')));
        assert_eq!(app.visible.len(), 8);
    }

    #[test]
    fn test_space_toggles_comparison() {
        let mut store = seeded_store();
        {
            let mut app = App::new(&mut store);
            app.handle_key(press(KeyCode::Char(' ')));
            app.handle_key(press(KeyCode::Down));
            app.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(app.store().selected_ids().len(), 2);
            assert_eq!(app.status.as_deref(), Some("Added to comparison"));
        }

        let ids: Vec<&str> = store.selected_tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]); // ChatGPT, Claude in collection order
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);

        app.handle_key(press(KeyCode::Char('d')));
        assert_eq!(app.visible.len(), 8);
        assert!(app.pending_delete.is_some());

        app.handle_key(press(KeyCode::Char('d')));
        assert_eq!(app.visible.len(), 7);
        assert!(!names(&app).contains(&"ChatGPT".to_string()));
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_other_key_cancels_pending_delete() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);

        app.handle_key(press(KeyCode::Char('d')));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Char('d')));

        assert_eq!(app.visible.len(), 8);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);

        app.previous();
        assert_eq!(app.state.selected(), Some(7));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
        app.page_down();
        assert_eq!(app.state.selected(), Some(7));
        app.page_up();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_subscription_picks_up_external_changes() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);
        assert_eq!(names(&app)[0], "ChatGPT");

        app.store
            .update("1", ToolPatch {
                name: Some("Zeta Chat".to_string()),
                ..ToolPatch::default()
            })
            .unwrap();
        app.sync();

        assert_eq!(names(&app).last().unwrap(), "Zeta Chat");
        // Highlight follows the edited tool
        assert_eq!(app.selected_tool().unwrap().id, "1");
    }

    #[test]
    fn test_quit_keys() {
        let mut store = seeded_store();
        let mut app = App::new(&mut store);
        assert!(app.handle_key(press(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Ünïcödé names here", 8), "Ünïcö...");
    }
}
