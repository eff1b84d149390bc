//! Layout rendering (page tabs, filter bar, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{ContentItem, Focus, FilterableList, Page, UiState};

pub fn render_page_tabs(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let titles: Vec<Line> = Page::ALL.iter().map(|page| Line::from(page.title())).collect();
    let selected = Page::ALL.iter().position(|page| *page == ui_state.page).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DevAgency ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(tabs, area);
}

/// Search input on the left, category tabs on the right
pub fn render_filter_bar<T: ContentItem>(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    list: &FilterableList<'_, T>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Search input
            Constraint::Min(0),         // Category tabs
        ])
        .split(area);

    let searching = ui_state.focus == Focus::Search;
    let search_style = if searching {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if list.search_term().is_empty() && !searching {
        Span::styled("Press / to search...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(list.search_term().to_string(), search_style)
    };

    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if searching {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, chunks[0]);

    let labels: Vec<Line> = list.categories().iter().map(|tab| Line::from(tab.label)).collect();
    // An active category with no tab leaves nothing highlighted
    let categories = Tabs::new(labels)
        .select(list.active_tab())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .divider(" ")
        .block(Block::default().borders(Borders::ALL).title(" Category (←/→) "));
    frame.render_widget(categories, chunks[1]);
}

/// "Showing X of Y" plus key hints for the current page
pub fn render_status_line(frame: &mut Frame, area: Rect, ui_state: &UiState, counts: Option<(usize, usize)>) {
    let hints = match ui_state.page {
        Page::Blog if ui_state.open_post.is_some() => "Esc back  ↑/↓ related  Enter open",
        Page::Blog => "/ search  ←/→ category  ↑/↓ select  Enter read",
        Page::Portfolio | Page::Pricing => "/ search  ←/→ category  ↑/↓ select",
        Page::Faq => "/ search  ←/→ category  ↑/↓ select  Enter expand",
        Page::Testimonials => "←/→ slide  1-9 jump  drag with mouse",
        Page::Contact => "↑/↓ field  ←/→ project type  Enter send",
    };

    let mut spans = Vec::new();
    if let Some((visible, total)) = counts {
        spans.push(Span::styled(
            format!(" Showing {} of {} ", visible, total),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("│ "));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled("  Tab page  h help  q quit", Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
