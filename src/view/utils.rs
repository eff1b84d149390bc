//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Greedy word wrap; a single word longer than `width` gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = current.chars().count() + 1 + word.chars().count();
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Whole dollars with thousands separators, e.g. `$12,500`
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Style for a row that is part way through its reveal. Hidden rows return `None`.
pub fn reveal_style(progress: f32, settled: Style) -> Option<Style> {
    if progress <= 0.0 {
        None
    } else if progress < 0.5 {
        Some(settled.fg(Color::DarkGray))
    } else {
        Some(settled)
    }
}

/// Move `area` sideways by `offset` columns, clipped to `bounds`.
pub fn shift_rect(area: Rect, offset: i32, bounds: Rect) -> Rect {
    let left = i32::from(area.x) + offset;
    let right = left + i32::from(area.width);
    let clipped_left = left.max(i32::from(bounds.x));
    let clipped_right = right.min(i32::from(bounds.x) + i32::from(bounds.width));
    if clipped_right <= clipped_left {
        return Rect { width: 0, ..area };
    }
    Rect {
        x: clipped_left as u16,
        width: (clipped_right - clipped_left) as u16,
        ..area
    }
}
