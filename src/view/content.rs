//! Page body rendering (listings, testimonial carousel, contact form)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{
    related_posts, BlogPost, Carousel, CarouselPhase, ContactForm, ContentItem, FilterableList, Focus,
    FormField, Listings, PricingTier, Project, SubmissionStatus, UiState, TESTIMONIALS,
};
use super::animation::AnimationDriver;
use super::utils::{
    format_price, render_scrollable_list, reveal_style, shift_rect, stars, truncate_string,
    wrap_words,
};

const SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you within 24 hours.";

fn row_style(is_selected: bool, is_focused: bool) -> Style {
    if is_selected && is_focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn meta_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Shared listing renderer: empty state, reveal animation and selection.
/// `row` turns one visible item into its lines given the row's base style and
/// the usable width.
fn render_listing<'a, T, F>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    ui_state: &UiState,
    list: &FilterableList<'a, T>,
    animation: &dyn AnimationDriver,
    row: F,
) where
    T: ContentItem,
    F: Fn(&'a T, Style, usize) -> Vec<Line<'static>>,
{
    let is_focused = ui_state.focus == Focus::Content;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if list.is_empty_result() {
        render_empty_state(frame, area, list, block);
        return;
    }
    let visible = list.visible_items();

    let width = area.width.saturating_sub(4) as usize;
    let elapsed = ui_state.revealed_at.elapsed();
    let items: Vec<ListItem> = visible
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let base = row_style(i == ui_state.selected, is_focused);
            match reveal_style(animation.reveal_progress(i, elapsed), base) {
                Some(style) => {
                    let mut lines = row(item, style, width);
                    lines.push(Line::default());
                    ListItem::new(Text::from(lines))
                }
                None => ListItem::new(""),
            }
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.selected, block);
}

fn render_empty_state<T: ContentItem>(
    frame: &mut Frame,
    area: Rect,
    list: &FilterableList<'_, T>,
    block: Block,
) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "No results",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    if !list.search_term().is_empty() {
        lines.push(Line::from(format!(
            "Nothing in \"{}\" matches \"{}\".",
            list.active_category(),
            list.search_term()
        )));
        lines.push(Line::from(Span::styled("Press Esc to clear the search.", meta_style())));
    } else {
        lines.push(Line::from(format!("Nothing in \"{}\" yet.", list.active_category())));
    }

    let empty = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(empty, area);
}

pub fn render_blog(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    list: &FilterableList<'_, BlogPost>,
    animation: &dyn AnimationDriver,
) {
    render_listing(frame, area, "Blog", ui_state, list, animation, |post, style, width| {
        let mut title = vec![Span::styled(post.title, style)];
        if post.featured {
            title.push(Span::styled("  Featured", Style::default().fg(Color::Yellow)));
        }
        vec![
            Line::from(title),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {} min read · {}",
                    post.category,
                    post.display_date(),
                    post.read_minutes,
                    post.author
                ),
                meta_style(),
            )),
            Line::from(truncate_string(post.description, width)),
        ]
    });
}

/// Full post view: header, description and up to three posts from the same category
pub fn render_blog_post(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    post: &BlogPost,
    animation: &dyn AnimationDriver,
) {
    let related = related_posts(post);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                                   // Article
            Constraint::Length(related.len().max(1) as u16 + 3), // Related
        ])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            post.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} · {} · {} min read · by {}",
                post.category,
                post.display_date(),
                post.read_minutes,
                post.author
            ),
            meta_style(),
        )),
        Line::default(),
    ];
    let width = chunks[0].width.saturating_sub(4) as usize;
    lines.extend(wrap_words(post.description, width).into_iter().map(Line::from));

    let article = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Blog ")
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(article, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" More from {} ", post.category))
        .padding(Padding::horizontal(1));
    if related.is_empty() {
        let empty = Paragraph::new("No other posts in this category.")
            .style(meta_style())
            .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let elapsed = ui_state.revealed_at.elapsed();
    let items: Vec<ListItem> = related
        .into_iter()
        .enumerate()
        .map(|(i, other)| {
            let base = row_style(i == ui_state.related_selected, true);
            match reveal_style(animation.reveal_progress(i, elapsed), base) {
                Some(style) => ListItem::new(Line::from(vec![
                    Span::styled(other.title, style),
                    Span::styled(format!("  {} min read", other.read_minutes), meta_style()),
                ])),
                None => ListItem::new(""),
            }
        })
        .collect();
    render_scrollable_list(frame, chunks[1], items, ui_state.related_selected, block);
}

pub fn render_portfolio(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    list: &FilterableList<'_, Project>,
    animation: &dyn AnimationDriver,
) {
    render_listing(frame, area, "Portfolio", ui_state, list, animation, |project, style, width| {
        vec![
            Line::from(Span::styled(project.title, style)),
            Line::from(Span::styled(
                format!("{}  [{}]", project.category, project.tags.join(", ")),
                meta_style(),
            )),
            Line::from(truncate_string(project.description, width)),
        ]
    });
}

pub fn render_pricing(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    list: &FilterableList<'_, PricingTier>,
    animation: &dyn AnimationDriver,
) {
    render_listing(frame, area, "Pricing", ui_state, list, animation, |tier, style, width| {
        let mut header = vec![Span::styled(tier.name, style)];
        if tier.is_popular() {
            header.push(Span::styled(
                "  MOST POPULAR",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
        }

        let mut lines = vec![
            Line::from(header),
            Line::from(Span::styled(
                format!(
                    "{} one-time + {}/month support · delivered in {}",
                    format_price(tier.one_time_fee),
                    format_price(tier.support_fee),
                    tier.delivery
                ),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(truncate_string(tier.description, width)),
        ];
        lines.extend(tier.features.iter().map(|feature| {
            if feature.included {
                Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::raw(feature.text),
                ])
            } else {
                Line::from(Span::styled(format!("  ✗ {}", feature.text), meta_style()))
            }
        }));
        lines
    });
}

pub fn render_faq(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    listings: &Listings,
    animation: &dyn AnimationDriver,
) {
    let open = &listings.faq_open;
    render_listing(frame, area, "FAQ", ui_state, &listings.faq, animation, |entry, style, width| {
        let expanded = open.is_open(entry.id);
        let marker = if expanded { "▾ " } else { "▸ " };
        let mut lines = vec![Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(entry.question, style),
        ])];
        if expanded {
            lines.extend(
                wrap_words(entry.answer, width.saturating_sub(2))
                    .into_iter()
                    .map(|text| Line::from(format!("  {}", text))),
            );
        }
        lines
    });
}

pub fn render_testimonials(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    animation: &dyn AnimationDriver,
) {
    let phase_label = match carousel.phase() {
        CarouselPhase::Autoplaying => Span::styled(" autoplay ", Style::default().fg(Color::Green)),
        CarouselPhase::Suspended => Span::styled(" paused ", Style::default().fg(Color::Yellow)),
        CarouselPhase::Dragging => Span::styled(" dragging ", Style::default().fg(Color::Magenta)),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" What Our Clients Say ")
        .title_bottom(Line::from(phase_label).right_aligned())
        .padding(Padding::new(2, 2, 1, 1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = (!carousel.is_empty()).then(|| TESTIMONIALS.get(carousel.current_index())).flatten();
    let Some(testimonial) = current else {
        let empty = Paragraph::new("No testimonials yet.").style(meta_style());
        frame.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Quote
            Constraint::Length(1), // Stars
            Constraint::Length(1), // Author
            Constraint::Length(1), // Role
            Constraint::Length(2), // Indicators
        ])
        .split(inner);

    let offset = carousel
        .slid_at()
        .map(|at| animation.slide_offset(carousel.direction(), at.elapsed(), chunks[0].width))
        .unwrap_or(0);

    let quote = Paragraph::new(format!("\u{201c}{}\u{201d}", testimonial.quote))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(quote, shift_rect(chunks[0], offset, inner));

    frame.render_widget(
        Paragraph::new(stars(testimonial.rating))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(testimonial.author)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(testimonial.role).style(meta_style()).alignment(Alignment::Center),
        chunks[3],
    );

    let indicators: Vec<Span> = (0..carousel.len())
        .flat_map(|i| {
            let dot = if i == carousel.current_index() {
                Span::styled("●", Style::default().fg(Color::Green))
            } else {
                Span::styled("○", meta_style())
            };
            [dot, Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(vec![Line::default(), Line::from(indicators)]).alignment(Alignment::Center),
        chunks[4],
    );
}

pub fn render_contact(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Start Your Project ")
        .padding(Padding::new(2, 2, 1, 0));
    let width = block.inner(area).width.saturating_sub(20) as usize;

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let is_focused = form.focused == field;
        let label_style = if is_focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let value = match field {
            FormField::ProjectType => match form.project_type {
                Some(kind) if is_focused => format!("◀ {} ▶", kind.label()),
                Some(kind) => kind.label().to_string(),
                None => "Select a project type (←/→)".to_string(),
            },
            _ => {
                let cursor = if is_focused && !form.is_locked() { "_" } else { "" };
                format!("{}{}", form.field_value(field), cursor)
            }
        };
        let value_style = if form.is_locked() {
            meta_style()
        } else {
            Style::default()
        };

        if field == FormField::Message {
            lines.push(Line::from(Span::styled(format!("{:<18}", field.label()), label_style)));
            let wrapped = wrap_words(&value, width.max(10));
            if wrapped.is_empty() {
                lines.push(Line::default());
            }
            lines.extend(
                wrapped
                    .into_iter()
                    .map(|text| Line::from(Span::styled(format!("  {}", text), value_style))),
            );
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<18}", field.label()), label_style),
                Span::styled(truncate_string(&value, width), value_style),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(match &form.status {
        SubmissionStatus::Idle => Line::from(Span::styled("Press Enter to send", meta_style())),
        SubmissionStatus::Submitting => {
            Line::from(Span::styled("Sending...", Style::default().fg(Color::Yellow)))
        }
        SubmissionStatus::Submitted => Line::from(Span::styled(
            SUCCESS_MESSAGE,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        SubmissionStatus::Failed(message) => {
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red)))
        }
    });

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
