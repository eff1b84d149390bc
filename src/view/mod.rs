//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Page tabs, filter bar and status line
//! - `content`: Page bodies (listings, testimonials, contact form)
//! - `animation`: Reveal and slide timing
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod animation;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub use animation::{driver_from_config, AnimationDriver};

use crate::model::{find_post, Carousel, ContactForm, ContentItem, FilterableList, Listings, Page, UiState};

/// Everything a frame needs, copied out of the model before drawing
pub struct Snapshot {
    pub ui_state: UiState,
    pub listings: Listings,
    pub carousel: Carousel,
    pub contact: ContactForm,
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &Snapshot, animation: &dyn AnimationDriver) {
        let ui_state = &snapshot.ui_state;
        let listings = &snapshot.listings;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Page tabs
                Constraint::Min(0),    // Page body
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_page_tabs(frame, chunks[0], ui_state);

        let counts = match ui_state.page {
            Page::Blog => match ui_state.open_post.as_deref().and_then(find_post) {
                Some(post) => {
                    content::render_blog_post(frame, chunks[1], ui_state, post, animation);
                    None
                }
                None => render_listing_page(frame, chunks[1], ui_state, &listings.blog, |f, area| {
                    content::render_blog(f, area, ui_state, &listings.blog, animation)
                }),
            },
            Page::Portfolio => {
                render_listing_page(frame, chunks[1], ui_state, &listings.portfolio, |f, area| {
                    content::render_portfolio(f, area, ui_state, &listings.portfolio, animation)
                })
            }
            Page::Pricing => {
                render_listing_page(frame, chunks[1], ui_state, &listings.pricing, |f, area| {
                    content::render_pricing(f, area, ui_state, &listings.pricing, animation)
                })
            }
            Page::Faq => render_listing_page(frame, chunks[1], ui_state, &listings.faq, |f, area| {
                content::render_faq(f, area, ui_state, listings, animation)
            }),
            Page::Testimonials => {
                content::render_testimonials(frame, chunks[1], &snapshot.carousel, animation);
                None
            }
            Page::Contact => {
                content::render_contact(frame, chunks[1], &snapshot.contact);
                None
            }
        };

        layout::render_status_line(frame, chunks[2], ui_state, counts);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

/// Filter bar above the list body. Returns the (visible, total) counts for the status line.
fn render_listing_page<T: ContentItem>(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    list: &FilterableList<'_, T>,
    body: impl FnOnce(&mut Frame, Rect),
) -> Option<(usize, usize)> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + categories
            Constraint::Min(0),    // Items
        ])
        .split(area);

    layout::render_filter_bar(frame, chunks[0], ui_state, list);
    body(frame, chunks[1]);
    Some((list.visible_len(), list.total_len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::model::{CarouselConfig, CarouselEvent, CategoryFilter, FormError, SubmissionStatus};

    fn snapshot(page: Page) -> Snapshot {
        Snapshot {
            ui_state: UiState { page, ..UiState::default() },
            listings: Listings::default(),
            carousel: Carousel::new(crate::model::TESTIMONIALS.len(), &CarouselConfig::default()),
            contact: ContactForm::default(),
        }
    }

    fn draw(snapshot: &Snapshot) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
        terminal
            .draw(|frame| AppView::render(frame, snapshot, &animation::Still))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_blog_page_lists_posts_and_counts() {
        let text = screen_text(&draw(&snapshot(Page::Blog)));
        assert!(text.contains("Modern Web Development Trends for 2025"));
        let total = Listings::default().blog.total_len();
        assert!(text.contains(&format!("Showing {} of {}", total, total)));
    }

    #[test]
    fn test_open_post_shows_related_posts() {
        let mut snap = snapshot(Page::Blog);
        snap.ui_state.open_post = Some("react-vs-nextjs-comparison".to_string());
        let text = screen_text(&draw(&snap));
        assert!(text.contains("React vs Next.js"));
        assert!(text.contains("More from Development"));
        assert!(text.contains("TypeScript Best Practices"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_empty_filter_shows_no_results() {
        let mut snap = snapshot(Page::Portfolio);
        snap.listings.portfolio.set_search_term("zzzz");
        let text = screen_text(&draw(&snap));
        assert!(text.contains("No results"));
        assert!(text.contains("Showing 0 of"));
    }

    #[test]
    fn test_unknown_category_renders_without_tab() {
        let mut snap = snapshot(Page::Pricing);
        snap.listings.pricing.set_category(CategoryFilter::is("Enterprise"));
        let text = screen_text(&draw(&snap));
        assert!(text.contains("No results"));
    }

    #[test]
    fn test_testimonials_show_current_slide() {
        let mut snap = snapshot(Page::Testimonials);
        snap.carousel.handle(CarouselEvent::Select(1));
        let text = screen_text(&draw(&snap));
        assert!(text.contains(crate::model::TESTIMONIALS[1].author));
        assert!(text.contains("paused"));
    }

    #[test]
    fn test_contact_status_line() {
        let mut snap = snapshot(Page::Contact);
        snap.contact.status = SubmissionStatus::Failed(FormError::Missing("Name").to_string());
        let text = screen_text(&draw(&snap));
        assert!(text.contains("Name is required"));
        assert!(text.contains("Email *"));
    }

    #[test]
    fn test_help_overlay_draws_over_page() {
        let mut snap = snapshot(Page::Faq);
        snap.ui_state.show_help_popup = true;
        let text = screen_text(&draw(&snap));
        assert!(text.contains("Help (H or Esc to close)"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut snap = snapshot(Page::Faq);
        snap.ui_state.show_help_popup = true;
        snap.ui_state.error_message = Some("boom".to_string());
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|frame| AppView::render(frame, &snap, &animation::Still))
            .unwrap();
    }
}
