//! Core type definitions for the application

use std::time::Instant;

/// Which page of the showcase is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Blog,
    Portfolio,
    Pricing,
    Faq,
    Testimonials,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Blog,
        Page::Portfolio,
        Page::Pricing,
        Page::Faq,
        Page::Testimonials,
        Page::Contact,
    ];

    pub fn next(self) -> Self {
        match self {
            Page::Blog => Page::Portfolio,
            Page::Portfolio => Page::Pricing,
            Page::Pricing => Page::Faq,
            Page::Faq => Page::Testimonials,
            Page::Testimonials => Page::Contact,
            Page::Contact => Page::Blog,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Page::Blog => Page::Contact,
            Page::Portfolio => Page::Blog,
            Page::Pricing => Page::Portfolio,
            Page::Faq => Page::Pricing,
            Page::Testimonials => Page::Faq,
            Page::Contact => Page::Testimonials,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Blog => "Blog",
            Page::Portfolio => "Portfolio",
            Page::Pricing => "Pricing",
            Page::Faq => "FAQ",
            Page::Testimonials => "Testimonials",
            Page::Contact => "Contact",
        }
    }

    /// Pages backed by a filterable list get a search bar and category tabs
    pub fn is_listing(self) -> bool {
        matches!(self, Page::Blog | Page::Portfolio | Page::Pricing | Page::Faq)
    }
}

/// Where keystrokes go on a listing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    Content,
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub page: Page,
    pub focus: Focus,
    /// Selected row in the visible list of the current listing page
    pub selected: usize,
    /// When the visible set last changed; drives the staggered reveal
    pub revealed_at: Instant,
    /// Slug of the blog post open in the detail view, if any
    pub open_post: Option<String>,
    /// Highlighted entry in the detail view's related posts
    pub related_selected: usize,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            focus: Focus::default(),
            selected: 0,
            revealed_at: Instant::now(),
            open_post: None,
            related_selected: 0,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_round_trips() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
        }
        let mut page = Page::Blog;
        for _ in 0..Page::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Blog);
    }
}
