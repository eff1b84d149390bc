//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::accordion::Accordion;
use super::carousel::{Carousel, CarouselConfig};
use super::catalog::{
    blog_tabs, find_post, related_posts, faq_tabs, pricing_tabs, project_tabs, BlogPost, FaqEntry, PricingTier, Project,
    BLOG_POSTS, FAQ_ENTRIES, PRICING_TIERS, PROJECTS, TESTIMONIALS,
};
use super::contact::ContactForm;
use super::filter::{FilterControls, FilterableList};
use super::types::{Focus, Page, UiState};

/// The filterable listing pages plus the FAQ accordion
#[derive(Clone, Debug)]
pub struct Listings {
    pub blog: FilterableList<'static, BlogPost>,
    pub portfolio: FilterableList<'static, Project>,
    pub pricing: FilterableList<'static, PricingTier>,
    pub faq: FilterableList<'static, FaqEntry>,
    pub faq_open: Accordion,
}

impl Default for Listings {
    fn default() -> Self {
        Self {
            blog: FilterableList::new(BLOG_POSTS, blog_tabs()),
            portfolio: FilterableList::new(PROJECTS, project_tabs()),
            pricing: FilterableList::new(PRICING_TIERS, pricing_tabs()),
            faq: FilterableList::new(FAQ_ENTRIES, faq_tabs()),
            faq_open: FAQ_ENTRIES
                .first()
                .map(|entry| Accordion::with_open(entry.id))
                .unwrap_or_default(),
        }
    }
}

impl Listings {
    pub fn for_page(&self, page: Page) -> Option<&dyn FilterControls> {
        match page {
            Page::Blog => Some(&self.blog),
            Page::Portfolio => Some(&self.portfolio),
            Page::Pricing => Some(&self.pricing),
            Page::Faq => Some(&self.faq),
            Page::Testimonials | Page::Contact => None,
        }
    }

    pub fn for_page_mut(&mut self, page: Page) -> Option<&mut dyn FilterControls> {
        match page {
            Page::Blog => Some(&mut self.blog),
            Page::Portfolio => Some(&mut self.portfolio),
            Page::Pricing => Some(&mut self.pricing),
            Page::Faq => Some(&mut self.faq),
            Page::Testimonials | Page::Contact => None,
        }
    }
}

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub listings: Arc<Mutex<Listings>>,
    pub carousel: Arc<Mutex<Carousel>>,
    pub contact: Arc<Mutex<ContactForm>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(carousel_config: &CarouselConfig) -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            listings: Arc::new(Mutex::new(Listings::default())),
            carousel: Arc::new(Mutex::new(Carousel::new(TESTIMONIALS.len(), carousel_config))),
            contact: Arc::new(Mutex::new(ContactForm::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_listings(&self) -> Listings {
        self.listings.lock().await.clone()
    }

    pub async fn get_carousel(&self) -> Carousel {
        self.carousel.lock().await.clone()
    }

    pub async fn get_contact_form(&self) -> ContactForm {
        self.contact.lock().await.clone()
    }

    // ========================================================================
    // Pages & Focus
    // ========================================================================

    pub async fn current_page(&self) -> Page {
        self.ui_state.lock().await.page
    }

    pub async fn set_page(&self, page: Page) {
        let mut state = self.ui_state.lock().await;
        if state.page == page {
            return;
        }
        tracing::debug!(from = ?state.page, to = ?page, "Page changed");
        state.page = page;
        state.focus = Focus::Content;
        state.selected = 0;
        state.revealed_at = Instant::now();
        state.open_post = None;
    }

    pub async fn set_focus(&self, focus: Focus) {
        let mut state = self.ui_state.lock().await;
        if state.page.is_listing() {
            state.focus = focus;
        }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Run `f` against the current page's list, then reset the selection since
    /// the visible set may have changed.
    async fn update_active_list(&self, f: impl FnOnce(&mut dyn FilterControls)) {
        let mut state = self.ui_state.lock().await;
        let mut listings = self.listings.lock().await;
        if let Some(list) = listings.for_page_mut(state.page) {
            f(list);
            state.selected = 0;
            state.revealed_at = Instant::now();
        }
    }

    pub async fn append_to_search(&self, c: char) {
        self.update_active_list(|list| list.push_search_char(c)).await;
    }

    pub async fn backspace_search(&self) {
        self.update_active_list(|list| list.pop_search_char()).await;
    }

    pub async fn clear_search(&self) {
        self.update_active_list(|list| list.clear_search()).await;
    }

    pub async fn cycle_category(&self, forward: bool) {
        self.update_active_list(|list| list.cycle_category(forward)).await;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.open_post.is_some() {
            state.related_selected = state.related_selected.saturating_sub(1);
            return;
        }
        state.selected = state.selected.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(post) = state.open_post.as_deref().and_then(find_post) {
            if state.related_selected + 1 < related_posts(post).len() {
                state.related_selected += 1;
            }
            return;
        }
        let listings = self.listings.lock().await;
        let visible = listings.for_page(state.page).map(|l| l.visible_len()).unwrap_or(0);
        if state.selected + 1 < visible {
            state.selected += 1;
        }
    }

    /// Id of the highlighted row on the current listing page
    pub async fn selected_item_id(&self) -> Option<String> {
        let state = self.ui_state.lock().await;
        let listings = self.listings.lock().await;
        listings
            .for_page(state.page)
            .and_then(|list| list.visible_id(state.selected))
            .map(str::to_string)
    }

    pub async fn toggle_selected_faq(&self) {
        if self.current_page().await != Page::Faq {
            return;
        }
        if let Some(id) = self.selected_item_id().await {
            let mut listings = self.listings.lock().await;
            listings.faq_open.toggle(&id);
            tracing::debug!(id = %id, open = ?listings.faq_open.open_id(), "FAQ entry toggled");
        }
    }

    // ========================================================================
    // Blog post detail
    // ========================================================================

    /// Open the highlighted blog row in the detail view
    pub async fn open_selected_post(&self) {
        if self.current_page().await != Page::Blog {
            return;
        }
        if let Some(slug) = self.selected_item_id().await {
            self.show_post(slug).await;
        }
    }

    /// Follow the highlighted "more from this category" link
    pub async fn open_related_post(&self) {
        let target = {
            let state = self.ui_state.lock().await;
            state
                .open_post
                .as_deref()
                .and_then(find_post)
                .and_then(|post| related_posts(post).get(state.related_selected).copied())
        };
        if let Some(post) = target {
            self.show_post(post.slug.to_string()).await;
        }
    }

    async fn show_post(&self, slug: String) {
        let mut state = self.ui_state.lock().await;
        tracing::debug!(slug = %slug, "Blog post opened");
        state.open_post = Some(slug);
        state.related_selected = 0;
        state.revealed_at = Instant::now();
    }

    pub async fn close_post(&self) {
        let mut state = self.ui_state.lock().await;
        if state.open_post.take().is_some() {
            state.revealed_at = Instant::now();
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AppModel {
        AppModel::new(&CarouselConfig::default())
    }

    #[tokio::test]
    async fn test_search_applies_to_current_page_only() {
        let model = model();
        for c in "design".chars() {
            model.append_to_search(c).await;
        }

        let listings = model.get_listings().await;
        assert_eq!(listings.blog.search_term(), "design");
        assert_eq!(listings.portfolio.search_term(), "");
        let titles: Vec<_> = listings.blog.visible_items().iter().map(|p| p.slug).collect();
        assert_eq!(titles, vec!["design-systems-guide"]);
    }

    #[tokio::test]
    async fn test_selection_bounded_by_visible_items() {
        let model = model();
        model.set_page(Page::Portfolio).await;
        model.cycle_category(true).await; // Web Development: 4 projects
        for _ in 0..10 {
            model.move_selection_down().await;
        }
        assert_eq!(model.get_ui_state().await.selected, 3);
        assert_eq!(model.selected_item_id().await.as_deref(), Some("crypto-dashboard"));

        model.cycle_category(true).await;
        assert_eq!(model.get_ui_state().await.selected, 0);
    }

    #[tokio::test]
    async fn test_toggle_faq_uses_visible_selection() {
        let model = model();
        model.set_page(Page::Faq).await;
        assert!(model.get_listings().await.faq_open.is_open("build-time"));

        model.move_selection_down().await;
        model.toggle_selected_faq().await;
        let listings = model.get_listings().await;
        assert!(listings.faq_open.is_open("monthly-price"));
        assert!(!listings.faq_open.is_open("build-time"));
    }

    #[tokio::test]
    async fn test_blog_detail_lists_and_follows_related_posts() {
        let model = model();
        model.move_selection_down().await; // react-vs-nextjs-comparison, Development
        model.open_selected_post().await;
        assert_eq!(
            model.get_ui_state().await.open_post.as_deref(),
            Some("react-vs-nextjs-comparison")
        );

        // The only other Development post
        model.move_selection_down().await;
        assert_eq!(model.get_ui_state().await.related_selected, 0);
        model.open_related_post().await;
        assert_eq!(
            model.get_ui_state().await.open_post.as_deref(),
            Some("typescript-best-practices")
        );

        model.close_post().await;
        let state = model.get_ui_state().await;
        assert!(state.open_post.is_none());
        assert_eq!(state.selected, 1);
    }

    #[tokio::test]
    async fn test_leaving_blog_closes_post() {
        let model = model();
        model.open_selected_post().await;
        assert!(model.get_ui_state().await.open_post.is_some());
        model.set_page(Page::Faq).await;
        model.open_selected_post().await;
        assert!(model.get_ui_state().await.open_post.is_none());
    }

    #[tokio::test]
    async fn test_page_change_resets_focus() {
        let model = model();
        model.set_focus(Focus::Search).await;
        model.set_page(Page::Portfolio).await;
        let state = model.get_ui_state().await;
        assert_eq!(state.page, Page::Portfolio);
        assert_eq!(state.focus, Focus::Content);

        model.set_page(Page::Contact).await;
        model.set_focus(Focus::Search).await;
        assert_eq!(model.get_ui_state().await.focus, Focus::Content);
    }
}
