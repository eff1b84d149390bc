//! Key and mouse event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::model::{CarouselEvent, Focus, FormField, Page};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.model.lock().await.set_should_quit(true).await;
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error().await;
            }
            return Ok(());
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        // Page switching works everywhere, including inside the search box and the form
        match key.code {
            KeyCode::BackTab => {
                drop(model);
                self.prev_page().await;
                return Ok(());
            }
            KeyCode::Tab => {
                drop(model);
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.prev_page().await;
                } else {
                    self.next_page().await;
                }
                return Ok(());
            }
            _ => {}
        }

        let ui_state = model.get_ui_state().await;

        // Typing into the search box of a listing page
        if ui_state.page.is_listing() && ui_state.focus == Focus::Search {
            match key.code {
                KeyCode::Esc => {
                    model.clear_search().await;
                    model.set_focus(Focus::Content).await;
                }
                KeyCode::Enter => {
                    model.set_focus(Focus::Content).await;
                }
                KeyCode::Down => {
                    model.set_focus(Focus::Content).await;
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                }
                KeyCode::Char(c) => {
                    model.append_to_search(c).await;
                }
                _ => {}
            }
            return Ok(());
        }

        match ui_state.page {
            Page::Contact => {
                let form = model.contact.clone();
                let mut form = form.lock().await;
                // Letters fall through to the global keys unless a text field can take them
                let typing = form.focused != FormField::ProjectType && !form.is_locked();
                match key.code {
                    KeyCode::Char(c) if typing => form.type_char(c),
                    KeyCode::Char(_) => {}
                    KeyCode::Up => form.focus_prev(),
                    KeyCode::Down => form.focus_next(),
                    KeyCode::Left if form.focused == FormField::ProjectType => form.cycle_project_type(false),
                    KeyCode::Right if form.focused == FormField::ProjectType => form.cycle_project_type(true),
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Enter => {
                        drop(form);
                        drop(model);
                        self.spawn_contact_submission().await;
                        return Ok(());
                    }
                    _ => {}
                }
                if typing || !matches!(key.code, KeyCode::Char(_)) {
                    return Ok(());
                }
            }
            Page::Blog if ui_state.open_post.is_some() => match key.code {
                KeyCode::Esc | KeyCode::Backspace => {
                    model.close_post().await;
                    return Ok(());
                }
                KeyCode::Up => {
                    model.move_selection_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_selection_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    model.open_related_post().await;
                    return Ok(());
                }
                _ => {}
            },
            Page::Testimonials => {
                let event = match key.code {
                    KeyCode::Left => Some(CarouselEvent::Previous),
                    KeyCode::Right => Some(CarouselEvent::Next),
                    KeyCode::Char(c @ '1'..='9') => c
                        .to_digit(10)
                        .map(|d| CarouselEvent::Select(d as usize - 1)),
                    _ => None,
                };
                if let Some(event) = event {
                    drop(model);
                    self.send_carousel_event(event).await;
                    return Ok(());
                }
            }
            Page::Blog | Page::Portfolio | Page::Pricing | Page::Faq => match key.code {
                KeyCode::Char('/') => {
                    model.set_focus(Focus::Search).await;
                    return Ok(());
                }
                KeyCode::Left => {
                    model.cycle_category(false).await;
                    return Ok(());
                }
                KeyCode::Right => {
                    model.cycle_category(true).await;
                    return Ok(());
                }
                KeyCode::Up => {
                    model.move_selection_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_selection_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    if ui_state.page == Page::Faq {
                        model.toggle_selected_faq().await;
                    } else if ui_state.page == Page::Blog {
                        model.open_selected_post().await;
                    }
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.clear_search().await;
                    return Ok(());
                }
                _ => {}
            },
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }

    /// A left-button press/release pair on the testimonials page is a drag gesture;
    /// the column is the horizontal coordinate.
    pub async fn handle_mouse_event(&self, mouse: MouseEvent) -> Result<()> {
        if self.model.lock().await.current_page().await != Page::Testimonials {
            return Ok(());
        }
        let x = i32::from(mouse.column);
        let event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => CarouselEvent::DragStart { x },
            MouseEventKind::Up(MouseButton::Left) => CarouselEvent::DragEnd { x },
            _ => return Ok(()),
        };
        self.send_carousel_event(event).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    use crate::config::AppConfig;
    use crate::controller::SimulatedSubmitter;
    use crate::model::{AppModel, CarouselConfig, CategoryFilter, SubmissionStatus};

    fn controller() -> AppController {
        let config = AppConfig::default();
        let model = Arc::new(Mutex::new(AppModel::new(&config.carousel)));
        AppController::new(model, config, Arc::new(SimulatedSubmitter::new(Duration::ZERO)))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_search_keystrokes_filter_blog() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('/'))).await.unwrap();
        type_text(&controller, "qtypescript").await;
        controller.handle_key_event(press(KeyCode::Backspace)).await.unwrap();

        let model = controller.model.lock().await;
        assert!(!model.should_quit().await, "q typed into search must not quit");
        let listings = model.get_listings().await;
        assert_eq!(listings.blog.search_term(), "qtypescrip");
        assert!(listings.blog.visible_items().is_empty());
    }

    #[tokio::test]
    async fn test_arrows_cycle_categories() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();

        let listings = controller.model.lock().await.get_listings().await;
        assert_eq!(listings.blog.active_category(), &CategoryFilter::is("Development"));
        assert_eq!(listings.blog.visible_len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_testimonials_unmounts_carousel() {
        let controller = controller();
        controller.go_to_page(Page::Testimonials).await;
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;

        let carousel = controller.model.lock().await.carousel.clone();
        assert_eq!(carousel.lock().await.current_index(), 1);

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        assert!(controller.carousel_driver.lock().await.is_none());

        tokio::time::sleep(CarouselConfig::default().cooldown * 3).await;
        assert_eq!(carousel.lock().await.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mouse_drag_moves_carousel() {
        let controller = controller();
        controller.go_to_page(Page::Testimonials).await;

        let mouse = |kind, column| MouseEvent { kind, column, row: 5, modifiers: KeyModifiers::NONE };
        controller.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 40)).await.unwrap();
        controller.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 30)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;

        let carousel = controller.model.lock().await.get_carousel().await;
        assert_eq!(carousel.current_index(), 1);
        controller.shutdown().await;
    }

    async fn fill_contact_form(controller: &AppController) {
        controller.go_to_page(Page::Contact).await;
        type_text(controller, "Lin").await;
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        type_text(controller, "lin@example.com").await;
        for _ in 0..3 {
            controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        }
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        type_text(controller, "hello").await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_on_contact_submits() {
        let controller = controller();
        fill_contact_form(&controller).await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        let form = controller.model.lock().await.get_contact_form().await;
        assert_eq!(form.status, SubmissionStatus::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_submission() {
        let config = AppConfig::default();
        let model = Arc::new(Mutex::new(AppModel::new(&config.carousel)));
        let submitter = Arc::new(SimulatedSubmitter::new(Duration::from_millis(1500)));
        let controller = AppController::new(model, config, submitter);

        fill_contact_form(&controller).await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.shutdown().await;

        let form = controller.model.lock().await.contact.clone();
        assert_eq!(form.lock().await.status, SubmissionStatus::Submitting);
        assert!(controller.submission.lock().await.is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        let form = form.lock().await;
        assert_eq!(form.status, SubmissionStatus::Submitting);
        assert_eq!(form.name, "Lin");
    }

    #[tokio::test]
    async fn test_contact_letters_reach_globals_off_text_fields() {
        let controller = controller();
        controller.go_to_page(Page::Contact).await;
        type_text(&controller, "q").await;
        {
            let model = controller.model.lock().await;
            assert!(!model.should_quit().await, "q in the name field is text");
            assert_eq!(model.get_contact_form().await.name, "q");
        }

        for _ in 0..4 {
            controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        }
        type_text(&controller, "h").await;
        let model = controller.model.lock().await;
        assert_eq!(model.get_contact_form().await.focused, FormField::ProjectType);
        assert!(model.is_help_popup_open().await);
    }

    #[tokio::test]
    async fn test_enter_opens_blog_post_and_esc_returns() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        {
            let ui_state = controller.model.lock().await.get_ui_state().await;
            assert_eq!(ui_state.open_post.as_deref(), Some("react-vs-nextjs-comparison"));
        }

        // Inside the post, Enter follows the highlighted related post
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        {
            let ui_state = controller.model.lock().await.get_ui_state().await;
            assert_eq!(ui_state.open_post.as_deref(), Some("typescript-best-practices"));
        }

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        let ui_state = controller.model.lock().await.get_ui_state().await;
        assert_eq!(ui_state.open_post, None);
        assert_eq!(ui_state.selected, 1);
    }
}
