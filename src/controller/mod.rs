//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and owns the timers behind the
//! interactive sections.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and mouse event handling
//! - `carousel`: Autoplay/cooldown timers for the testimonial carousel
//! - `contact`: Contact form submission

mod input;
mod carousel;
mod contact;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub use carousel::CarouselDriver;
pub use contact::{SimulatedSubmitter, Submitter};

use crate::config::AppConfig;
use crate::model::{AppModel, Carousel, CarouselEvent, Page, TESTIMONIALS};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    config: AppConfig,
    submitter: Arc<dyn Submitter>,
    carousel_driver: Arc<Mutex<Option<CarouselDriver>>>,
    submission: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, config: AppConfig, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            model,
            config,
            submitter,
            carousel_driver: Arc::new(Mutex::new(None)),
            submission: Arc::new(Mutex::new(None)),
        }
    }

    /// Switch pages, mounting the testimonial carousel when it comes on screen
    /// and tearing it down (timers included) when it leaves.
    pub async fn go_to_page(&self, page: Page) {
        let previous = {
            let model = self.model.lock().await;
            let previous = model.current_page().await;
            model.set_page(page).await;
            previous
        };
        if previous == page {
            return;
        }
        if previous == Page::Testimonials {
            self.unmount_carousel().await;
        }
        if page == Page::Testimonials {
            self.mount_carousel().await;
        }
    }

    pub async fn next_page(&self) {
        let page = self.model.lock().await.current_page().await.next();
        self.go_to_page(page).await;
    }

    pub async fn prev_page(&self) {
        let page = self.model.lock().await.current_page().await.prev();
        self.go_to_page(page).await;
    }

    async fn mount_carousel(&self) {
        let mut driver = self.carousel_driver.lock().await;
        if let Some(old) = driver.take() {
            old.unmount().await;
        }
        let shared = self.model.lock().await.carousel.clone();
        *shared.lock().await = Carousel::new(TESTIMONIALS.len(), &self.config.carousel);
        *driver = Some(CarouselDriver::mount(shared, self.config.carousel));
    }

    pub async fn unmount_carousel(&self) {
        if let Some(driver) = self.carousel_driver.lock().await.take() {
            driver.unmount().await;
        }
    }

    pub(crate) async fn send_carousel_event(&self, event: CarouselEvent) {
        let driver = self.carousel_driver.lock().await;
        match driver.as_ref() {
            Some(driver) => {
                if !driver.send(event) {
                    tracing::warn!(?event, "Carousel driver gone, event dropped");
                }
            }
            None => tracing::trace!(?event, "No carousel mounted"),
        }
    }

    /// Run one submission in the background. While the previous one (reset
    /// delay included) is still going, the request is dropped.
    pub(crate) async fn spawn_contact_submission(&self) {
        let mut slot = self.submission.lock().await;
        if slot.as_ref().is_some_and(|handle| !handle.is_finished()) {
            tracing::debug!("Submission already in flight");
            return;
        }
        let submitter = self.submitter.clone();
        let reset_after = self.config.contact.reset_after;
        let model = self.model.clone();
        *slot = Some(tokio::spawn(async move {
            let form = model.lock().await.contact.clone();
            contact::submit_form(form, submitter, reset_after).await;
        }));
    }

    /// Cancel everything this controller started; called once on quit.
    pub async fn shutdown(&self) {
        self.unmount_carousel().await;
        if let Some(handle) = self.submission.lock().await.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}
