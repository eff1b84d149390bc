//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (pages, focus, UI state)
//! - `filter`: Category + search filtering over a static collection
//! - `carousel`: Auto-advancing carousel state machine
//! - `catalog`: The agency's static content
//! - `accordion`: FAQ open/close state
//! - `contact`: Contact form fields, validation and status
//! - `app_model`: Main application model with state management methods

mod types;
mod filter;
mod carousel;
mod catalog;
mod accordion;
mod contact;
mod app_model;

// Re-export all public types for convenient access
pub use types::{Focus, Page, UiState};

pub use filter::{CategoryFilter, ContentItem, FilterableList};

pub use carousel::{
    Carousel, CarouselConfig, CarouselEvent, CarouselPhase, Outcome, SlideDirection,
};

pub use catalog::{find_post, related_posts, BlogPost, PricingTier, Project, TESTIMONIALS};

pub use contact::{
    ContactForm, ContactSubmission, FormError, FormField, ProjectType, SubmissionStatus,
};

pub use app_model::{AppModel, Listings};
