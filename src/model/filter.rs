//! Category + free-text filtering over a fixed collection

use std::fmt;

/// Anything a [`FilterableList`] can narrow down.
pub trait ContentItem {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    /// Free text matched by the search term alongside the title.
    fn description(&self) -> &str;
    fn category(&self) -> &str;
}

/// Active category of a list. `All` is the sentinel that matches every item.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Is(String),
}

impl CategoryFilter {
    pub fn is(category: impl Into<String>) -> Self {
        Self::Is(category.into())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Is(wanted) => wanted == category,
        }
    }

    /// True only for a non-sentinel filter naming exactly `category`
    pub fn is_specific(&self, category: &str) -> bool {
        matches!(self, Self::Is(wanted) if wanted == category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Is(category) => f.write_str(category),
        }
    }
}

/// One selectable category tab
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: &'static str,
}

impl CategoryTab {
    pub fn all(label: &'static str) -> Self {
        Self { filter: CategoryFilter::All, label }
    }

    pub fn new(category: &str, label: &'static str) -> Self {
        Self { filter: CategoryFilter::is(category), label }
    }
}

/// A static collection narrowed by category and search term.
///
/// The visible subset is never cached: every call to [`visible_items`]
/// recomputes it from the source slice, in source order.
///
/// [`visible_items`]: FilterableList::visible_items
#[derive(Clone, Debug)]
pub struct FilterableList<'a, T> {
    items: &'a [T],
    tabs: Vec<CategoryTab>,
    active_category: CategoryFilter,
    search_term: String,
}

impl<'a, T: ContentItem> FilterableList<'a, T> {
    pub fn new(items: &'a [T], tabs: Vec<CategoryTab>) -> Self {
        Self {
            items,
            tabs,
            active_category: CategoryFilter::All,
            search_term: String::new(),
        }
    }

    /// Unknown categories are accepted and simply match nothing.
    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(category = %category, "Category filter changed");
        self.active_category = category;
    }

    /// Stored verbatim; case folding happens when matching.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        tracing::trace!(term = %self.search_term, "Search term changed");
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn categories(&self) -> &[CategoryTab] {
        &self.tabs
    }

    /// Index of the active tab, if the active category is one of the tabs
    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.filter == self.active_category)
    }

    /// Move to the neighbouring tab, wrapping at both ends.
    pub fn cycle_category(&mut self, forward: bool) {
        if self.tabs.is_empty() {
            return;
        }
        let len = self.tabs.len();
        let next = match (self.active_tab(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.set_category(self.tabs[next].filter.clone());
    }

    pub fn matches(&self, item: &T) -> bool {
        if !self.active_category.matches(item.category()) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        item.title().to_lowercase().contains(&needle)
            || item.description().to_lowercase().contains(&needle)
    }

    pub fn visible_items(&self) -> Vec<&'a T> {
        self.items.iter().filter(|item| self.matches(item)).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.items.iter().filter(|item| self.matches(item)).count()
    }

    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty_result(&self) -> bool {
        !self.items.iter().any(|item| self.matches(item))
    }
}

/// Item-type-erased handle on a list's filter state, so input handling can
/// drive whichever list is on screen.
pub trait FilterControls {
    fn push_search_char(&mut self, c: char);
    fn pop_search_char(&mut self);
    fn clear_search(&mut self);
    fn cycle_category(&mut self, forward: bool);
    fn visible_len(&self) -> usize;
    fn visible_id(&self, position: usize) -> Option<&str>;
}

impl<T: ContentItem> FilterControls for FilterableList<'_, T> {
    fn push_search_char(&mut self, c: char) {
        FilterableList::push_search_char(self, c);
    }

    fn pop_search_char(&mut self) {
        FilterableList::pop_search_char(self);
    }

    fn clear_search(&mut self) {
        FilterableList::clear_search(self);
    }

    fn cycle_category(&mut self, forward: bool) {
        FilterableList::cycle_category(self, forward);
    }

    fn visible_len(&self) -> usize {
        FilterableList::visible_len(self)
    }

    fn visible_id(&self, position: usize) -> Option<&str> {
        self.items
            .iter()
            .filter(|item| self.matches(item))
            .nth(position)
            .map(|item| item.id())
    }
}
