//! Single-open accordion state for the FAQ page

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn with_open(id: &str) -> Self {
        Self { open: Some(id.to_string()) }
    }

    /// Open `id` (closing whatever was open), or close it if it already is.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut acc = Accordion::default();
        acc.toggle("a");
        assert!(acc.is_open("a"));
        acc.toggle("a");
        assert_eq!(acc.open_id(), None);
    }

    #[test]
    fn test_only_one_open() {
        let mut acc = Accordion::with_open("a");
        acc.toggle("b");
        assert!(acc.is_open("b"));
        assert!(!acc.is_open("a"));
    }
}
