//! In-memory page model.

use super::{ListId, View};

/// In-memory page holding both lists and the input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    suggestions: Vec<String>,
    frequent_list: Vec<String>,
    autocomplete: String,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries currently shown in `list`, in display order.
    #[must_use]
    pub fn items(&self, list: ListId) -> &[String] {
        match list {
            ListId::Suggestions => &self.suggestions,
            ListId::FrequentList => &self.frequent_list,
        }
    }

    fn list_mut(&mut self, list: ListId) -> &mut Vec<String> {
        match list {
            ListId::Suggestions => &mut self.suggestions,
            ListId::FrequentList => &mut self.frequent_list,
        }
    }
}

impl View for Page {
    fn clear(&mut self, list: ListId) {
        self.list_mut(list).clear();
    }

    fn append(&mut self, list: ListId, text: String) {
        self.list_mut(list).push(text);
    }

    fn input_value(&self) -> &str {
        &self.autocomplete
    }

    fn set_input_value(&mut self, value: String) {
        self.autocomplete = value;
    }
}
