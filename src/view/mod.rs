//! Page surface the UI service renders into.
//!
//! The page exposes two lists ([`SUGGESTIONS_ID`], [`FREQUENT_LIST_ID`]),
//! the `autocomplete` input field and the `send-button`. [`View`] abstracts
//! over where they live.

pub mod page;
pub mod terminal;

pub use page::Page;
pub use terminal::TerminalView;

/// Element id of the suggestions list.
pub const SUGGESTIONS_ID: &str = "suggestions";
/// Element id of the frequent-values list.
pub const FREQUENT_LIST_ID: &str = "frequent-list";

/// The two list elements of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListId {
    /// `#suggestions`
    Suggestions,
    /// `#frequent-list`
    FrequentList,
}

impl ListId {
    /// Element id of this list.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Suggestions => SUGGESTIONS_ID,
            Self::FrequentList => FREQUENT_LIST_ID,
        }
    }
}

/// Mutable page surface.
///
/// Lists are only ever cleared and appended to; there is no diffing.
pub trait View {
    /// Removes every entry from `list`.
    fn clear(&mut self, list: ListId);

    /// Appends one entry to the end of `list`.
    fn append(&mut self, list: ListId, text: String);

    /// Current value of the `autocomplete` field.
    fn input_value(&self) -> &str;

    /// Replaces the value of the `autocomplete` field.
    fn set_input_value(&mut self, value: String);

    /// Called after a batch of list mutations. Default does nothing.
    fn rendered(&mut self) {}
}
