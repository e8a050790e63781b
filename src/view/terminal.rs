//! Line-oriented terminal front end.
//!
//! Input: one stdin line per edit of the `autocomplete` field, carrying the
//! field's full value; the line [`SEND_COMMAND`] clicks the send button.
//! Output: both lists are printed after every render.

use std::io::Write;

use super::{ListId, Page, View};
use crate::domain::UiEvent;

/// Line that stands for a click on the send button.
pub const SEND_COMMAND: &str = "/send";

/// Translates one line of terminal input into a [`UiEvent`].
#[must_use]
pub fn parse_line(line: &str) -> UiEvent {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == SEND_COMMAND {
        UiEvent::SendClicked
    } else {
        UiEvent::Input(line.to_string())
    }
}

/// [`View`] that keeps a [`Page`] and prints it to a writer after each
/// render.
#[derive(Debug)]
pub struct TerminalView<W> {
    page: Page,
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// Creates a terminal view over an empty page.
    pub fn new(out: W) -> Self {
        Self {
            page: Page::new(),
            out,
        }
    }

    /// The page being displayed.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Consumes the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self) -> std::io::Result<()> {
        for list in [ListId::Suggestions, ListId::FrequentList] {
            let items = self.page.items(list).join(", ");
            writeln!(self.out, "{}: [{items}]", list.element_id())?;
        }
        self.out.flush()
    }
}

impl<W: Write> View for TerminalView<W> {
    fn clear(&mut self, list: ListId) {
        self.page.clear(list);
    }

    fn append(&mut self, list: ListId, text: String) {
        self.page.append(list, text);
    }

    fn input_value(&self) -> &str {
        self.page.input_value()
    }

    fn set_input_value(&mut self, value: String) {
        self.page.set_input_value(value);
    }

    fn rendered(&mut self) {
        if let Err(e) = self.print() {
            tracing::warn!(error = %e, "failed to write terminal view");
        }
    }
}
