// Terminal implementations of the view and notifier ports
use crate::presentation::view::{IndicatorListView, ListEntry, Notifier};
use std::io::Write;

#[derive(Debug, Default)]
pub struct TerminalListView {
    entries: Vec<ListEntry>,
}

impl TerminalListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the retained entries as a bulleted list.
    pub fn draw(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Recently updated indicators:")?;
        for entry in &self.entries {
            match entry {
                ListEntry::Indicator(text) => writeln!(out, "  - {text}")?,
                ListEntry::Placeholder(text) => writeln!(out, "  ({text})")?,
            }
        }
        Ok(())
    }
}

impl IndicatorListView for TerminalListView {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }
}

#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn confirm(&mut self, message: &str) {
        println!("{message}");
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}
