// View and notifier ports for the indicator board

/// Fixed empty-state message, rendered as the only entry when the server
/// reports zero indicators.
pub const EMPTY_LIST_MESSAGE: &str = "There are currently no recently updated indicators";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Indicator(String),
    Placeholder(String),
}

/// The container the indicator list is rendered into. Implementations are
/// injected into the board so rendering can be tested without a terminal.
pub trait IndicatorListView: Send {
    /// Drop every entry currently in the container.
    fn clear(&mut self);

    /// Append one entry to the container.
    fn append(&mut self, entry: ListEntry);
}

/// Outcome messages shown to the user after a submission.
pub trait Notifier: Send {
    fn confirm(&mut self, message: &str);
    fn alert(&mut self, message: &str);
}
