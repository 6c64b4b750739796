use crate::app::mode::AppMode;
use crate::formula::token::Token;

/// Snapshot of everything the UI needs to draw one frame. Purely derived
/// from controller state; the rendering layer holds no logic of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    pub tags: Vec<Token>,
    pub suggestions: Vec<Token>,
    pub suggestion_cursor: Option<usize>,
    pub tag_cursor: Option<usize>,
    /// Concatenated token values, e.g. `3+4`.
    pub formula: String,
    /// Evaluated result or the `NaN` sentinel.
    pub result: String,
    /// A lookup is still outstanding for the current text.
    pub searching: bool,
}

impl RenderState {
    /// True when the suggestion dropdown should be visible.
    pub fn show_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// True when the "No results found" panel should be visible: there is
    /// query text, the list is empty, and no lookup is in flight.
    pub fn show_no_results(&self) -> bool {
        !self.input.is_empty() && self.suggestions.is_empty() && !self.searching
    }

    /// True when the live `formula = result` line should be visible.
    pub fn show_formula(&self) -> bool {
        !self.tags.is_empty()
    }
}
