use crate::app::event::KeyPress;
use crate::app::mode::AppMode;
use crate::app::render_state::RenderState;
use crate::config::Config;
use crate::formula::{evaluate, Token, TokenSequence};
use crate::suggest::{Debouncer, SearchRequest, SuggestionBatch};
use std::time::Instant;
use tracing::debug;

/// The input controller: owns the raw entry text, the committed token
/// sequence, the current suggestion list, and the key-release latch, and
/// turns key events into token commits.
pub struct App {
    mode: AppMode,
    input: String,
    tags: TokenSequence,
    suggestions: Vec<Token>,
    suggestion_cursor: Option<usize>,
    tag_cursor: Option<usize>,
    /// Armed by a key-up; a backspace pop re-requires it, so a held backspace
    /// deletes at most one tag per discrete press-release cycle.
    key_released: bool,
    /// True from a search trigger until its batch has been accepted. Keeps
    /// the "no results" panel quiet while a lookup is still outstanding.
    awaiting: bool,
    debounce: Debouncer,
    next_seq: u64,
    accepted_seq: u64,
    /// Derived result string, recomputed on every token sequence mutation.
    result: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: AppMode::Editing,
            input: String::new(),
            tags: TokenSequence::new(),
            suggestions: Vec::new(),
            suggestion_cursor: None,
            tag_cursor: None,
            key_released: false,
            awaiting: false,
            debounce: Debouncer::new(config.debounce_window),
            next_seq: 0,
            accepted_seq: 0,
            result: evaluate(&[]),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn quit(&mut self) {
        self.mode = AppMode::Quit;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tags(&self) -> &[Token] {
        self.tags.as_slice()
    }

    pub fn suggestions(&self) -> &[Token] {
        &self.suggestions
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// The entry field changed to `value`. An exact operator match commits
    /// immediately; anything else replaces the raw text. Either way the
    /// debounced lookup is (re)triggered with the new value.
    pub fn on_text_change(&mut self, value: &str, now: Instant) {
        self.dismiss_suggestions();
        if Token::is_operator_input(value) {
            self.commit(Token::operator(value));
        } else {
            self.input = value.to_string();
        }
        self.debounce.trigger(value.to_string(), now);
        self.awaiting = true;
    }

    pub fn on_key_down(&mut self, key: KeyPress, now: Instant) {
        match key {
            KeyPress::Char(c) => {
                let mut next = self.input.clone();
                next.push(c);
                self.on_text_change(&next, now);
            }
            KeyPress::Backspace => self.on_backspace(now),
            KeyPress::Enter => {
                // Free text never commits on Enter; only a highlighted
                // suggestion does.
                if let Some(index) = self.suggestion_cursor {
                    self.select_suggestion(index);
                }
            }
            KeyPress::Up => self.move_suggestion_cursor_up(),
            KeyPress::Down => self.move_suggestion_cursor_down(),
            KeyPress::Left => self.move_tag_cursor_left(),
            KeyPress::Right => self.move_tag_cursor_right(),
            KeyPress::Delete => self.delete_at_cursor(),
            KeyPress::Esc => self.dismiss_suggestions(),
            KeyPress::Other => {}
        }
        self.key_released = false;
    }

    pub fn on_key_up(&mut self) {
        self.key_released = true;
    }

    /// Append the suggestion at `index` as a tag, clearing the suggestion
    /// list and the raw text.
    pub fn select_suggestion(&mut self, index: usize) {
        let Some(token) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.dismiss_suggestions();
        self.commit(token);
    }

    /// Remove the tag at `index`; silent when out of range.
    pub fn delete_tag(&mut self, index: usize) {
        if self.tags.remove_at(index).is_some() {
            self.clamp_tag_cursor();
            self.reevaluate();
        }
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_cursor = None;
    }

    /// Surface a due debounced query, stamped with a fresh sequence number.
    pub fn poll_search(&mut self, now: Instant) -> Option<SearchRequest> {
        let query = self.debounce.poll(now)?;
        self.next_seq += 1;
        Some(SearchRequest {
            seq: self.next_seq,
            query,
        })
    }

    /// Accept a lookup result, discarding batches that arrive out of order
    /// behind one already applied.
    pub fn apply_suggestions(&mut self, batch: SuggestionBatch) {
        if batch.seq < self.accepted_seq {
            debug!(seq = batch.seq, accepted = self.accepted_seq, "discarding stale batch");
            return;
        }
        self.accepted_seq = batch.seq;
        self.suggestion_cursor = None;
        self.suggestions = batch.items;
        if batch.seq == self.next_seq && !self.debounce.is_pending() {
            self.awaiting = false;
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            input: self.input.clone(),
            tags: self.tags.as_slice().to_vec(),
            suggestions: self.suggestions.clone(),
            suggestion_cursor: self.suggestion_cursor,
            tag_cursor: self.tag_cursor,
            formula: self.tags.joined(),
            result: self.result.clone(),
            searching: self.awaiting,
        }
    }

    fn on_backspace(&mut self, now: Instant) {
        if self.input.is_empty() {
            if !self.tags.is_empty() && self.key_released {
                if let Some(popped) = self.tags.pop_last() {
                    // Restore the popped tag as editable text; no change
                    // event fires, so no lookup is triggered.
                    self.input = popped.name;
                }
                self.dismiss_suggestions();
                self.tag_cursor = None;
                self.reevaluate();
            }
        } else {
            let mut next = self.input.clone();
            next.pop();
            self.on_text_change(&next, now);
        }
    }

    fn commit(&mut self, token: Token) {
        self.tags.append(token);
        self.input.clear();
        self.tag_cursor = None;
        self.reevaluate();
    }

    fn reevaluate(&mut self) {
        self.result = evaluate(self.tags.as_slice());
    }

    fn move_suggestion_cursor_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    fn move_suggestion_cursor_up(&mut self) {
        self.suggestion_cursor = match self.suggestion_cursor {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    fn move_tag_cursor_left(&mut self) {
        if self.tags.is_empty() {
            return;
        }
        self.tag_cursor = Some(match self.tag_cursor {
            None => self.tags.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        });
    }

    fn move_tag_cursor_right(&mut self) {
        self.tag_cursor = match self.tag_cursor {
            Some(i) if i + 1 < self.tags.len() => Some(i + 1),
            _ => None,
        };
    }

    fn delete_at_cursor(&mut self) {
        if let Some(index) = self.tag_cursor {
            self.delete_tag(index);
        }
    }

    fn clamp_tag_cursor(&mut self) {
        self.tag_cursor = match self.tag_cursor {
            Some(_) if self.tags.is_empty() => None,
            Some(i) => Some(i.min(self.tags.len() - 1)),
            None => None,
        };
    }
}
