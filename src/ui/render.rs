use crate::app::RenderState;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render_heading() -> Paragraph<'static> {
    let title = Span::styled(
        "Formula Builder",
        Style::default()
            .fg(colors::text())
            .add_modifier(Modifier::BOLD),
    );
    let description = Span::styled(
        "  pick entities, type operators, watch the result",
        Style::default().fg(colors::dimmed()),
    );
    Paragraph::new(Line::from(vec![title, description]))
        .style(Style::default().bg(colors::background()))
}

fn chip_text(name: &str) -> String {
    format!(" {} \u{2715} ", name)
}

/// The tag chips followed by the editable entry text (or its placeholder).
pub fn render_entry_line(state: &RenderState) -> Paragraph<'static> {
    let mut spans = Vec::new();

    for (index, tag) in state.tags.iter().enumerate() {
        let style = if state.tag_cursor == Some(index) {
            Style::default().fg(colors::background()).bg(colors::accent())
        } else {
            Style::default().fg(colors::text()).bg(colors::chip())
        };
        spans.push(Span::styled(chip_text(&tag.name), style));
        spans.push(Span::raw(" "));
    }

    if state.input.is_empty() && state.tag_cursor.is_none() {
        spans.push(Span::styled(
            "name...",
            Style::default().fg(colors::dimmed()),
        ));
    } else {
        spans.push(Span::styled(
            state.input.clone(),
            Style::default().fg(colors::text()),
        ));
    }

    Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::background()))
}

/// Column of the text cursor inside the entry line, in cells.
pub fn entry_cursor_column(state: &RenderState) -> u16 {
    let mut column = 0usize;
    for tag in &state.tags {
        column += chip_text(&tag.name).width() + 1;
    }
    column += state.input.width();
    column as u16
}

pub fn render_suggestion_list(state: &RenderState) -> List<'static> {
    let items: Vec<ListItem<'static>> = state
        .suggestions
        .iter()
        .map(|entity| ListItem::new(entity.name.clone()))
        .collect();

    List::new(items)
        .style(Style::default().fg(colors::text()).bg(colors::background()))
        .highlight_style(
            Style::default()
                .fg(colors::background())
                .bg(colors::accent()),
        )
        .highlight_symbol("> ")
}

pub fn render_no_results() -> Paragraph<'static> {
    Paragraph::new("No results found")
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

/// The live `formula = result` line, shown once at least one tag exists.
pub fn render_formula_line(state: &RenderState) -> Paragraph<'static> {
    let line = if state.show_formula() {
        Line::from(vec![
            Span::styled(state.formula.clone(), Style::default().fg(colors::text())),
            Span::styled(" = ", Style::default().fg(colors::dimmed())),
            Span::styled(
                state.result.clone(),
                Style::default()
                    .fg(colors::accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from("")
    };
    Paragraph::new(line).style(Style::default().bg(colors::background()))
}

pub fn render_help_line() -> Paragraph<'static> {
    Paragraph::new("up/down select suggestion  enter commit  left/right tag  del remove  esc dismiss  ctrl+q quit")
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppMode;
    use crate::formula::Token;

    fn state_with(tags: Vec<Token>, input: &str) -> RenderState {
        RenderState {
            mode: AppMode::Editing,
            input: input.to_string(),
            formula: tags.iter().map(|t| t.value.clone()).collect(),
            tags,
            suggestions: vec![],
            suggestion_cursor: None,
            tag_cursor: None,
            result: "NaN".to_string(),
            searching: false,
        }
    }

    #[test]
    fn test_render_heading_creates_paragraph() {
        let _ = render_heading();
    }

    #[test]
    fn test_render_entry_line_with_tags() {
        let state = state_with(vec![Token::operator("+")], "ap");
        let _ = render_entry_line(&state);
    }

    #[test]
    fn test_render_entry_line_empty_state() {
        let state = state_with(vec![], "");
        let _ = render_entry_line(&state);
    }

    #[test]
    fn test_entry_cursor_column_grows_with_content() {
        let empty = state_with(vec![], "");
        let typed = state_with(vec![Token::operator("+")], "ap");
        assert!(entry_cursor_column(&typed) > entry_cursor_column(&empty));
    }

    #[test]
    fn test_render_suggestion_list_empty() {
        let state = state_with(vec![], "");
        let _ = render_suggestion_list(&state);
    }

    #[test]
    fn test_render_formula_line_hidden_without_tags() {
        let state = state_with(vec![], "");
        let _ = render_formula_line(&state);
    }

    #[test]
    fn test_render_no_results_creates_paragraph() {
        let _ = render_no_results();
    }
}
