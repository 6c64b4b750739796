use crate::app::{App, AppMode, KeyPress};
use crate::config::Config;
use crate::suggest::SuggestionWorker;
use crate::ui::render::{
    entry_cursor_column, render_entry_line, render_formula_line, render_heading,
    render_help_line, render_no_results, render_suggestion_list,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(TuiManager { terminal, guard })
    }

    /// Drive the controller until it quits: poll the terminal for key
    /// events, surface due debounced queries to the worker, drain finished
    /// batches back into the controller, and redraw.
    pub fn run_event_loop(
        &mut self,
        app: &mut App,
        worker: &SuggestionWorker,
        config: &Config,
    ) -> io::Result<()> {
        let render_tick = Duration::from_millis(1000 / 60);
        let mut last_tick = Instant::now();
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if event::poll(config.poll_tick)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(app, key);
                }
            }

            if let Some(request) = app.poll_search(Instant::now()) {
                worker.submit(request);
            }
            while let Some(batch) = worker.try_recv() {
                app.apply_suggestions(batch);
            }

            if last_tick.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_tick = Instant::now();
            }
        }
    }

    fn handle_key(&self, app: &mut App, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            app.on_key_up();
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = key.code {
                if c == 'c' || c == 'q' {
                    app.quit();
                    return;
                }
            }
        }

        let press = match key.code {
            KeyCode::Char(c) => KeyPress::Char(c),
            KeyCode::Backspace => KeyPress::Backspace,
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Left => KeyPress::Left,
            KeyCode::Right => KeyPress::Right,
            KeyCode::Delete => KeyPress::Delete,
            KeyCode::Esc => KeyPress::Esc,
            _ => KeyPress::Other,
        };
        app.on_key_down(press, Instant::now());

        if !self.guard.enhanced_keys() {
            // This terminal never reports key releases, so re-arm the
            // backspace latch after every press. Held-key repeat protection
            // is lost on such terminals.
            app.on_key_up();
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // heading
                    Constraint::Length(1), // tag chips + entry text
                    Constraint::Min(5),    // suggestion dropdown / no-results
                    Constraint::Length(1), // formula = result
                    Constraint::Length(1), // key hints
                ])
                .split(area);

            frame.render_widget(render_heading(), chunks[0]);
            frame.render_widget(render_entry_line(&state), chunks[1]);

            if state.show_suggestions() {
                let mut list_state = ListState::default();
                list_state.select(state.suggestion_cursor);
                frame.render_stateful_widget(
                    render_suggestion_list(&state),
                    chunks[2],
                    &mut list_state,
                );
            } else if state.show_no_results() {
                frame.render_widget(render_no_results(), chunks[2]);
            }

            frame.render_widget(render_formula_line(&state), chunks[3]);
            frame.render_widget(render_help_line(), chunks[4]);

            if state.tag_cursor.is_none() {
                let column = chunks[1].x + entry_cursor_column(&state).min(chunks[1].width);
                frame.set_cursor_position((column, chunks[1].y));
            }
        })?;

        Ok(())
    }
}
